use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize, Default)]
struct PackageSection {
    version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ManifestDoc {
    package: Option<PackageSection>,
}

/// The first `version = "..."` assignment inside the `[package]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionField {
    pub value: String,
    line: usize,
}

/// Scans the manifest top to bottom for the package version line.
///
/// Section headers flip a single "inside `[package]`" flag; while it is set,
/// the first line matching `version = "<value>"` wins. Assignments in other
/// sections are ignored.
pub fn find_version(text: &str) -> Result<VersionField, Error> {
    let mut in_package = false;
    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            in_package = trimmed == "[package]";
            continue;
        }
        if !in_package {
            continue;
        }
        if let Some(value) = match_version_line(trimmed) {
            return Ok(VersionField {
                value: value.to_string(),
                line: idx,
            });
        }
    }
    Err(Error::VersionFieldNotFound)
}

/// Replaces the quoted value on the located version line.
///
/// Every other byte of the manifest is preserved, including spacing around
/// `=`, anything after the closing quote, and the line ending. The result is
/// built fully in memory so a failure never leaves a half-edited file behind.
pub fn set_version(text: &str, new_version: &str) -> Result<String, Error> {
    let field = find_version(text)?;
    let mut updated = String::with_capacity(text.len() + new_version.len());
    for (idx, line) in text.split_inclusive('\n').enumerate() {
        if idx == field.line {
            updated.push_str(&splice_value(line, new_version));
        } else {
            updated.push_str(line);
        }
    }
    verify_rewrite(&updated, new_version)?;
    Ok(updated)
}

/// Matches `version`, optional whitespace, `=`, optional whitespace, then a
/// double-quoted non-empty value with nothing but whitespace after it.
fn match_version_line(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix("version")?.trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    if rest[..end].is_empty() || !rest[end + 1..].trim().is_empty() {
        return None;
    }
    Some(&rest[..end])
}

fn splice_value(line: &str, new_version: &str) -> String {
    // find_version only yields lines with a quoted value, so both quotes
    // are present here.
    let open = line.find('"').map(|i| i + 1).unwrap_or(0);
    let close = line[open..].find('"').map(|i| open + i).unwrap_or(open);
    format!("{}{}{}", &line[..open], new_version, &line[close..])
}

/// Lenient post-edit check: if the updated text still parses as TOML, the
/// `[package]` version it reports must be the value we just wrote.
fn verify_rewrite(updated: &str, expected: &str) -> Result<(), Error> {
    let parsed = toml::from_str::<ManifestDoc>(updated)
        .ok()
        .and_then(|doc| doc.package)
        .and_then(|package| package.version);
    match parsed {
        Some(found) if found != expected => Err(Error::RewriteMismatch {
            expected: expected.to_string(),
            found,
        }),
        _ => Ok(()),
    }
}
