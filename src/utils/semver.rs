use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// A strict `major.minor.patch` version. No pre-release or build metadata,
/// no leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl Version {
    /// Returns the next version for the given bump kind. Lower components
    /// reset to zero.
    pub fn bump(self, kind: BumpKind) -> Version {
        match kind {
            BumpKind::Patch => Version {
                patch: self.patch.saturating_add(1),
                ..self
            },
            BumpKind::Minor => Version {
                minor: self.minor.saturating_add(1),
                patch: 0,
                ..self
            },
            BumpKind::Major => Version {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
            },
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidVersionFormat(s.to_string());
        let mut parts = s.split('.');
        let major = parse_component(parts.next()).ok_or_else(invalid)?;
        let minor = parse_component(parts.next()).ok_or_else(invalid)?;
        let patch = parse_component(parts.next()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Version {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for BumpKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patch" => Ok(BumpKind::Patch),
            "minor" => Ok(BumpKind::Minor),
            "major" => Ok(BumpKind::Major),
            _ => Err(Error::UnknownBumpKind(s.to_string())),
        }
    }
}

/// A component is either `0` or a digit sequence that does not start with
/// a zero. Values beyond `u64::MAX` are rejected as invalid even though
/// they satisfy the textual grammar.
fn parse_component(part: Option<&str>) -> Option<u64> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.0", 0, 0, 0)]
    #[case("1.2.3", 1, 2, 3)]
    #[case("10.0.99", 10, 0, 99)]
    #[case("0.10.0", 0, 10, 0)]
    fn parses_and_round_trips(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
    ) {
        let version: Version = input.parse().unwrap();
        assert_eq!(
            version,
            Version {
                major,
                minor,
                patch
            }
        );
        assert_eq!(version.to_string(), input);
    }

    #[rstest]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("1.02.3")]
    #[case("01.2.3")]
    #[case("v1.2.3")]
    #[case("1.2.3-rc1")]
    #[case("1..3")]
    #[case("1.2.")]
    #[case("")]
    #[case("1.2.three")]
    #[case(" 1.2.3")]
    fn rejects_invalid_versions(#[case] input: &str) {
        let err = input.parse::<Version>().unwrap_err();
        assert!(matches!(err, Error::InvalidVersionFormat(_)));
    }

    #[rstest]
    #[case(BumpKind::Patch, "1.2.4")]
    #[case(BumpKind::Minor, "1.3.0")]
    #[case(BumpKind::Major, "2.0.0")]
    fn bumps_reset_lower_components(#[case] kind: BumpKind, #[case] expected: &str) {
        let version: Version = "1.2.3".parse().unwrap();
        assert_eq!(version.bump(kind).to_string(), expected);
    }

    #[test]
    fn bump_saturates_at_the_integer_bound() {
        let version: Version = "0.0.18446744073709551615".parse().unwrap();
        assert_eq!(version.bump(BumpKind::Patch).patch, u64::MAX);

        let version = Version {
            major: u64::MAX,
            minor: 1,
            patch: 2,
        };
        assert_eq!(
            version.bump(BumpKind::Major),
            Version {
                major: u64::MAX,
                minor: 0,
                patch: 0,
            }
        );
    }

    #[test]
    fn bump_kind_parses_known_names() {
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);
        assert_eq!("MINOR".parse::<BumpKind>().unwrap(), BumpKind::Minor);
    }

    #[test]
    fn bump_kind_rejects_unknown_names() {
        let err = "release".parse::<BumpKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownBumpKind(_)));
    }
}
