use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use crate::error::Error;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::semver::{BumpKind, Version};

mod error;
mod manifest;
mod utils;

#[derive(Parser)]
#[command(name = "bumpver")]
#[command(version)]
#[command(about = "Bump or set the [package] version in a Cargo manifest")]
#[command(group(ArgGroup::new("mode").required(true).args(["bump", "set"])))]
struct Cli {
    /// Relative bump to apply to the current version
    #[arg(long, value_enum)]
    bump: Option<BumpKind>,

    /// Explicit version to write, e.g. 1.2.3
    #[arg(long, value_name = "VERSION")]
    set: Option<String>,

    /// Path to the manifest to edit
    #[arg(long, default_value = "Cargo.toml")]
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(new_version) => {
            println!("{new_version}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            Logger::new().log_message(LogLevel::Error, &e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Error> {
    let text = fs::read_to_string(&cli.path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound {
                path: cli.path.clone(),
            }
        } else {
            Error::Read {
                path: cli.path.clone(),
                source: e,
            }
        }
    })?;

    let current = manifest::find_version(&text)?;

    let new_version = match (&cli.set, cli.bump) {
        (Some(explicit), _) => {
            // Validated only; the literal string is written verbatim.
            explicit.parse::<Version>()?;
            explicit.clone()
        }
        (None, Some(kind)) => current.value.parse::<Version>()?.bump(kind).to_string(),
        (None, None) => unreachable!("clap requires exactly one mode"),
    };

    let updated = manifest::set_version(&text, &new_version)?;
    fs::write(&cli.path, updated).map_err(|e| Error::Write {
        path: cli.path.clone(),
        source: e,
    })?;

    Logger::new().log_message(
        LogLevel::Success,
        &format!("{} -> {}", current.value, new_version),
    );
    Ok(new_version)
}
