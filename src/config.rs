use std::path::PathBuf;

use crate::db::contact_file;
use crate::error::{TravelError, TravelResult};

/// Default location of the packing database, relative to the working directory.
pub const DEFAULT_PACKING_DB: &str = ".data/packing.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub contacts_path: PathBuf,
    pub packing_path: PathBuf,
    pub auto_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_path: PathBuf::from(contact_file::DEFAULT_FILE),
            packing_path: PathBuf::from(DEFAULT_PACKING_DB),
            auto_save: true,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Parses command-line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> TravelResult<Invocation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--contacts" | "-c" => {
                    config.contacts_path = args.next().map(PathBuf::from).ok_or_else(|| {
                        TravelError::InvalidArgument("--contacts requires a path argument".into())
                    })?;
                }
                "--packing" | "-p" => {
                    config.packing_path = args.next().map(PathBuf::from).ok_or_else(|| {
                        TravelError::InvalidArgument("--packing requires a path argument".into())
                    })?;
                }
                "--no-auto-save" => config.auto_save = false,
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(TravelError::InvalidArgument(format!(
                        "Unknown argument: {}",
                        other
                    )))
                }
            }
        }

        Ok(Invocation::Run(config))
    }
}

pub fn usage() -> &'static str {
    "Travelkit - emergency contacts and packing lists

Usage: travelkit [OPTIONS]

Options:
  -c, --contacts <PATH>  Contacts JSON file (default: emergency_contacts.json)
  -p, --packing <PATH>   Packing list database (default: .data/packing.db)
  --no-auto-save         Only save the packing list on 'save-items'
  -h, --help             Show this help

Environment:
  RUST_LOG               Log filter (default: warn)
  RUST_LOG_FORMAT        'json' for JSON log lines on stderr"
}
