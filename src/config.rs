//! Store location, resolved from the command line or the environment.

use crate::infra::DEFAULT_DB_PATH;
use clap::Parser;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "SHIPMENTS_DB_PATH";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "shipments",
    version,
    about = "Open the shipments store, create schema and seed rows, and report table sizes"
)]
pub struct DbConfig {
    /// SQLite database file (created if missing)
    #[arg(
        value_name = "DB_PATH",
        env = DB_PATH_ENV,
        default_value = DEFAULT_DB_PATH,
        value_parser = parse_db_path
    )]
    pub path: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

fn parse_db_path(s: &str) -> Result<PathBuf, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("database path must not be empty".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn default_path_is_shipments_db() {
        assert_eq!(DbConfig::default().path, PathBuf::from("shipments.db"));
    }

    #[test]
    fn positional_arg_sets_path() {
        let cfg = DbConfig::try_parse_from(["shipments", "data/s.db"]).unwrap();
        assert_eq!(cfg.path, PathBuf::from("data/s.db"));
    }

    #[test]
    fn path_is_trimmed() {
        let cfg = DbConfig::try_parse_from(["shipments", "  /tmp/x.db "]).unwrap();
        assert_eq!(cfg.path, PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn blank_path_is_rejected() {
        let err = DbConfig::try_parse_from(["shipments", "   "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = DbConfig::try_parse_from(["shipments", "-v", "data/s.db"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_stops_before_opening_store() {
        let err = DbConfig::try_parse_from(["shipments", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(DbConfig::try_parse_from(["shipments", "a.db", "b.db"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        DbConfig::command().debug_assert();
    }
}
