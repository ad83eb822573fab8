//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// Dependency smoke test: serialize a record, open a cache client, mount a router
#[derive(Parser, Debug)]
#[command(name = "depsmoke")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Redis server address (host:port)
    #[arg(long)]
    pub redis_addr: Option<String>,

    /// Redis password
    #[arg(long, env = "DEPSMOKE_REDIS_PASSWORD", hide_env_values = true)]
    pub redis_password: Option<String>,

    /// Redis logical database index
    #[arg(long)]
    pub redis_db: Option<i64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Splits out the values that override the loaded configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            redis_addr: self.redis_addr.clone(),
            redis_password: self.redis_password.clone(),
            redis_db: self.redis_db,
        }
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_no_args() {
        let args = Args::try_parse_from(["depsmoke"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert_eq!(args.default_log_filter(), "info");
        assert!(args.overrides().redis_addr.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "depsmoke",
            "-c",
            "smoke.toml",
            "--redis-addr",
            "cache:6380",
            "--redis-db",
            "3",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("smoke.toml")));
        assert_eq!(args.default_log_filter(), "debug");
        let overrides = args.overrides();
        assert_eq!(overrides.redis_addr.as_deref(), Some("cache:6380"));
        assert_eq!(overrides.redis_db, Some(3));
    }

    #[test]
    fn test_password_flag() {
        let args =
            Args::try_parse_from(["depsmoke", "--redis-password", "p@ss word"]).unwrap();
        assert_eq!(args.redis_password.as_deref(), Some("p@ss word"));
        assert_eq!(args.overrides().redis_password.as_deref(), Some("p@ss word"));
    }

    #[test]
    fn test_password_env_binding() {
        let command = Args::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "redis_password")
            .unwrap();
        assert_eq!(arg.get_env(), Some(OsStr::new("DEPSMOKE_REDIS_PASSWORD")));
        assert!(arg.is_hide_env_values_set());
    }

    #[test]
    fn test_help_names_env_var_without_value() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("--redis-password"));
        assert!(help.contains("DEPSMOKE_REDIS_PASSWORD"));
        assert!(!help.contains("DEPSMOKE_REDIS_PASSWORD="));
    }

    #[test]
    fn test_bad_db_rejected() {
        assert!(Args::try_parse_from(["depsmoke", "--redis-db", "zero"]).is_err());
    }
}
