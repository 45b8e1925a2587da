// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Result,
};
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    SizeUnit,
    VALID_SIZE_UNITS,
};
use std::str::FromStr;
use tracing::debug;

// Default unit that sizes are displayed in.
const DEFAULT_UNIT: &str = "bytes";

// Bucket names are opaque to us, but they can't be empty.
fn is_valid_bucket_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("bucket name must not be empty".into());
    }

    Ok(s.to_string())
}

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKET")
                .value_name("BUCKET")
                .help("Name of the bucket to report the size of")
                .required(true)
                .value_parser(is_valid_bucket_name)
        )
        .arg(
            Arg::new("PROFILE")
                .long("profile")
                .short('p')
                .value_name("PROFILE")
                .help("AWS profile (default uses environment configuration)")
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("AWS region (default uses environment configuration)")
        )
        .arg(
            Arg::new("UNIT")
                .env("S3SIZE_UNIT")
                .hide_env_values(true)
                .long("unit")
                .short('u')
                .value_name("UNIT")
                .help("Sets the unit to use for size display")
                .default_value(DEFAULT_UNIT)
                .value_parser(VALID_SIZE_UNITS)
        )
}

/// Parse the command line.
///
/// Errors, including requests for `--help` and `--version`, are returned for
/// the caller to print and exit with `usage_exit_code`.
pub fn parse_args() -> clap::error::Result<ArgMatches> {
    debug!("Parsing command line arguments");

    create_app().try_get_matches()
}

/// Exit status for a command line parsing error.
///
/// `--help` and `--version` are successful, genuine usage errors exit 1 like
/// every other failure.
pub fn usage_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        1
    }
    else {
        0
    }
}

/// Build the `ClientConfig` from parsed command line arguments.
pub fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    // Required and validated by clap, this shouldn't fail.
    let bucket_name = matches
        .get_one::<String>("BUCKET")
        .ok_or_else(|| anyhow!("missing bucket name"))?;

    let unit = matches
        .get_one::<String>("UNIT")
        .map_or(DEFAULT_UNIT, String::as_str);

    let unit = SizeUnit::from_str(unit)
        .map_err(|e| anyhow!("invalid unit '{}': {}", unit, e))?;

    let config = ClientConfig {
        profile: matches.get_one::<String>("PROFILE").cloned(),
        region:  matches.get_one::<String>("REGION").cloned(),
        unit:    unit,
        ..ClientConfig::new(bucket_name)
    };

    debug!("client_config: {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matches_from(args: &[&str]) -> clap::error::Result<ArgMatches> {
        let mut argv = vec![crate_name!()];
        argv.extend_from_slice(args);

        create_app().try_get_matches_from(argv)
    }

    #[test]
    fn test_create_app_is_valid() {
        create_app().debug_assert();
    }

    #[test]
    fn test_bucket_name_required() {
        assert!(matches_from(&[]).is_err());
        assert!(matches_from(&[""]).is_err());
    }

    #[test]
    fn test_client_config() {
        let matches = matches_from(&[
            "--profile", "staging",
            "--region", "eu-west-2",
            "--unit", "binary",
            "test-bucket",
        ]).unwrap();

        let config = client_config(&matches).unwrap();

        assert_eq!(config.bucket_name, "test-bucket");
        assert_eq!(config.profile, Some("staging".to_string()));
        assert_eq!(config.region, Some("eu-west-2".to_string()));
        assert!(matches!(config.unit, SizeUnit::Binary(_)));
    }

    #[test]
    fn test_client_config_short_flags() {
        let matches = matches_from(&[
            "-p", "prod",
            "-r", "us-east-1",
            "test-bucket",
        ]).unwrap();

        let config = client_config(&matches).unwrap();

        assert_eq!(config.profile, Some("prod".to_string()));
        assert_eq!(config.region, Some("us-east-1".to_string()));
    }

    #[test]
    fn test_usage_exit_code() {
        let tests = vec![
            (vec![],                     1),
            (vec![""],                   1),
            (vec!["--unit", "kilobytes", "test-bucket"], 1),
            (vec!["--help"],             0),
            (vec!["--version"],          0),
        ];

        for test in tests {
            let args     = test.0;
            let expected = test.1;

            let e = matches_from(&args).unwrap_err();

            assert_eq!(usage_exit_code(&e), expected);
        }
    }

    #[test]
    fn test_invalid_unit() {
        let ret = matches_from(&["--unit", "kilobytes", "test-bucket"]);

        assert!(ret.is_err());
    }
}
