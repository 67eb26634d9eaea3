//! Command line interface.

use clap::{App, AppSettings, Arg};

/// Generates the command line interface.
#[allow(unknown_lints, dangerous_implicit_autorefs)]
pub fn generate_cli() -> App<'static, 'static> {
    App::new("droid-features")
        .version(crate_version!())
        .author(crate_authors!(", "))
        .about(
            "Extracts permission, intent and sensitive API features from a directory of Android \
             applications.",
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("directory")
                .help("Directory containing the .apk files to analyze")
                .value_name("DIRECTORY")
                .required(true)
                .takes_value(true),
        )
}

#[cfg(test)]
mod tests {
    use super::generate_cli;
    use clap::ErrorKind;

    #[test]
    fn it_cli_directory() {
        let matches = generate_cli()
            .get_matches_from_safe(vec!["droid-features", "apks"])
            .unwrap();
        assert_eq!(matches.value_of("directory"), Some("apks"));
    }

    #[test]
    fn it_cli_missing_directory() {
        let error = generate_cli()
            .get_matches_from_safe(vec!["droid-features"])
            .unwrap_err();

        assert_eq!(error.kind, ErrorKind::MissingArgumentOrSubcommand);
        // Errors written to stderr exit with status 1.
        assert!(error.use_stderr());
    }

    #[test]
    fn it_cli_unexpected_argument() {
        assert!(generate_cli()
            .get_matches_from_safe(vec!["droid-features", "apks", "more"])
            .is_err());
        assert!(generate_cli()
            .get_matches_from_safe(vec!["droid-features", "--threads", "4", "apks"])
            .is_err());
    }
}
