#[macro_use]
extern crate log;

use droid_features::{analyze_directory, cli::generate_cli, initialize_logger, Config};
use std::path::Path;

fn main() {
    let matches = generate_cli().get_matches();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    initialize_logger(config.is_verbose());

    if let Some(e) = config_error {
        warn!(
            "there was an error loading the configuration, the defaults will be used: {}",
            e
        );
    }
    for error in config.errors() {
        warn!("{}", error);
    }

    if let Some(directory) = matches.value_of("directory") {
        let directory = Path::new(directory);
        if !directory.is_dir() {
            warn!("`{}` is not a directory", directory.display());
        }

        match analyze_directory(directory, &config) {
            Ok(_) => info!(
                "Done. The report can be found in `{}`.",
                config.report_file().display()
            ),
            Err(e) => error!("{}", e),
        }
    }
}
