//! JSON report generation module.

use super::Generator;
use crate::{config::Config, results::BatchReport};
use failure::{Error, ResultExt};
use serde_json::ser;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

/// JSON report generator.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    /// Creates a new JSON report generator.
    pub fn new() -> Self {
        Json
    }
}

impl Generator for Json {
    fn generate(&mut self, config: &Config, report: &BatchReport) -> Result<(), Error> {
        fs::create_dir_all(config.results_folder())?;
        let path = config.report_file();
        debug!("writing the JSON report to `{}`", path.display());

        let mut f = BufWriter::new(
            File::create(&path)
                .with_context(|_| format!("could not create `{}`", path.display()))?,
        );
        ser::to_writer_pretty(&mut f, report)?;
        f.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Json;
    use crate::{
        config::tests::config_in,
        results::{BatchReport, Generator},
    };
    use std::{env, fs};

    #[test]
    fn it_json_report() {
        let folder = env::temp_dir().join("droid-features-json-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "");

        let mut report = BatchReport::start("apks");
        report.finish();
        Json::new().generate(&config, &report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(config.report_file()).unwrap()).unwrap();
        assert_eq!(json["directory"], "apks");
        assert!(json["tasks"].as_array().unwrap().is_empty());

        fs::remove_dir_all(&folder).unwrap();
    }
}
