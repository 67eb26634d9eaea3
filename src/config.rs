//! Configuration module.
//!
//! Handles and configures the initial settings and variables needed to run the program. The
//! configuration is read from a TOML file; every option has a default, so a file only needs to
//! list the options it changes:
//!
//! ```toml
//! verbose = true
//! results_folder = "features"
//! apktool_file = "/usr/share/apktool/apktool.jar"
//! ```

use crate::{error::Kind, results::Family};
use failure::{Error, ResultExt};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Local configuration file.
pub const CONFIG_FILE: &str = "config.toml";
/// System-wide configuration file, used on UNIX if there is no local one.
pub const GLOBAL_CONFIG_FILE: &str = "/etc/droid-features/config.toml";

/// Config structure.
///
/// Contains configuration related fields. It is used for storing the configuration parameters
/// and checking their values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Boolean representing the verbose mode status.
    verbose: bool,
    /// Boolean representing the force mode status: artifacts are regenerated even if they
    /// already exist.
    force: bool,
    /// Boolean representing whether the external tools are run to generate missing artifacts.
    extract: bool,
    /// Boolean representing whether the per-application CSV files are merged in datasets.
    merge: bool,
    /// Folder where the feature files, datasets and report are written.
    results_folder: PathBuf,
    /// Folder where the extracted `AndroidManifest.xml` files are stored.
    manifests_folder: PathBuf,
    /// Folder where the call graphs are stored.
    callgraphs_folder: PathBuf,
    /// Folder where applications are decompressed.
    dist_folder: PathBuf,
    /// Path to the apktool JAR file.
    apktool_file: PathBuf,
    /// Command running androguard.
    androguard_command: String,
}

impl Config {
    /// Loads the configuration from the given TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|_| format!("could not read `{}`", path.display()))?;

        toml::from_str(&toml).map_err(|e| {
            Kind::Config {
                message: format!("`{}`: {}", path.display(), e),
            }
            .into()
        })
    }

    /// Loads the configuration from the configuration files.
    ///
    /// On UNIX, if the local file (`config.toml`) does not exist but the global one does
    /// (`/etc/droid-features/config.toml`), the latter is used. Otherwise the local file is
    /// used. If none of them exists, the default configuration is returned.
    pub fn load() -> Result<Self, Error> {
        let config_path = PathBuf::from(CONFIG_FILE);
        let global_config_path = PathBuf::from(GLOBAL_CONFIG_FILE);

        if cfg!(target_family = "unix") && !config_path.exists() && global_config_path.exists() {
            Self::from_file(&global_config_path)
        } else if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Gets the problems found in the configuration.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.extract {
            if self.apktool_file.extension().map_or(true, |e| e != "jar") {
                errors.push(format!(
                    "the apktool file `{}` must be a JAR file",
                    self.apktool_file.display()
                ));
            } else if !self.apktool_file.exists() {
                errors.push(format!(
                    "the apktool file `{}` does not exist, manifests will not be extracted",
                    self.apktool_file.display()
                ));
            }
            if self.androguard_command.trim().is_empty() {
                errors.push(String::from("the androguard command must not be empty"));
            }
        }
        errors
    }

    /// Returns true if the application is running in `--verbose` mode.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Returns true if existing artifacts have to be regenerated.
    pub fn is_force(&self) -> bool {
        self.force
    }

    /// Returns true if the external tools should be run for missing artifacts.
    pub fn has_to_extract(&self) -> bool {
        self.extract
    }

    /// Returns true if the per-application files have to be merged in datasets.
    pub fn has_to_merge(&self) -> bool {
        self.merge
    }

    /// Returns the results folder.
    pub fn results_folder(&self) -> &Path {
        &self.results_folder
    }

    /// Returns the folder for the per-application files of a feature family.
    pub fn family_folder(&self, family: Family) -> PathBuf {
        self.results_folder.join(family.folder_name())
    }

    /// Returns the path of the merged dataset of a feature family.
    pub fn dataset_file(&self, family: Family) -> PathBuf {
        self.results_folder
            .join(format!("{}_merged.csv", family.name()))
    }

    /// Returns the path of the batch report.
    pub fn report_file(&self) -> PathBuf {
        self.results_folder.join("report.json")
    }

    /// Returns the folder of the extracted manifests.
    pub fn manifests_folder(&self) -> &Path {
        &self.manifests_folder
    }

    /// Returns the folder of the call graphs.
    pub fn callgraphs_folder(&self) -> &Path {
        &self.callgraphs_folder
    }

    /// Returns the decompression folder.
    pub fn dist_folder(&self) -> &Path {
        &self.dist_folder
    }

    /// Returns the path to the apktool JAR file.
    pub fn apktool_file(&self) -> &Path {
        &self.apktool_file
    }

    /// Returns the androguard command.
    pub fn androguard_command(&self) -> &str {
        self.androguard_command.as_str()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            force: false,
            extract: true,
            merge: true,
            results_folder: PathBuf::from("."),
            manifests_folder: PathBuf::from("manifests"),
            callgraphs_folder: PathBuf::from("callgraphs"),
            dist_folder: PathBuf::from("apkd"),
            apktool_file: PathBuf::from("apktool.jar"),
            androguard_command: String::from("androguard"),
        }
    }
}
