//! Applications of the input directory.

use crate::utils::application_name;
use failure::{Error, ResultExt};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Application package to analyze.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Application {
    name: String,
    package: PathBuf,
}

impl Application {
    /// Creates the application of the given package file.
    pub fn new<P: AsRef<Path>>(package: P) -> Option<Self> {
        let package = package.as_ref();
        application_name(package).map(|name| Self {
            name,
            package: package.to_path_buf(),
        })
    }

    /// Lists the applications of a directory, in file name order.
    ///
    /// Every regular file is considered an application; folders are ignored. Every output file is
    /// named after the application, so when two packages get the same name (`app` and
    /// `app.apk`) only the first one is kept.
    pub fn list<P: AsRef<Path>>(directory: P) -> Result<Vec<Self>, Error> {
        let directory = directory.as_ref();
        let mut packages = Vec::new();
        for entry in fs::read_dir(directory)
            .with_context(|_| format!("could not read directory `{}`", directory.display()))?
        {
            let path = entry?.path();
            if path.is_file() {
                packages.push(path);
            }
        }
        packages.sort();

        let mut names = HashSet::new();
        let mut applications = Vec::with_capacity(packages.len());
        for package in packages {
            match Self::new(&package) {
                Some(app) => {
                    if names.insert(app.name.clone()) {
                        applications.push(app);
                    } else {
                        warn!(
                            "`{}` has the same name as another application, it will be skipped",
                            package.display()
                        );
                    }
                }
                None => warn!("`{}` does not have a valid file name", package.display()),
            }
        }

        Ok(applications)
    }

    /// Gets the name of the application.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Gets the path of the package.
    pub fn package(&self) -> &Path {
        &self.package
    }
}
