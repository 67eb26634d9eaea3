//! Merging of per-application feature files in datasets.

use super::Family;
use failure::{Error, ResultExt};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Column appended to every row of a dataset, with the name of the source file.
pub const FILENAME_COLUMN: &str = "filename";

/// Merged dataset of a feature family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    family: Family,
    path: PathBuf,
    rows: usize,
}

impl Dataset {
    /// Gets the feature family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Gets the path of the dataset.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of application rows.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Merges the given per-application CSV files of a family in a single dataset.
///
/// Files are read in name order. Every row gets the name of its file appended, so the rows of
/// the different families of an application can be joined afterwards. Files that do not have
/// the family header, or have no data row, are left out.
pub fn merge<I, P, O>(family: Family, inputs: I, output: O) -> Result<Dataset, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    O: AsRef<Path>,
{
    let output = output.as_ref();
    let header = family.header();

    let mut files: Vec<PathBuf> = inputs
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files.dedup();

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = BufWriter::new(
        File::create(output)
            .with_context(|_| format!("could not create `{}`", output.display()))?,
    );
    writeln!(f, "{},{}", header, FILENAME_COLUMN)?;

    let mut rows = 0;
    for path in files {
        let file_name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name.to_owned(),
            None => continue,
        };

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("failed to read `{}`: {}", path.display(), e);
                continue;
            }
        };

        let mut lines = content.lines();
        match (lines.next(), lines.next()) {
            (Some(file_header), Some(row)) if file_header == header && !row.is_empty() => {
                writeln!(f, "{},{}", row, file_name)?;
                rows += 1;
            }
            _ => warn!(
                "`{}` is not a valid {} file, it will not be merged",
                path.display(),
                family
            ),
        }
    }
    f.flush()?;

    Ok(Dataset {
        family,
        path: output.to_path_buf(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::merge;
    use crate::{features::FeatureVector, results::Family, vocabulary::PERMISSIONS};
    use std::{env, fs};

    #[test]
    fn it_merge() {
        let folder = env::temp_dir().join("droid-features-merge-test");
        let _ = fs::remove_dir_all(&folder);
        let data = folder.join("permissions_data");

        let mut features = FeatureVector::new(&PERMISSIONS);
        features.save(data.join("b.csv"), None).unwrap();
        let _ = features.set("INTERNET", 1);
        features.save(data.join("a.csv"), None).unwrap();
        fs::write(data.join("broken.csv"), "INTERNET\n1\n").unwrap();
        fs::write(data.join("empty.csv"), "").unwrap();

        let output = folder.join("permissions_merged.csv");
        let inputs = vec![
            data.join("empty.csv"),
            data.join("b.csv"),
            data.join("broken.csv"),
            data.join("a.csv"),
            data.join("missing.csv"),
        ];
        let dataset = merge(Family::Permissions, &inputs, &output).unwrap();
        assert_eq!(dataset.rows(), 2);
        assert_eq!(dataset.family(), Family::Permissions);
        assert_eq!(dataset.path(), output.as_path());

        let merged = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = merged.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{},filename", Family::Permissions.header()));
        assert_eq!(lines[1], format!("{},a.csv", features.row(None)));
        assert!(lines[2].ends_with(",b.csv"));
        assert_eq!(lines[2].split(',').count(), PERMISSIONS.len() + 1);

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn it_merge_only_given_files() {
        let folder = env::temp_dir().join("droid-features-merge-given-test");
        let _ = fs::remove_dir_all(&folder);
        let data = folder.join("intents_data");

        let features = FeatureVector::new(&crate::vocabulary::INTENT_ACTIONS);
        features.save(data.join("current.csv"), None).unwrap();
        features.save(data.join("previous.csv"), None).unwrap();

        let output = folder.join("intents_merged.csv");
        let dataset = merge(Family::Intents, &[data.join("current.csv")], &output).unwrap();
        assert_eq!(dataset.rows(), 1);
        let merged = fs::read_to_string(&output).unwrap();
        assert!(!merged.contains("previous.csv"));

        let dataset = merge(Family::Intents, Vec::<String>::new(), &output).unwrap();
        assert_eq!(dataset.rows(), 0);
        assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 1);

        fs::remove_dir_all(&folder).unwrap();
    }
}
