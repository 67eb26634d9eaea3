//! Fixed-schema feature vectors and their CSV serialization.

use crate::vocabulary::Vocabulary;
use failure::{Error, ResultExt};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Feature value of an intent action declared by an activity.
pub const ACTIVITY_CODE: u8 = 10;
/// Feature value of an intent action declared by a broadcast receiver.
pub const RECEIVER_CODE: u8 = 11;
/// Feature value of an intent action declared by a service.
pub const SERVICE_CODE: u8 = 12;

/// Values observed for every key of a vocabulary.
///
/// The vector always has one value per vocabulary key, in vocabulary order, so every row
/// written for a family has the same width.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    vocabulary: &'static Vocabulary,
    values: Box<[u8]>,
}

impl FeatureVector {
    /// Creates a vector with every feature set to its default, 0.
    pub fn new(vocabulary: &'static Vocabulary) -> Self {
        Self {
            vocabulary,
            values: vec![0; vocabulary.len()].into_boxed_slice(),
        }
    }

    /// Sets the value of a feature.
    ///
    /// Returns `false`, leaving the vector untouched, if the key is not in the vocabulary.
    pub fn set<S: AsRef<str>>(&mut self, key: S, value: u8) -> bool {
        match self.vocabulary.position(key.as_ref()) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Gets the value of a feature.
    pub fn get<S: AsRef<str>>(&self, key: S) -> Option<u8> {
        self.vocabulary
            .position(key.as_ref())
            .map(|i| self.values[i])
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if the vector has no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.vocabulary
            .keys()
            .cloned()
            .zip(self.values.iter().cloned())
    }

    /// Number of features with a value different from the default.
    pub fn found(&self) -> usize {
        self.values.iter().filter(|v| **v != 0).count()
    }

    /// CSV header, optionally preceded by an identifier column.
    pub fn header(&self, id_column: Option<&str>) -> String {
        let mut header = String::new();
        if let Some(column) = id_column {
            header.push_str(column);
            header.push(',');
        }
        header.push_str(&self.vocabulary.keys().cloned().collect::<Vec<_>>().join(","));
        header
    }

    /// CSV data row, optionally preceded by an identifier value.
    pub fn row(&self, id: Option<&str>) -> String {
        let mut row = String::new();
        if let Some(id) = id {
            row.push_str(id);
            row.push(',');
        }
        row.push_str(
            &self
                .values
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        row
    }

    /// Writes the vector as a two-line CSV file: the header and a single data row.
    ///
    /// `id` is an optional `(column, value)` identifier pair placed first in both lines. The
    /// parent folder is created if needed.
    pub fn save<P: AsRef<Path>>(&self, path: P, id: Option<(&str, &str)>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|_| format!("could not create folder `{}`", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|_| format!("could not create `{}`", path.display()))?;
        let mut f = BufWriter::new(file);
        writeln!(f, "{}", self.header(id.map(|(column, _)| column)))?;
        writeln!(f, "{}", self.row(id.map(|(_, value)| value)))?;
        f.flush()?;

        Ok(())
    }
}
