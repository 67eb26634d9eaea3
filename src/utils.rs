//! Utilities module.

use std::{ffi::OsStr, fs, io, path::Path};
use xml::ParserConfig;

lazy_static! {
    /// XML parser configuration.
    pub static ref PARSER_CONFIG: ParserConfig = ParserConfig::new()
        .trim_whitespace(true)
        .whitespace_to_characters(false)
        .cdata_to_characters(false)
        .ignore_comments(true)
        .coalesce_characters(true);
}

/// Checks if the given path points to an existing, non-empty file.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

/// Gets the name of an application from the file name of its package.
///
/// A trailing `.apk` extension is removed, any other extension is kept.
pub fn application_name<P: AsRef<Path>>(package: P) -> Option<String> {
    let package = package.as_ref();
    let name = if package.extension() == Some(OsStr::new("apk")) {
        package.file_stem()
    } else {
        package.file_name()
    };

    name.and_then(OsStr::to_str).map(str::to_owned)
}

/// Copies a file, creating the parent folders of the destination.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> io::Result<()> {
    let to = to.as_ref();
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    let _ = fs::copy(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{application_name, copy_file, file_exists};
    use std::{env, fs};

    #[test]
    fn it_application_name() {
        assert_eq!(application_name("apks/app.apk"), Some(String::from("app")));
        assert_eq!(
            application_name("apks/com.example.app.apk"),
            Some(String::from("com.example.app"))
        );
        assert_eq!(application_name("apks/app.zip"), Some(String::from("app.zip")));
        assert_eq!(application_name("apks/app"), Some(String::from("app")));
        assert_eq!(application_name("/"), None);
    }

    #[test]
    fn it_file_exists() {
        let folder = env::temp_dir().join("droid-features-utils-test");
        let _ = fs::remove_dir_all(&folder);
        let file = folder.join("copy").join("file.txt");

        assert!(!file_exists(&file));
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("file.txt"), "content").unwrap();
        fs::write(folder.join("empty.txt"), "").unwrap();
        assert!(file_exists(folder.join("file.txt")));
        assert!(!file_exists(folder.join("empty.txt")));
        assert!(!file_exists(&folder));

        copy_file(folder.join("file.txt"), &file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "content");

        fs::remove_dir_all(&folder).unwrap();
    }
}
