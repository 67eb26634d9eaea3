//! Permission features.

use crate::{features::FeatureVector, vocabulary::PERMISSIONS};

/// Prefix of every platform permission name.
pub const PERMISSION_PREFIX: &str = "android.permission.";

/// Extracts the permission features of a manifest.
///
/// The manifest is scanned as plain text: a permission is present if `android.permission.`
/// followed by its name appears anywhere, so malformed XML does not prevent the extraction.
pub fn extract<S: AsRef<str>>(manifest: S) -> FeatureVector {
    let manifest = manifest.as_ref();
    let mut features = FeatureVector::new(&PERMISSIONS);

    if !manifest.contains(PERMISSION_PREFIX) {
        return features;
    }

    for permission in PERMISSIONS.keys() {
        let name = format!("{}{}", PERMISSION_PREFIX, permission);
        if manifest.contains(name.as_str()) {
            debug!("found permission {}", permission);
            let _ = features.set(permission, 1);
        }
    }

    features
}
