//! Feature vocabularies.
//!
//! Every feature family has a fixed, ordered vocabulary that defines the columns of its CSV
//! output. They are built once and shared read-only by every analysis.

mod apis;
mod intents;
mod permissions;

use std::{collections::HashMap, slice::Iter};

/// Classes whose methods are considered sensitive platform APIs.
pub const SENSITIVE_CLASSES: &[&str] = &[
    "TelephonyManager",
    "SmsManager",
    "LocationManager",
    "AudioManager",
    "HttpURLConnection",
    "ConnectivityManager",
    "BroadcastReceiver",
    "Cipher",
    "AccessibleObject",
    "PackageManager",
];

lazy_static! {
    /// Permission vocabulary, without the `android.permission.` prefix.
    pub static ref PERMISSIONS: Vocabulary = Vocabulary::new(permissions::PERMISSIONS);
    /// Intent action vocabulary.
    pub static ref INTENT_ACTIONS: Vocabulary = Vocabulary::new(intents::INTENT_ACTIONS);
    /// Sensitive API method vocabulary.
    pub static ref SENSITIVE_APIS: Vocabulary = Vocabulary::new(apis::SENSITIVE_APIS);
}

/// Ordered set of feature names.
#[derive(Debug)]
pub struct Vocabulary {
    keys: &'static [&'static str],
    positions: HashMap<&'static str, usize>,
}

impl Vocabulary {
    /// Creates a vocabulary with the given keys, in column order.
    ///
    /// Repeated keys keep their first position.
    pub fn new(keys: &'static [&'static str]) -> Self {
        let mut positions = HashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            let _ = positions.entry(*key).or_insert(i);
        }

        Self { keys, positions }
    }

    /// Gets the number of features.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Checks if the vocabulary has no features.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Gets the column of the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).cloned()
    }

    /// Iterates over the keys in column order.
    pub fn keys(&self) -> Iter<'_, &'static str> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Vocabulary, INTENT_ACTIONS, PERMISSIONS, SENSITIVE_APIS};

    #[test]
    fn it_vocabulary_sizes() {
        assert_eq!(PERMISSIONS.len(), 335);
        assert_eq!(INTENT_ACTIONS.len(), 270);
        assert_eq!(SENSITIVE_APIS.len(), 512);
    }

    #[test]
    fn it_vocabulary_order() {
        assert_eq!(PERMISSIONS.keys().next(), Some(&"ACCEPT_HANDOVER"));
        assert_eq!(INTENT_ACTIONS.position("android.intent.action.MAIN"), Some(0));
        assert_eq!(SENSITIVE_APIS.position("getInputStream"), Some(0));
        assert!(PERMISSIONS.position("INTERNET").is_some());
        assert_eq!(PERMISSIONS.position("android.permission.INTERNET"), None);
    }

    #[test]
    fn it_vocabulary_repeated_keys() {
        static KEYS: &[&str] = &["a", "b", "a"];
        let vocabulary = Vocabulary::new(KEYS);

        assert_eq!(vocabulary.position("a"), Some(0));
        assert_eq!(vocabulary.position("b"), Some(1));
        assert_eq!(vocabulary.position("c"), None);
    }
}
