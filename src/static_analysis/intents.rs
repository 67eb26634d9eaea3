//! Intent action features.

use crate::{
    error::Kind,
    features::{FeatureVector, ACTIVITY_CODE, RECEIVER_CODE, SERVICE_CODE},
    vocabulary::INTENT_ACTIONS,
    PARSER_CONFIG,
};
use failure::Error;
use xml::{
    attribute::OwnedAttribute,
    reader::{EventReader, XmlEvent},
};

/// Namespace of the Android manifest attributes.
pub const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

/// Gets the feature code of the component that declares an intent filter.
fn component_code(component: &str) -> Option<u8> {
    match component {
        "activity" => Some(ACTIVITY_CODE),
        "receiver" => Some(RECEIVER_CODE),
        "service" => Some(SERVICE_CODE),
        _ => None,
    }
}

/// Gets the `android:name` attribute.
fn android_name(attributes: &[OwnedAttribute]) -> Option<&str> {
    attributes
        .iter()
        .find(|attr| {
            attr.name.local_name == "name"
                && attr.name.namespace.as_ref().map(String::as_str) == Some(ANDROID_NAMESPACE)
        })
        .map(|attr| attr.value.as_str())
}

/// Extracts the intent action features of a manifest.
///
/// Only `action` elements directly inside an `intent-filter` of an activity, receiver or
/// service are considered. The feature is set to the code of the declaring component; if an
/// action is declared by several kinds of components, services take precedence over receivers
/// and receivers over activities.
pub fn extract<S: AsRef<str>>(manifest: S) -> Result<FeatureVector, Error> {
    let mut features = FeatureVector::new(&INTENT_ACTIONS);
    let parser = EventReader::new_with_config(manifest.as_ref().as_bytes(), PARSER_CONFIG.clone());

    // Open elements, from the root down. `None` for namespaced elements.
    let mut open: Vec<Option<String>> = Vec::new();
    for e in parser {
        match e {
            Ok(XmlEvent::StartElement {
                name, attributes, ..
            }) => {
                let is_action = name.namespace.is_none() && name.local_name == "action";
                let depth = open.len();
                // The component must not be the root element.
                if is_action && depth >= 3 && open[depth - 1].as_ref().map(String::as_str)
                    == Some("intent-filter")
                {
                    let code = open[depth - 2].as_ref().and_then(|c| component_code(c));
                    if let (Some(code), Some(action)) = (code, android_name(&attributes)) {
                        if features.get(action).map_or(false, |current| current < code) {
                            debug!("found intent action {} ({})", action, code);
                            let _ = features.set(action, code);
                        }
                    }
                }

                open.push(if name.namespace.is_none() {
                    Some(name.local_name)
                } else {
                    None
                });
            }
            Ok(XmlEvent::EndElement { .. }) => {
                let _ = open.pop();
            }
            Ok(_) => {}
            Err(e) => {
                return Err(Kind::Manifest {
                    message: e.to_string(),
                }
                .into());
            }
        }
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::vocabulary::INTENT_ACTIONS;

    fn manifest(components: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<manifest \
             xmlns:android=\"http://schemas.android.com/apk/res/android\" \
             package=\"com.example\">\n<application>\n{}\n</application>\n</manifest>",
            components
        )
    }

    fn component(tag: &str, action: &str) -> String {
        format!(
            "<{0} android:name=\".Component\"><intent-filter><action android:name=\"{1}\"/>\
             <category android:name=\"android.intent.category.DEFAULT\"/></intent-filter></{0}>",
            tag, action
        )
    }

    #[test]
    fn it_extract_component_codes() {
        for (tag, code) in &[("activity", 10), ("receiver", 11), ("service", 12)] {
            let features =
                extract(manifest(&component(tag, "android.intent.action.MAIN"))).unwrap();

            assert_eq!(features.get("android.intent.action.MAIN"), Some(*code));
            assert_eq!(features.found(), 1);
            assert_eq!(features.len(), INTENT_ACTIONS.len());
        }
    }

    #[test]
    fn it_extract_precedence() {
        let components = format!(
            "{}{}{}",
            component("service", "android.intent.action.BOOT_COMPLETED"),
            component("receiver", "android.intent.action.BOOT_COMPLETED"),
            component("activity", "android.intent.action.VIEW")
        );
        let features = extract(manifest(&components)).unwrap();

        assert_eq!(features.get("android.intent.action.BOOT_COMPLETED"), Some(12));
        assert_eq!(features.get("android.intent.action.VIEW"), Some(10));
        assert_eq!(features.found(), 2);
    }

    #[test]
    fn it_extract_ignores_other_elements() {
        let components = format!(
            "{}{}<activity><action android:name=\"android.intent.action.SEND\"/></activity>\
             <activity><intent-filter><action name=\"android.intent.action.DIAL\"/>\
             </intent-filter></activity>",
            component("provider", "android.intent.action.MAIN"),
            component("activity", "com.example.CUSTOM")
        );
        let features = extract(manifest(&components)).unwrap();

        assert_eq!(features.found(), 0);
    }

    #[test]
    fn it_extract_nested_component() {
        let features = extract(format!(
            "<manifest xmlns:android=\"http://schemas.android.com/apk/res/android\">{}</manifest>",
            component("receiver", "android.intent.action.SEND")
        ))
        .unwrap();

        assert_eq!(features.get("android.intent.action.SEND"), Some(11));
    }

    #[test]
    fn it_extract_root_component() {
        let features = extract(
            "<activity xmlns:android=\"http://schemas.android.com/apk/res/android\">\
             <intent-filter><action android:name=\"android.intent.action.MAIN\"/></intent-filter>\
             </activity>",
        )
        .unwrap();

        assert_eq!(features.found(), 0);
    }

    #[test]
    fn it_extract_malformed() {
        assert!(extract("<manifest><application></manifest>").is_err());
        assert!(extract("<manifest><activity android:name=\"a\"/></manifest>").is_err());
    }
}
