//! Static analysis of the application manifests.
//!
//! The manifest of every application is scanned for the permissions it mentions and for the
//! intent actions its components declare. Both families are written independently: a manifest
//! that is not valid XML still gets its permission features.

pub mod intents;
pub mod permissions;

use crate::{
    application::Application,
    config::Config,
    decompilation::extract_manifest,
    features::FeatureVector,
    results::{Family, Outcome},
};
use failure::{Error, ResultExt};
use std::fs;

/// Writes the features of a family for an application, and builds its outcome.
fn save(config: &Config, app: &Application, family: Family, features: &FeatureVector) -> Outcome {
    let output = config
        .family_folder(family)
        .join(format!("{}.csv", app.name()));
    match features.save(&output, None) {
        Ok(()) => Outcome::extracted(app.name(), family, output),
        Err(e) => {
            warn!("could not write the {} of {}: {}", family, app.name(), e);
            Outcome::skipped(app.name(), family, e)
        }
    }
}

/// Reads the manifest of the application, extracting it if needed.
fn read_manifest(config: &Config, app: &Application) -> Result<String, Error> {
    let path = extract_manifest(config, app)?;
    let manifest = fs::read_to_string(&path)
        .with_context(|_| format!("could not read `{}`", path.display()))?;
    Ok(manifest)
}

/// Extracts the permission and intent features of one application.
pub fn analyze_application(config: &Config, app: &Application) -> Vec<Outcome> {
    let manifest = match read_manifest(config, app) {
        Ok(m) => m,
        Err(e) => {
            warn!("skipping the manifest of {}: {}", app.name(), e);
            let reason = e.to_string();
            return vec![
                Outcome::skipped(app.name(), Family::Permissions, &reason),
                Outcome::skipped(app.name(), Family::Intents, &reason),
            ];
        }
    };

    let permissions = permissions::extract(&manifest);
    let mut outcomes = vec![save(config, app, Family::Permissions, &permissions)];

    match intents::extract(&manifest) {
        Ok(intents) => {
            info!(
                "{}: {} permissions and {} intent actions found",
                app.name(),
                permissions.found(),
                intents.found()
            );
            outcomes.push(save(config, app, Family::Intents, &intents));
        }
        Err(e) => {
            warn!("skipping the intents of {}: {}", app.name(), e);
            outcomes.push(Outcome::skipped(app.name(), Family::Intents, e));
        }
    }

    outcomes
}

/// Runs the static analysis of every application, in order.
pub fn analysis(config: &Config, apps: &[Application]) -> Vec<Outcome> {
    info!("starting the static analysis of {} applications", apps.len());
    apps.iter()
        .flat_map(|app| analyze_application(config, app))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{analysis, analyze_application};
    use crate::{
        application::Application,
        config::tests::config_in,
        decompilation::manifest_file,
        results::{Family, Status},
    };
    use std::{env, fs};

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.example">
    <uses-permission android:name="android.permission.INTERNET"/>
    <application>
        <service android:name=".Sync">
            <intent-filter>
                <action android:name="android.intent.action.BOOT_COMPLETED"/>
            </intent-filter>
        </service>
    </application>
</manifest>"#;

    #[test]
    fn it_static_analysis() {
        let folder = env::temp_dir().join("droid-features-static-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "extract = false");
        let good = Application::new(folder.join("good.apk")).unwrap();
        let broken = Application::new(folder.join("broken.apk")).unwrap();
        let missing = Application::new(folder.join("missing.apk")).unwrap();

        fs::create_dir_all(config.manifests_folder()).unwrap();
        fs::write(manifest_file(&config, &good), MANIFEST).unwrap();
        fs::write(
            manifest_file(&config, &broken),
            "<manifest>android.permission.CAMERA<application></manifest>",
        )
        .unwrap();

        let outcomes = analysis(&config, &[good, broken, missing]);
        assert_eq!(outcomes.len(), 6);
        let extracted: Vec<_> = outcomes
            .iter()
            .filter(|o| o.is_extracted())
            .map(|o| (o.application(), o.family()))
            .collect();
        assert_eq!(
            extracted,
            vec![
                ("good", Family::Permissions),
                ("good", Family::Intents),
                ("broken", Family::Permissions),
            ]
        );

        let permissions = fs::read_to_string(
            config
                .family_folder(Family::Permissions)
                .join("broken.csv"),
        )
        .unwrap();
        let mut lines = permissions.lines();
        let header: Vec<_> = lines.next().unwrap().split(',').collect();
        let row: Vec<_> = lines.next().unwrap().split(',').collect();
        let camera = header.iter().position(|k| *k == "CAMERA").unwrap();
        assert_eq!(row[camera], "1");
        assert_eq!(row.iter().filter(|v| **v != "0").count(), 1);

        let intents =
            fs::read_to_string(config.family_folder(Family::Intents).join("good.csv")).unwrap();
        assert!(intents.lines().nth(1).unwrap().contains("12"));

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn it_skip_missing_manifest() {
        let folder = env::temp_dir().join("droid-features-static-missing-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "extract = false");
        let app = Application::new(folder.join("app.apk")).unwrap();

        let outcomes = analyze_application(&config, &app);
        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            match outcome.status() {
                Status::Skipped { reason } => assert!(reason.contains("app_AndroidManifest.xml")),
                Status::Extracted { .. } => panic!("the manifest does not exist"),
            }
        }
        assert!(!config.family_folder(Family::Permissions).exists());
    }
}
