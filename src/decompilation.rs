//! Invocation of the external tools that produce the analyzed artifacts.
//!
//! The manifest of an application is obtained by decompressing it with apktool, and its call
//! graph by running androguard. Artifacts already on disk are reused unless `force` is set.

use crate::{
    application::Application,
    config::Config,
    error::Kind,
    utils::{copy_file, file_exists},
};
use failure::{Error, ResultExt};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// Gets the path of the extracted manifest of an application.
pub fn manifest_file(config: &Config, app: &Application) -> PathBuf {
    config
        .manifests_folder()
        .join(format!("{}_AndroidManifest.xml", app.name()))
}

/// Gets the path of the call graph of an application.
pub fn callgraph_file(config: &Config, app: &Application) -> PathBuf {
    config
        .callgraphs_folder()
        .join(format!("{}_callgraph.gml", app.name()))
}

/// Checks if an artifact can be used as it is, without running any tool.
fn reuse(config: &Config, artifact: &Path) -> Result<bool, Error> {
    if !config.has_to_extract() {
        if file_exists(artifact) {
            Ok(true)
        } else {
            Err(missing(artifact))
        }
    } else {
        Ok(!config.is_force() && file_exists(artifact))
    }
}

fn missing(path: &Path) -> Error {
    Kind::MissingOutput {
        path: path.display().to_string(),
    }
    .into()
}

/// Runs an external tool, failing if it does not exit successfully.
fn run(tool: &str, mut command: Command) -> Result<(), Error> {
    debug!("running {:?}", command);
    let output = command
        .output()
        .with_context(|_| format!("could not execute {}", tool))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Kind::Tool {
            tool: tool.to_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }
        .into())
    }
}

/// Gets the `AndroidManifest.xml` file of the application, decompressing it if needed.
pub fn extract_manifest(config: &Config, app: &Application) -> Result<PathBuf, Error> {
    let manifest = manifest_file(config, app);
    if reuse(config, &manifest)? {
        debug!("reusing the manifest of {}", app.name());
        return Ok(manifest);
    }

    let dist = config.dist_folder().join(app.name());
    let decompressed = dist.join("AndroidManifest.xml");
    if config.is_force() || !file_exists(&decompressed) {
        if dist.exists() {
            if let Err(e) = fs::remove_dir_all(&dist) {
                warn!(
                    "there was an error when removing the decompression folder: {}",
                    e
                );
            }
        }

        info!("decompressing {}", app.name());
        let mut command = Command::new("java");
        let _ = command
            .arg("-jar")
            .arg(config.apktool_file())
            .arg("d")
            .arg("-f")
            .arg("-o")
            .arg(&dist)
            .arg(app.package());
        run("apktool", command)?;
    }

    if !file_exists(&decompressed) {
        return Err(missing(&decompressed));
    }
    copy_file(&decompressed, &manifest)
        .with_context(|_| format!("could not copy the manifest to `{}`", manifest.display()))?;

    Ok(manifest)
}

/// Gets the call graph of the application, generating it if needed.
pub fn extract_callgraph(config: &Config, app: &Application) -> Result<PathBuf, Error> {
    let callgraph = callgraph_file(config, app);
    if reuse(config, &callgraph)? {
        debug!("reusing the call graph of {}", app.name());
        return Ok(callgraph);
    }

    fs::create_dir_all(config.callgraphs_folder())?;
    if callgraph.exists() {
        fs::remove_file(&callgraph)?;
    }

    info!("generating the call graph of {}", app.name());
    let mut command = Command::new(config.androguard_command());
    let _ = command
        .arg("cg")
        .arg("-o")
        .arg(&callgraph)
        .arg(app.package());
    run("androguard", command)?;

    if file_exists(&callgraph) {
        Ok(callgraph)
    } else {
        Err(missing(&callgraph))
    }
}

#[cfg(test)]
mod tests {
    use super::{callgraph_file, extract_callgraph, extract_manifest, manifest_file};
    use crate::{application::Application, config::tests::config_in, error::Kind};
    use std::{env, fs};

    #[test]
    fn it_artifact_paths() {
        let folder = env::temp_dir().join("droid-features-paths-test");
        let config = config_in(&folder, "");
        let app = Application::new("apks/app.apk").unwrap();

        assert_eq!(
            manifest_file(&config, &app),
            folder.join("manifests").join("app_AndroidManifest.xml")
        );
        assert_eq!(
            callgraph_file(&config, &app),
            folder.join("callgraphs").join("app_callgraph.gml")
        );
    }

    #[test]
    fn it_reuse_artifacts() {
        let folder = env::temp_dir().join("droid-features-reuse-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "androguard_command = \"/nonexistent/androguard\"");
        let app = Application::new(folder.join("app.apk")).unwrap();

        fs::create_dir_all(folder.join("manifests")).unwrap();
        fs::create_dir_all(folder.join("callgraphs")).unwrap();
        fs::write(manifest_file(&config, &app), "<manifest/>").unwrap();
        fs::write(callgraph_file(&config, &app), "graph [ directed 1 ]").unwrap();

        assert_eq!(
            extract_manifest(&config, &app).unwrap(),
            manifest_file(&config, &app)
        );
        assert_eq!(
            extract_callgraph(&config, &app).unwrap(),
            callgraph_file(&config, &app)
        );

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn it_copy_decompressed_manifest() {
        let folder = env::temp_dir().join("droid-features-decompressed-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "");
        let app = Application::new(folder.join("app.apk")).unwrap();

        fs::create_dir_all(folder.join("apkd").join("app")).unwrap();
        fs::write(
            folder.join("apkd").join("app").join("AndroidManifest.xml"),
            "<manifest/>",
        )
        .unwrap();

        let manifest = extract_manifest(&config, &app).unwrap();
        assert_eq!(fs::read_to_string(manifest).unwrap(), "<manifest/>");

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn it_missing_artifacts() {
        let folder = env::temp_dir().join("droid-features-missing-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "extract = false");
        let app = Application::new(folder.join("app.apk")).unwrap();

        for result in &[
            extract_manifest(&config, &app),
            extract_callgraph(&config, &app),
        ] {
            let error = result.as_ref().unwrap_err();
            match error.downcast_ref::<Kind>() {
                Some(Kind::MissingOutput { .. }) => {}
                _ => panic!("unexpected error: {}", error),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn it_tool_failures() {
        let folder = env::temp_dir().join("droid-features-tool-test");
        let _ = fs::remove_dir_all(&folder);
        let app = Application::new(folder.join("app.apk")).unwrap();

        let config = config_in(&folder, "androguard_command = \"false\"");
        match extract_callgraph(&config, &app)
            .unwrap_err()
            .downcast_ref::<Kind>()
        {
            Some(Kind::Tool { tool, .. }) => assert_eq!(tool, "androguard"),
            _ => panic!("a tool error was expected"),
        }

        let config = config_in(&folder, "androguard_command = \"true\"");
        match extract_callgraph(&config, &app)
            .unwrap_err()
            .downcast_ref::<Kind>()
        {
            Some(Kind::MissingOutput { path }) => assert!(path.ends_with("app_callgraph.gml")),
            _ => panic!("a missing output error was expected"),
        }

        let config = config_in(&folder, "androguard_command = \"/nonexistent/androguard\"");
        assert!(extract_callgraph(&config, &app).is_err());

        let _ = fs::remove_dir_all(&folder);
    }
}
