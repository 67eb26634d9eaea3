//! Tests for the sensitive API features.

use super::{analysis, encode, resolve_callers};
use crate::{
    application::Application,
    callgraph::CallGraph,
    config::tests::config_in,
    decompilation::callgraph_file,
    results::{Family, Status},
    vocabulary::SENSITIVE_APIS,
};
use std::{env, fs};

const DEVICE_ID: &str = "Landroid/telephony/TelephonyManager;->getDeviceId()Ljava/lang/String;";
const NETWORK_INFO: &str =
    "Landroid/net/ConnectivityManager;->getActiveNetworkInfo()Landroid/net/NetworkInfo;";
const CIPHER: &str = "Ljavax/crypto/Cipher;->getInstance(Ljava/lang/String;)Ljavax/crypto/Cipher;";
const MAIN: &str = "Lcom/example/Main;->onCreate(Landroid/os/Bundle;)V";

fn callgraph() -> String {
    format!(
        "graph [\n  directed 1\n  node [ id 0 label \"{}\" ]\n  node [ id 1 label \"{}\" ]\n  \
         node [ id 2 label \"{}\" ]\n  node [ id 3 label \"{}\" ]\n  \
         edge [ source 1 target 0 ]\n  edge [ source 2 target 0 ]\n  edge [ source 3 target 2 ]\n]\n",
        DEVICE_ID, NETWORK_INFO, CIPHER, MAIN
    )
}

#[test]
fn it_resolve_callers() {
    let graph = CallGraph::from_gml(&callgraph()).unwrap();
    let callers = resolve_callers(&graph);

    let labels: Vec<_> = callers.labels().map(String::as_str).collect();
    assert_eq!(labels, vec![NETWORK_INFO, CIPHER]);
    assert!(!callers.contains(MAIN));
    assert_eq!(callers.weighted_in_degree(), 4);
}

#[test]
fn it_encode() {
    let graph = CallGraph::from_gml(&callgraph()).unwrap();
    let features = encode(&resolve_callers(&graph));

    assert_eq!(features.len(), SENSITIVE_APIS.len());
    assert_eq!(features.get("getActiveNetworkInfo"), Some(1));
    assert_eq!(features.get("getInstance"), Some(1));
    // Substrings of the caller labels are also present.
    assert_eq!(features.get("getActiveNetwork"), Some(1));
    // The callee is not a caller.
    assert_eq!(features.get("getDeviceId"), Some(0));
    assert_eq!(features.get("getInstanceFollowRedirects"), Some(0));
}

#[test]
fn it_encode_without_callers() {
    let graph = CallGraph::from_gml(&format!(
        "graph [ directed 1 node [ id 0 label \"{}\" ] node [ id 1 label \"{}\" ] \
         edge [ source 1 target 0 ] ]",
        DEVICE_ID, MAIN
    ))
    .unwrap();
    let features = encode(&resolve_callers(&graph));

    assert_eq!(features.found(), 0);
    assert_eq!(features.len(), SENSITIVE_APIS.len());
}

#[test]
fn it_dynamic_analysis() {
    let folder = env::temp_dir().join("droid-features-dynamic-test");
    let _ = fs::remove_dir_all(&folder);
    let config = config_in(&folder, "extract = false");
    let app = Application::new(folder.join("app.apk")).unwrap();
    let broken = Application::new(folder.join("broken.apk")).unwrap();

    fs::create_dir_all(config.callgraphs_folder()).unwrap();
    fs::write(callgraph_file(&config, &app), callgraph()).unwrap();
    fs::write(
        callgraph_file(&config, &broken),
        "graph [ node [ id 0 label \"La/B;->c()V\" ] ]",
    )
    .unwrap();

    let outcomes = analysis(&config, &[app.clone(), broken]);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_extracted());
    match outcomes[1].status() {
        Status::Skipped { reason } => assert!(reason.contains("not directed")),
        Status::Extracted { .. } => panic!("the graph is not directed"),
    }

    let output = config
        .family_folder(Family::SensitiveApis)
        .join("app.csv");
    let first = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = first.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], Family::SensitiveApis.header());
    assert!(lines[1].starts_with("app,"));
    assert_eq!(lines[1].split(',').count(), SENSITIVE_APIS.len() + 1);

    // Rerunning on the same input gives the same file.
    let _ = analysis(&config, &[app]);
    assert_eq!(fs::read_to_string(&output).unwrap(), first);

    fs::remove_dir_all(&folder).unwrap();
}

#[test]
fn it_skip_deeply_nested_callgraph() {
    let folder = env::temp_dir().join("droid-features-nested-test");
    let _ = fs::remove_dir_all(&folder);
    let config = config_in(&folder, "extract = false");
    let app = Application::new(folder.join("nested.apk")).unwrap();

    fs::create_dir_all(config.callgraphs_folder()).unwrap();
    fs::write(
        callgraph_file(&config, &app),
        format!("graph [ directed 1 {} ]", "x [ ".repeat(100_000)),
    )
    .unwrap();

    let outcomes = analysis(&config, &[app]);
    match outcomes[0].status() {
        Status::Skipped { reason } => assert!(reason.contains("nested too deeply")),
        Status::Extracted { .. } => panic!("the call graph is not valid"),
    }

    fs::remove_dir_all(&folder).unwrap();
}
