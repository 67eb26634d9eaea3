//! Dynamic features, from the call graph of each application.
//!
//! The call graph is loaded, the nodes of the sensitive classes are found, and the methods that
//! call them are resolved. The sensitive API features of the application are then the
//! vocabulary methods that appear in the resolved callers.

#[cfg(test)]
mod tests;

use crate::{
    application::Application,
    callgraph::{
        callers::{self, Callers},
        sensitive::SensitiveNodes,
        CallGraph,
    },
    config::Config,
    decompilation::extract_callgraph,
    features::FeatureVector,
    results::{Family, Outcome},
    vocabulary::{SENSITIVE_APIS, SENSITIVE_CLASSES},
};
use failure::Error;
use log::Level;
use std::{collections::BTreeSet, path::PathBuf};

/// Encodes the resolved callers as sensitive API features.
///
/// A feature is set to 1 if its method name appears anywhere in a caller label.
pub fn encode(callers: &Callers) -> FeatureVector {
    let mut features = FeatureVector::new(&SENSITIVE_APIS);
    for api in SENSITIVE_APIS.keys() {
        if callers.labels().any(|label| label.contains(api)) {
            let _ = features.set(api, 1);
        }
    }

    features
}

/// Resolves the callers of the sensitive APIs in a call graph.
pub fn resolve_callers(graph: &CallGraph) -> Callers {
    let sensitive = SensitiveNodes::classify(graph, SENSITIVE_CLASSES);
    debug!(
        "{} of {} nodes belong to sensitive classes",
        sensitive.len(),
        graph.node_count()
    );

    let callers = callers::resolve(graph, &sensitive);
    if log_enabled!(Level::Debug) {
        let callees: BTreeSet<_> = sensitive.iter().map(|&node| graph.label(node)).collect();
        for callee in callees {
            let calling = callers::callers_of(graph, &sensitive, callee);
            if !calling.is_empty() {
                debug!(
                    "{} is called by {}",
                    callee,
                    calling.into_iter().collect::<Vec<_>>().join(", ")
                );
            }
        }
    }
    debug!(
        "{} distinct callers, weighted in-degree {}",
        callers.len(),
        callers.weighted_in_degree()
    );

    callers
}

fn extract(config: &Config, app: &Application) -> Result<PathBuf, Error> {
    let graph = CallGraph::load(extract_callgraph(config, app)?)?;
    let callers = resolve_callers(&graph);
    let features = encode(&callers);
    info!(
        "{}: {} sensitive API callers, {} sensitive APIs found",
        app.name(),
        callers.len(),
        features.found()
    );

    let family = Family::SensitiveApis;
    let output = config
        .family_folder(family)
        .join(format!("{}.csv", app.name()));
    let id = family.id_column().map(|column| (column, app.name()));
    features.save(&output, id)?;

    Ok(output)
}

/// Extracts the sensitive API features of one application.
pub fn analyze_application(config: &Config, app: &Application) -> Outcome {
    match extract(config, app) {
        Ok(output) => Outcome::extracted(app.name(), Family::SensitiveApis, output),
        Err(e) => {
            warn!("skipping the call graph of {}: {}", app.name(), e);
            Outcome::skipped(app.name(), Family::SensitiveApis, e)
        }
    }
}

/// Runs the dynamic analysis of every application, in order.
pub fn analysis(config: &Config, apps: &[Application]) -> Vec<Outcome> {
    info!("starting the dynamic analysis of {} applications", apps.len());
    apps.iter()
        .map(|app| analyze_application(config, app))
        .collect()
}
