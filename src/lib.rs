//! Android malware feature extractor.
//!
//! Extracts three feature families from a directory of Android applications, for their use in
//! malware classifiers:
//!
//! * Permissions mentioned in the `AndroidManifest.xml` file.
//! * Intent actions declared by the activities, receivers and services of the manifest.
//! * Sensitive platform APIs called inside the call graph of the application.
//!
//! Manifests are obtained with apktool and call graphs with androguard. Every family is written
//! as one CSV file per application, and then merged in a dataset per family.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod application;
mod callgraph;
/// Command Line Interface
pub mod cli;
mod config;
mod decompilation;
mod dynamic_analysis;
mod error;
mod features;
mod results;
mod static_analysis;
mod utils;
mod vocabulary;

pub use crate::{
    application::Application,
    callgraph::{callers::Callers, sensitive::SensitiveNodes, CallGraph},
    config::Config,
    error::Kind as ErrorKind,
    features::FeatureVector,
    results::{BatchReport, Dataset, Family, Outcome, Status, Task, TaskReport},
    utils::PARSER_CONFIG,
    vocabulary::{Vocabulary, INTENT_ACTIONS, PERMISSIONS, SENSITIVE_APIS, SENSITIVE_CLASSES},
};
use crate::results::{merge, Generator, Json, Summary};
use colored::Colorize;
use env_logger::{fmt::Formatter, Builder};
use failure::Error;
use log::{Level, LevelFilter, Record};
use std::{
    any::Any,
    env,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};

/// Initializes the logger.
///
/// Messages of this crate are shown from the `Info` level, or from `Debug` in verbose mode. The
/// `RUST_LOG` environment variable overrides both.
pub fn initialize_logger(is_verbose: bool) {
    let format = |buf: &mut Formatter, record: &Record<'_>| match record.level() {
        Level::Warn => writeln!(
            buf,
            "{}{}",
            "Warning: ".bold().yellow(),
            record.args().to_string().yellow()
        ),
        Level::Error => writeln!(
            buf,
            "{}{}",
            "Error: ".bold().red(),
            record.args().to_string().red()
        ),
        Level::Debug => writeln!(
            buf,
            "{}{}",
            "Debug: ".bold(),
            record.args().to_string().bold()
        ),
        Level::Info => writeln!(buf, "{}", record.args()),
        Level::Trace => writeln!(buf, "{}: {}", record.level(), record.args()),
    };

    let log_level = if is_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    let _ = builder.format(format);
    if let Ok(env_log) = env::var("RUST_LOG") {
        let _ = builder.parse(&env_log);
    } else {
        let _ = builder.filter(Some("droid_features"), log_level);
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Could not initialize logger: {}", e);
    }
}

/// Gets the message of a panic.
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("the task panicked")
    }
}

/// Runs a task in its own thread and waits for its report.
fn run_task(
    task: Task,
    config: &Arc<Config>,
    apps: &Arc<Vec<Application>>,
) -> thread::Result<thread::JoinHandle<Vec<Outcome>>> {
    let config = Arc::clone(config);
    let apps = Arc::clone(apps);
    thread::Builder::new()
        .name(format!("{}-analysis", task))
        .spawn(move || match task {
            Task::Static => static_analysis::analysis(&config, &apps),
            Task::Dynamic => dynamic_analysis::analysis(&config, &apps),
        })
        .map_err(|e| Box::new(e.to_string()) as Box<dyn Any + Send>)
}

/// Analyzes every application of the given directory.
///
/// The static and dynamic tasks run in parallel. Once both have finished, the per-application
/// files are merged in datasets and the batch report is generated.
pub fn analyze_directory<P: AsRef<Path>>(
    directory: P,
    config: &Config,
) -> Result<BatchReport, Error> {
    let directory = directory.as_ref();
    let mut report = BatchReport::start(directory);
    let apps = Application::list(directory)?;
    info!(
        "found {} applications in `{}`",
        format!("{}", apps.len()).bold(),
        directory.display()
    );

    let shared_config = Arc::new(config.clone());
    let apps = Arc::new(apps);
    let handles: Vec<_> = Task::ALL
        .iter()
        .map(|&task| (task, run_task(task, &shared_config, &apps)))
        .collect();

    for (task, handle) in handles {
        let task_report = match handle.and_then(thread::JoinHandle::join) {
            Ok(outcomes) => TaskReport::completed(task, outcomes),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("the {} analysis failed: {}", task, message);
                TaskReport::failed(task, message)
            }
        };
        report.add_task(task_report);
    }

    if config.has_to_merge() {
        for &family in &Family::ALL {
            let outputs: Vec<PathBuf> = report
                .outputs(family)
                .into_iter()
                .map(Path::to_path_buf)
                .collect();
            if outputs.is_empty() {
                debug!("there are no {} files to merge", family);
                continue;
            }
            match merge(family, &outputs, config.dataset_file(family)) {
                Ok(dataset) => report.add_dataset(dataset),
                Err(e) => error!("could not merge the {} dataset: {}", family, e),
            }
        }
    }
    report.finish();

    let mut generators: Vec<Box<dyn Generator>> = Vec::with_capacity(2);
    generators.push(Box::new(Json::new()));
    generators.push(Box::new(Summary::new()));
    for generator in &mut generators {
        if let Err(e) = generator.generate(config, &report) {
            error!("there was an error generating the report: {}", e);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{analyze_directory, panic_message};
    use crate::{
        config::tests::config_in,
        results::{Family, Task},
    };
    use std::{env, fs, thread};

    #[test]
    fn it_panic_message() {
        let panic = thread::spawn(|| panic!("broken graph")).join().unwrap_err();
        assert_eq!(panic_message(panic.as_ref()), "broken graph");

        let panic = thread::spawn(|| panic!("{} broken graphs", 2))
            .join()
            .unwrap_err();
        assert_eq!(panic_message(panic.as_ref()), "2 broken graphs");
    }

    #[test]
    fn it_analyze_directory() {
        let folder = env::temp_dir().join("droid-features-directory-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "extract = false");
        let apks = folder.join("apks");
        fs::create_dir_all(&apks).unwrap();
        fs::write(apks.join("first.apk"), "").unwrap();
        fs::write(apks.join("second.apk"), "").unwrap();

        fs::create_dir_all(config.manifests_folder()).unwrap();
        fs::write(
            config.manifests_folder().join("first_AndroidManifest.xml"),
            "<manifest xmlns:android=\"http://schemas.android.com/apk/res/android\">\
             <uses-permission android:name=\"android.permission.SEND_SMS\"/></manifest>",
        )
        .unwrap();
        fs::create_dir_all(config.callgraphs_folder()).unwrap();
        fs::write(
            config.callgraphs_folder().join("second_callgraph.gml"),
            "graph [ directed 1 node [ id 0 label \"Landroid/telephony/SmsManager;->\
             sendTextMessage()V\" ] node [ id 1 label \"Landroid/telephony/TelephonyManager;->\
             getLine1Number()Ljava/lang/String;\" ] edge [ source 1 target 0 ] ]",
        )
        .unwrap();
        // Left by an earlier batch.
        let stale = config.family_folder(Family::Permissions).join("old.csv");
        fs::create_dir_all(config.family_folder(Family::Permissions)).unwrap();
        fs::write(
            &stale,
            format!("{}\n{}\n", Family::Permissions.header(), "0,".repeat(334) + "1"),
        )
        .unwrap();

        let report = analyze_directory(&apks, &config).unwrap();
        assert!(report.finished().is_some());

        let static_task = report.task(Task::Static).unwrap();
        assert!(static_task.failure().is_none());
        assert_eq!(static_task.extracted(), 2);
        assert_eq!(static_task.skipped().count(), 2);

        let dynamic_task = report.task(Task::Dynamic).unwrap();
        assert_eq!(dynamic_task.extracted(), 1);
        assert_eq!(dynamic_task.outcomes()[0].application(), "first");
        assert!(!dynamic_task.outcomes()[0].is_extracted());

        let datasets = report.datasets();
        assert_eq!(datasets.len(), 3);
        for dataset in datasets {
            assert_eq!(dataset.rows(), 1);
        }
        let merged = fs::read_to_string(config.dataset_file(Family::SensitiveApis)).unwrap();
        assert!(merged.lines().nth(1).unwrap().starts_with("second,"));
        assert!(merged.lines().nth(1).unwrap().ends_with(",second.csv"));
        let merged = fs::read_to_string(config.dataset_file(Family::Permissions)).unwrap();
        assert!(!merged.contains("old.csv"));
        assert!(config.report_file().exists());

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn it_analyze_missing_directory() {
        let folder = env::temp_dir().join("droid-features-missing-directory-test");
        let _ = fs::remove_dir_all(&folder);
        let config = config_in(&folder, "");

        assert!(analyze_directory(folder.join("apks"), &config).is_err());
    }
}
