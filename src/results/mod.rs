//! Results of the feature extraction.
//!
//! Every application produces one `Outcome` per feature family: either the path of the written
//! CSV file, or the reason why the family was skipped. Outcomes are grouped by task and then in
//! the batch report, which is stored as JSON next to the feature files.

mod dataset;
mod report;

pub use self::{
    dataset::{merge, Dataset},
    report::{Generator, Json, Summary},
};
use crate::{
    features::FeatureVector,
    vocabulary::{Vocabulary, INTENT_ACTIONS, PERMISSIONS, SENSITIVE_APIS},
};
use chrono::{DateTime, Local};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Feature family, with its own vocabulary and output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Requested permissions.
    Permissions,
    /// Intent actions declared by components.
    Intents,
    /// Sensitive APIs reached in the call graph.
    SensitiveApis,
}

impl Family {
    /// Every family, in output order.
    pub const ALL: [Family; 3] = [Family::Permissions, Family::Intents, Family::SensitiveApis];

    /// Short name of the family, used in file names.
    pub fn name(self) -> &'static str {
        match self {
            Family::Permissions => "permissions",
            Family::Intents => "intents",
            Family::SensitiveApis => "sensitive_apis",
        }
    }

    /// Folder, inside the results folder, with the per-application files.
    pub fn folder_name(self) -> String {
        format!("{}_data", self.name())
    }

    /// Vocabulary of the family.
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Family::Permissions => &PERMISSIONS,
            Family::Intents => &INTENT_ACTIONS,
            Family::SensitiveApis => &SENSITIVE_APIS,
        }
    }

    /// Identifier column written before the features, if any.
    pub fn id_column(self) -> Option<&'static str> {
        match self {
            Family::SensitiveApis => Some("name"),
            _ => None,
        }
    }

    /// CSV header of the per-application files.
    pub fn header(self) -> String {
        FeatureVector::new(self.vocabulary()).header(self.id_column())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Family::Permissions => write!(f, "permissions"),
            Family::Intents => write!(f, "intents"),
            Family::SensitiveApis => write!(f, "sensitive APIs"),
        }
    }
}

/// Extraction task. Both tasks run independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Manifest based extraction: permissions and intents.
    Static,
    /// Call graph based extraction: sensitive APIs.
    Dynamic,
}

impl Task {
    /// Every task.
    pub const ALL: [Task; 2] = [Task::Static, Task::Dynamic];

    /// Families extracted by the task.
    pub fn families(self) -> &'static [Family] {
        match self {
            Task::Static => &[Family::Permissions, Family::Intents],
            Task::Dynamic => &[Family::SensitiveApis],
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Task::Static => write!(f, "static"),
            Task::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Status of one feature family of one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    /// The features were written to the given file.
    Extracted {
        /// Written CSV file.
        output: PathBuf,
    },
    /// The features could not be extracted.
    Skipped {
        /// Cause of the failure.
        reason: String,
    },
}

/// Result of extracting one feature family of one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    application: String,
    family: Family,
    status: Status,
}

impl Outcome {
    /// Creates the outcome of a successful extraction.
    pub fn extracted<S: Into<String>, P: AsRef<Path>>(
        application: S,
        family: Family,
        output: P,
    ) -> Self {
        Self {
            application: application.into(),
            family,
            status: Status::Extracted {
                output: output.as_ref().to_path_buf(),
            },
        }
    }

    /// Creates the outcome of a skipped extraction.
    pub fn skipped<S: Into<String>, R: fmt::Display>(
        application: S,
        family: Family,
        reason: R,
    ) -> Self {
        Self {
            application: application.into(),
            family,
            status: Status::Skipped {
                reason: reason.to_string(),
            },
        }
    }

    /// Gets the name of the application.
    pub fn application(&self) -> &str {
        self.application.as_str()
    }

    /// Gets the feature family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Gets the status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Checks if the features were extracted.
    pub fn is_extracted(&self) -> bool {
        match self.status {
            Status::Extracted { .. } => true,
            Status::Skipped { .. } => false,
        }
    }
}

/// Report of one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskReport {
    task: Task,
    outcomes: Vec<Outcome>,
    failure: Option<String>,
}

impl TaskReport {
    /// Creates the report of a task that went through every application.
    pub fn completed(task: Task, outcomes: Vec<Outcome>) -> Self {
        Self {
            task,
            outcomes,
            failure: None,
        }
    }

    /// Creates the report of a task that could not finish.
    pub fn failed<S: Into<String>>(task: Task, failure: S) -> Self {
        Self {
            task,
            outcomes: Vec::new(),
            failure: Some(failure.into()),
        }
    }

    /// Gets the task.
    pub fn task(&self) -> Task {
        self.task
    }

    /// Gets the outcomes, in processing order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Gets the failure of the task, if it did not finish.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_ref().map(String::as_str)
    }

    /// Number of families extracted.
    pub fn extracted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_extracted()).count()
    }

    /// Iterates over the skipped extractions.
    pub fn skipped(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_extracted())
    }
}

/// Report of a whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    directory: PathBuf,
    started: DateTime<Local>,
    finished: Option<DateTime<Local>>,
    tasks: Vec<TaskReport>,
    datasets: Vec<Dataset>,
}

impl BatchReport {
    /// Starts the report of the batch for the given directory.
    pub fn start<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            started: Local::now(),
            finished: None,
            tasks: Vec::new(),
            datasets: Vec::new(),
        }
    }

    /// Adds the report of a task.
    pub fn add_task(&mut self, task: TaskReport) {
        self.tasks.push(task);
    }

    /// Adds a merged dataset.
    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    /// Marks the batch as finished.
    pub fn finish(&mut self) {
        self.finished = Some(Local::now());
    }

    /// Gets the input directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Gets the task reports.
    pub fn tasks(&self) -> &[TaskReport] {
        &self.tasks
    }

    /// Gets the report of the given task.
    pub fn task(&self, task: Task) -> Option<&TaskReport> {
        self.tasks.iter().find(|t| t.task() == task)
    }

    /// Gets the files written for a feature family in this batch.
    pub fn outputs(&self, family: Family) -> Vec<&Path> {
        self.tasks
            .iter()
            .flat_map(|task| task.outcomes())
            .filter(|outcome| outcome.family() == family)
            .filter_map(|outcome| match outcome.status() {
                Status::Extracted { output } => Some(output.as_path()),
                Status::Skipped { .. } => None,
            })
            .collect()
    }

    /// Gets the merged datasets.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Gets the start time.
    pub fn started(&self) -> DateTime<Local> {
        self.started
    }

    /// Gets the finish time, if the batch is finished.
    pub fn finished(&self) -> Option<DateTime<Local>> {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchReport, Family, Outcome, Status, Task, TaskReport};
    use std::path::PathBuf;

    #[test]
    fn it_family() {
        assert_eq!(Family::Permissions.folder_name(), "permissions_data");
        assert_eq!(Family::Intents.folder_name(), "intents_data");
        assert_eq!(Family::SensitiveApis.folder_name(), "sensitive_apis_data");
        assert_eq!(format!("{}", Family::SensitiveApis), "sensitive APIs");

        assert!(Family::Permissions.header().starts_with("ACCEPT_HANDOVER,"));
        assert!(Family::SensitiveApis
            .header()
            .starts_with("name,getInputStream,"));
        for family in &Family::ALL {
            let columns = family.header().split(',').count();
            let id = if family.id_column().is_some() { 1 } else { 0 };
            assert_eq!(columns, family.vocabulary().len() + id);
        }
    }

    #[test]
    fn it_task_families() {
        assert_eq!(
            Task::Static.families(),
            &[Family::Permissions, Family::Intents]
        );
        assert_eq!(Task::Dynamic.families(), &[Family::SensitiveApis]);
    }

    #[test]
    fn it_task_report() {
        let report = TaskReport::completed(
            Task::Static,
            vec![
                Outcome::extracted("a", Family::Permissions, "out/a.csv"),
                Outcome::skipped("a", Family::Intents, "the manifest is not valid XML"),
            ],
        );

        assert_eq!(report.extracted(), 1);
        let skipped: Vec<_> = report.skipped().collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].application(), "a");
        assert_eq!(skipped[0].family(), Family::Intents);
        assert_eq!(
            skipped[0].status(),
            &Status::Skipped {
                reason: String::from("the manifest is not valid XML")
            }
        );
        assert!(report.failure().is_none());

        let failed = TaskReport::failed(Task::Dynamic, "the task panicked");
        assert_eq!(failed.failure(), Some("the task panicked"));
        assert_eq!(failed.extracted(), 0);
    }

    #[test]
    fn it_batch_report_json() {
        let mut report = BatchReport::start("apks");
        report.add_task(TaskReport::completed(
            Task::Dynamic,
            vec![Outcome::extracted(
                "a",
                Family::SensitiveApis,
                PathBuf::from("a.csv"),
            )],
        ));
        report.finish();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["directory"], "apks");
        assert_eq!(json["tasks"][0]["task"], "dynamic");
        assert_eq!(json["tasks"][0]["outcomes"][0]["family"], "sensitive_apis");
        assert_eq!(json["tasks"][0]["outcomes"][0]["status"]["status"], "extracted");
        assert_eq!(json["tasks"][0]["outcomes"][0]["status"]["output"], "a.csv");
        assert!(report.task(Task::Static).is_none());
        assert_eq!(
            report.outputs(Family::SensitiveApis),
            vec![PathBuf::from("a.csv").as_path()]
        );
        assert!(report.outputs(Family::Permissions).is_empty());
        assert!(report.finished().unwrap() >= report.started());
    }
}
