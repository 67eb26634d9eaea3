//! Module containing the definition of error types.

/// Enumeration of the different error kinds.
#[derive(Debug, Fail)]
pub enum Kind {
    /// Configuration error.
    #[fail(display = "there was an error in the configuration: {}", message)]
    Config {
        /// Error message.
        message: String,
    },
    /// The call graph is not valid GML.
    #[fail(display = "invalid GML at line {}: {}", line, message)]
    Gml {
        /// Line where the error was found.
        line: usize,
        /// Error message.
        message: String,
    },
    /// The call graph is valid GML but not the expected graph.
    #[fail(display = "unexpected call graph structure: {}", message)]
    Graph {
        /// Error message.
        message: String,
    },
    /// The `AndroidManifest.xml` file could not be parsed.
    #[fail(display = "the manifest is not valid XML: {}", message)]
    Manifest {
        /// Error message.
        message: String,
    },
    /// An external tool returned an error.
    #[fail(display = "{} returned an error. More info: {}", tool, stderr)]
    Tool {
        /// Name of the tool.
        tool: String,
        /// Captured error output.
        stderr: String,
    },
    /// An external tool did not produce the expected file.
    #[fail(display = "expected file `{}` was not found", path)]
    MissingOutput {
        /// Path of the missing file.
        path: String,
    },
}
