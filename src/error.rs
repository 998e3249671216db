use std::fs::File;
use std::io::BufReader;

/// Error types that can occur during network construction, training and sampling
///
/// # Variants
///
/// - `InputValidationError` - indicates the input data or a hyperparameter does not meet the expected shape or range
/// - `ProcessingError` - indicates that something went wrong while processing, e.g. a backward pass without a forward pass
/// - `NotConfigured` - indicates that a required component (layers, loss function) has not been set
/// - `InsufficientData` - indicates that more entries were requested than are currently stored
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ProcessingError(String),
    NotConfigured(&'static str),
    InsufficientData { requested: usize, available: usize },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            ModelError::NotConfigured(component) => {
                write!(f, "Not configured: {} must be set before use", component)
            }
            ModelError::InsufficientData {
                requested,
                available,
            } => write!(
                f,
                "Not enough data: requested {} entries but only {} are available",
                requested, available
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur during model serialization and file operations
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, writing, file access)
/// - `JsonError` - Wraps JSON serialization/deserialization errors when working with JSON data formats
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl IoError {
    /// Opens the file at `path` and wraps it in a buffered reader.
    ///
    /// # Parameters
    ///
    /// * `path` - Path of the file to open
    ///
    /// # Returns
    ///
    /// - `Ok(BufReader<File>)` - Buffered reader over the opened file
    /// - `Err(IoError::StdIoError)` - If the file cannot be opened
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }

    /// Builds an `InvalidData` I/O error carrying `msg`.
    pub(crate) fn invalid_data(msg: impl Into<String>) -> Self {
        IoError::StdIoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            msg.into(),
        ))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIoError(e) => Some(e),
            IoError::JsonError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::StdIoError(e)
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::JsonError(e)
    }
}
