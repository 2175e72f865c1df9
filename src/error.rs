use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The catalog value types ([`crate::AssemblyReference`], [`crate::MethodSignature`], ...) never
/// fail; malformed input falls back to documented defaults. Errors are only produced while
/// loading integration definitions.
///
/// # Examples
///
/// ```rust
/// use hookscope::{integrations::load_integrations_from_str, Error};
///
/// match load_integrations_from_str("{\"name\": \"NotAList\"}") {
///     Ok(_) => unreachable!(),
///     Err(Error::Malformed { message, .. }) => println!("Malformed catalog: {}", message),
///     Err(e) => println!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The integration definition document has an unexpected structure.
    ///
    /// Raised when the document parses as JSON but is not an array of integration objects.
    /// The error includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors raised while reading an integration definition file.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The integration definition document is not valid JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
