//! Process context for diagnostics.
//!
//! The profiler runs inside arbitrary .NET processes. Diagnostics are written to a per-machine
//! log file and tagged with the name and id of the host process so that output from several
//! instrumented applications can be told apart.

use std::{
    env,
    path::{Path, PathBuf},
    process,
};

use crate::integrations::LoaderConfig;

/// Log file name inside the platform log directory.
pub const LOG_FILE_NAME: &str = "dotnet-profiler.log";

#[cfg(not(target_os = "windows"))]
const DEFAULT_LOG_DIRECTORY: &str = "/var/log/datadog/dotnet";

#[cfg(target_os = "windows")]
const DEFAULT_PROGRAM_DATA: &str = r"C:\ProgramData";

/// Name and id of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// File name of the executable
    pub name: String,
    /// Operating system process id
    pub id: u32,
}

impl ProcessInfo {
    /// Capture the current process.
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: current_process_name(),
            id: current_process_id(),
        }
    }
}

/// File name of the current executable, or `"unknown"` if it cannot be determined.
#[must_use]
pub fn current_process_name() -> String {
    env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map_or_else(
            || "unknown".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

/// Id of the current process.
#[must_use]
pub fn current_process_id() -> u32 {
    process::id()
}

/// The diagnostic log file: [`LoaderConfig::log_path`] if set, else the platform default.
///
/// The default is `%ProgramData%\Datadog .NET Tracer\logs\dotnet-profiler.log` on Windows and
/// `/var/log/datadog/dotnet/dotnet-profiler.log` elsewhere.
///
/// ```rust
/// use hookscope::{platform::log_file_path, LoaderConfig};
///
/// let config = LoaderConfig::default().with_log_path("/tmp/profiler.log");
/// assert_eq!(log_file_path(&config), std::path::PathBuf::from("/tmp/profiler.log"));
/// ```
#[must_use]
pub fn log_file_path(config: &LoaderConfig) -> PathBuf {
    config
        .log_path
        .clone()
        .unwrap_or_else(default_log_file_path)
}

#[cfg(not(target_os = "windows"))]
fn default_log_file_path() -> PathBuf {
    Path::new(DEFAULT_LOG_DIRECTORY).join(LOG_FILE_NAME)
}

#[cfg(target_os = "windows")]
fn default_log_file_path() -> PathBuf {
    let program_data = env::var_os("ProgramData")
        .map_or_else(|| PathBuf::from(DEFAULT_PROGRAM_DATA), PathBuf::from);
    program_data
        .join("Datadog .NET Tracer")
        .join("logs")
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_info_current() {
        let info = ProcessInfo::current();
        assert_eq!(info.id, std::process::id());
        assert!(!info.name.is_empty());
        assert_eq!(info.name, current_process_name());
    }

    #[test]
    fn test_configured_log_path_wins() {
        let config = LoaderConfig::default().with_log_path("custom/profiler.log");
        assert_eq!(log_file_path(&config), PathBuf::from("custom/profiler.log"));
    }

    #[test]
    fn test_default_log_path() {
        let path = log_file_path(&LoaderConfig::default());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);

        #[cfg(not(target_os = "windows"))]
        assert_eq!(
            path,
            PathBuf::from("/var/log/datadog/dotnet/dotnet-profiler.log")
        );

        #[cfg(target_os = "windows")]
        assert!(path.ends_with(r"Datadog .NET Tracer\logs\dotnet-profiler.log"));
    }
}
