//! Loader configuration
//!
//! The profiler is configured through environment variables of the host process. This module
//! collects them into a [`LoaderConfig`] that can also be built programmatically.

use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Path list of integration definition files.
pub const ENV_INTEGRATIONS: &str = "DD_INTEGRATIONS";

/// `;`-separated names of integrations to disable.
pub const ENV_DISABLED_INTEGRATIONS: &str = "DD_DISABLED_INTEGRATIONS";

/// Overrides the diagnostic log file location.
pub const ENV_TRACE_LOG_PATH: &str = "DD_TRACE_LOG_PATH";

/// Configuration for catalog loading.
///
/// # Examples
///
/// ```rust
/// use hookscope::LoaderConfig;
///
/// let config = LoaderConfig::default()
///     .with_definition_path("/opt/datadog/integrations.json")
///     .with_disabled_integration("AdoNet");
/// assert_eq!(config.definition_paths.len(), 1);
/// assert!(config.is_disabled("AdoNet"));
/// assert!(config.log_path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Integration definition files, loaded in order
    pub definition_paths: Vec<PathBuf>,

    /// Names of integrations removed from the loaded catalog
    pub disabled_integrations: Vec<String>,

    /// Diagnostic log file; `None` selects the platform default
    /// (see [`log_file_path`](crate::platform::log_file_path))
    pub log_path: Option<PathBuf>,
}

impl LoaderConfig {
    /// Creates a configuration from the environment of the current process.
    ///
    /// Reads [`ENV_INTEGRATIONS`] (split with the platform path-list separator),
    /// [`ENV_DISABLED_INTEGRATIONS`] and [`ENV_TRACE_LOG_PATH`]. Unset or empty variables leave
    /// the corresponding field at its default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var_os(ENV_INTEGRATIONS).as_deref(),
            env::var(ENV_DISABLED_INTEGRATIONS).ok().as_deref(),
            env::var_os(ENV_TRACE_LOG_PATH).as_deref(),
        )
    }

    fn from_vars(
        integrations: Option<&OsStr>,
        disabled: Option<&str>,
        log_path: Option<&OsStr>,
    ) -> Self {
        let definition_paths = integrations
            .map(|value| {
                env::split_paths(value)
                    .filter(|path| !path.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let disabled_integrations = disabled.map(split_names).unwrap_or_default();

        let log_path = log_path
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            definition_paths,
            disabled_integrations,
            log_path,
        }
    }

    /// Adds a definition file.
    #[must_use]
    pub fn with_definition_path(mut self, path: impl AsRef<Path>) -> Self {
        self.definition_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Disables an integration by name.
    #[must_use]
    pub fn with_disabled_integration(mut self, name: impl Into<String>) -> Self {
        self.disabled_integrations.push(name.into());
        self
    }

    /// Sets the diagnostic log file.
    #[must_use]
    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.log_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// `true` if the integration `name` is disabled.
    #[must_use]
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_integrations.iter().any(|n| n == name)
    }
}

fn split_names(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
