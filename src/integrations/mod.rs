//! The integration catalog.
//!
//! An integration is a named group of method replacement rules. Each rule names the method to
//! intercept (the *target*), the method to call instead (the *wrapper*) and optionally which
//! callers it applies to. Every method is identified by a [`MethodReference`], which also carries
//! the range of assembly versions the rule is valid for and derives the cache keys external
//! matching logic uses.
//!
//! # Key Components
//!
//! - [`MethodReference`] - assembly, type and method with a compatibility window
//! - [`MethodReplacement`] - caller pattern, target and wrapper
//! - [`Integration`] / [`IntegrationMethod`] - grouped and flattened views of the rules
//! - [`load_integrations`] and friends - JSON definition loading
//! - [`filter_integrations_by_name`], [`filter_integrations_by_caller`],
//!   [`filter_integrations_by_target`] - narrowing the catalog to a module
//! - [`LoaderConfig`] - which files to load and which integrations to disable
//!
//! # Examples
//!
//! ```rust
//! use hookscope::prelude::*;
//!
//! let target =
//!     MethodReference::new("System.Data", "System.Data.Common.DbCommand", "ExecuteReader")
//!         .with_versions(Version::new(4, 0, 0, 0), Version::new(4, 65535, 65535, 65535));
//! let wrapper = MethodReference::new("Wrappers", "Wrappers.AdoNet", "ExecuteReader")
//!     .with_action(ReplacementAction::ReplaceTargetMethod.to_string());
//!
//! let integration = Integration::new(
//!     "AdoNet",
//!     vec![MethodReplacement::new(MethodReference::default(), target, wrapper)],
//! );
//!
//! let module = AssemblyReference::parse("MyApp, Version=1.0.0.0");
//! let references = [AssemblyReference::parse("System.Data, Version=4.0.0.0")];
//! let methods = filter_integrations_by_target(
//!     &flatten_integrations(&[integration]),
//!     &module,
//!     &references,
//! );
//!
//! assert_eq!(methods.len(), 1);
//! assert!(methods[0]
//!     .replacement
//!     .target_method
//!     .is_version_supported(&references[0].version));
//! ```

mod config;
mod filter;
mod loader;
mod method;
mod replacement;

pub use config::*;
pub use filter::*;
pub use loader::*;
pub use method::*;
pub use replacement::*;
