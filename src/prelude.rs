//! # hookscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! hookscope library. Import this module to get quick access to the catalog model.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all hookscope operations
pub use crate::Error;

/// The result type used throughout hookscope
pub use crate::Result;

/// Configuration for catalog loading
pub use crate::integrations::LoaderConfig;

// ================================================================================================
// Metadata Values
// ================================================================================================

/// Assembly identity components
pub use crate::metadata::identity::{AssemblyReference, PublicKey, Version};

/// Method signature blob and its calling convention flags
pub use crate::metadata::signatures::{CallingConvention, MethodSignature, ELEMENT_TYPE};

// ================================================================================================
// Integration Catalog
// ================================================================================================

/// Catalog entries
pub use crate::integrations::{
    Integration, IntegrationMethod, MethodReference, MethodReplacement, ReplacementAction,
};

/// Catalog loading and filtering
pub use crate::integrations::{
    filter_integrations_by_caller, filter_integrations_by_name, filter_integrations_by_target,
    flatten_integrations, load_integrations, load_integrations_from_file,
    load_integrations_from_str,
};
