//! Assembly identity and method signature metadata.
//!
//! # Key Components
//!
//! - [`identity`] - [`identity::Version`], [`identity::PublicKey`] and
//!   [`identity::AssemblyReference`], including the tolerant display-name parser
//! - [`signatures`] - [`signatures::MethodSignature`], a positional decoder for ECMA-335 method
//!   signature blobs
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 6.3 - Referencing assemblies
//! - ECMA-335 6th Edition, Partition II, Section 23.2.1 - MethodDefSig

pub mod identity;
pub mod signatures;
