//! Assembly identity for method-replacement rules.
//!
//! Instrumentation rules name the assembly that defines a target method, and the assembly that
//! hosts the wrapper, by their display name. This module provides the value types for those
//! references and the parser that builds them.
//!
//! # ECMA-335 References
//!
//! - **Section II.6.2.1**: Assembly versioning - four-part version number
//! - **Section II.6.2.1.3**: PublicKeyToken - 8 byte abbreviated strong name
//! - **Section II.6.3**: Referencing assemblies
//!
//! # Module Structure
//!
//! - [`assembly`] - [`AssemblyReference`] and [`Version`]
//! - [`publickey`] - [`PublicKey`], the 8 byte public key token
//!
//! # Usage Examples
//!
//! ```rust
//! use hookscope::metadata::identity::{AssemblyReference, PublicKey, Version};
//!
//! let mscorlib = AssemblyReference::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! );
//! assert_eq!(mscorlib.name, "mscorlib");
//! assert_eq!(mscorlib.version, Version::new(4, 0, 0, 0));
//! assert_eq!(mscorlib.public_key.to_string(), "b77a5c561934e089");
//!
//! // Every field is optional and falls back to its default
//! let bare = AssemblyReference::parse("MyLibrary");
//! assert_eq!(bare.locale, "neutral");
//! assert_eq!(bare.public_key, PublicKey::default());
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are immutable values and implement [`Send`] and [`Sync`]. The
//! compiled patterns used by the parser are shared, lazily initialised and safe for concurrent
//! use.

pub mod assembly;
pub mod publickey;

pub use assembly::{AssemblyReference, Version};
pub use publickey::PublicKey;
