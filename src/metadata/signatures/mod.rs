//! Method signature blobs for .NET metadata.
//!
//! Method signatures use the compressed binary encoding of ECMA-335. The catalog only needs a
//! handful of structural answers from them (argument count, generic arity, whether the method
//! is an instance method and whether it returns `System.Object`), so [`MethodSignature`] keeps
//! the raw blob and decodes the fixed-position prefix on demand instead of building a full type
//! representation.
//!
//! # Binary Format
//!
//! ```text
//! byte 0      calling convention: flags (GENERIC 0x10, HASTHIS 0x20, EXPLICITTHIS 0x40)
//!             in the high bits, convention kind in the low nibble
//! byte 1      generic: type argument count    non-generic: argument count
//! byte 2      generic: argument count         non-generic: return type
//! byte 3      generic: return type
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hookscope::metadata::signatures::{MethodSignature, ELEMENT_TYPE};
//!
//! // T Method<T>(T item), instance
//! let signature = MethodSignature::new(vec![0x30, 0x01, 0x01, 0x13, 0x00, 0x13, 0x00]);
//! assert!(signature.calling_convention().is_generic());
//! assert_eq!(signature.number_of_type_arguments(), 1);
//! assert_eq!(signature.number_of_arguments(), 1);
//! assert_ne!(signature.as_bytes()[signature.index_of_return_type()], ELEMENT_TYPE::OBJECT);
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.2 - Blobs and Signatures
//! - ECMA-335 6th Edition, Partition II, Section 23.2.1 - MethodDefSig

mod method;
mod types;

pub use method::*;
pub use types::*;
