// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # hookscope
//!
//! The method-replacement catalog behind .NET auto-instrumentation. An instrumentation agent
//! running inside a managed process rewrites selected methods so that they call a substitute
//! ("wrapper") implementation; `hookscope` models the catalog that decides *which* methods are
//! rewritten, and decodes the metadata needed to match them.
//!
//! ## Features
//!
//! - **Assembly references** - Tolerant parsing of display names such as
//!   `System.Data, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089`
//! - **Method signatures** - Positional decoding of ECMA-335 method signature blobs (calling
//!   convention, generic arity, argument count, `object` return detection)
//! - **Integration catalog** - Method references, replacements, integrations and their
//!   deterministic cache keys
//! - **Catalog loading** - JSON integration definitions, flattening and filtering
//!
//! ## Quick Start
//!
//! ```rust
//! use hookscope::prelude::*;
//!
//! let assembly = AssemblyReference::parse(
//!     "System.Data, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! );
//! assert_eq!(assembly.name, "System.Data");
//! assert_eq!(assembly.version, Version::new(4, 0, 0, 0));
//!
//! let signature = MethodSignature::new(vec![0x20, 0x02, 0x1C]);
//! assert!(signature.is_instance_method());
//! assert_eq!(signature.number_of_arguments(), 2);
//! assert!(signature.return_type_is_object());
//! ```
//!
//! ### Loading a catalog
//!
//! ```rust
//! use hookscope::integrations::{flatten_integrations, load_integrations_from_str};
//!
//! let json = r#"[{
//!     "name": "AdoNet",
//!     "method_replacements": [{
//!         "target": { "assembly": "System.Data", "type": "System.Data.Common.DbCommand",
//!                     "method": "ExecuteNonQuery", "minimum_major": 4 },
//!         "wrapper": { "assembly": "Wrappers", "type": "Wrappers.AdoNet",
//!                      "method": "ExecuteNonQuery", "signature": "00 04 08 1C 08 08 0A",
//!                      "action": "ReplaceTargetMethod" }
//!     }]
//! }]"#;
//!
//! let integrations = load_integrations_from_str(json)?;
//! let methods = flatten_integrations(&integrations);
//! assert_eq!(methods.len(), 1);
//! assert_eq!(
//!     methods[0].replacement.target_method.type_cache_key(),
//!     "[System.Data]System.Data.Common.DbCommand_vMin_4.0.0.0_vMax_65535.65535.65535.65535"
//! );
//! # Ok::<(), hookscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::identity`] - [`Version`](metadata::identity::Version),
//!   [`PublicKey`](metadata::identity::PublicKey) and
//!   [`AssemblyReference`](metadata::identity::AssemblyReference)
//! - [`metadata::signatures`] - [`MethodSignature`](metadata::signatures::MethodSignature) and the
//!   ECMA-335 constants it decodes
//! - [`integrations`] - the catalog model, its JSON loader, filters and configuration
//! - [`platform`] - process context used for diagnostics
//!
//! ## Error Handling
//!
//! The value types never fail: malformed input degrades to documented defaults. Only catalog
//! loading can return an [`Error`], for unreadable files or documents that are not JSON.
//!
//! ## Logging
//!
//! Loader decisions are reported through the [`tracing`](https://docs.rs/tracing) façade. The
//! library never installs a subscriber.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use hookscope::prelude::*;
///
/// let reference = MethodReference::default();
/// assert_eq!(reference.min_version, Version::MIN);
/// assert_eq!(reference.max_version, Version::MAX);
/// ```
pub mod prelude;

/// Assembly identity and method signature metadata.
///
/// This module contains the leaf value types of the catalog: versions, public key tokens,
/// assembly references and method signature blobs. All of them are immutable, compare
/// structurally and are safe to share between threads.
pub mod metadata;

/// The integration catalog: method references, replacements, integrations, loading and
/// filtering.
pub mod integrations;

/// Process context for diagnostics: log file location, process name and id.
pub mod platform;

/// `hookscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `hookscope` Error type
///
/// See [`Error`] for the individual failure modes.
pub use error::Error;

pub use integrations::{
    Integration, IntegrationMethod, LoaderConfig, MethodReference, MethodReplacement,
};
pub use metadata::{
    identity::{AssemblyReference, PublicKey, Version},
    signatures::MethodSignature,
};
