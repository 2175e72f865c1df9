//! JSON integration definitions.
//!
//! A definition document is an array of integrations. Loading is tolerant at the entry level:
//! a document that is not JSON or not an array is an error, but an integration or replacement
//! that cannot be understood is skipped with a warning and the rest of the document is kept.
//!
//! ```json
//! [
//!   {
//!     "name": "AdoNet",
//!     "method_replacements": [
//!       {
//!         "caller": {},
//!         "target": {
//!           "assembly": "System.Data",
//!           "type": "System.Data.Common.DbCommand",
//!           "method": "ExecuteNonQuery",
//!           "minimum_major": 4,
//!           "maximum_major": 4
//!         },
//!         "wrapper": {
//!           "assembly": "Wrappers, Version=1.0.0.0, Culture=neutral, PublicKeyToken=def86d061d0d2eeb",
//!           "type": "Wrappers.AdoNet",
//!           "method": "ExecuteNonQuery",
//!           "signature": "00 04 08 1C 08 08 0A",
//!           "action": "ReplaceTargetMethod"
//!         }
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! Version windows are given per component. Missing minimum components are `0`, missing maximum
//! components are `65535`, and the revision is always `0` for the minimum and `65535` for the
//! maximum.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, info_span, warn};

use crate::{
    integrations::{
        filter_integrations_by_name, Integration, LoaderConfig, MethodReference,
        MethodReplacement,
    },
    metadata::{
        identity::{AssemblyReference, Version},
        signatures::MethodSignature,
    },
    platform::ProcessInfo,
    Result,
};

/// A method reference as written in a definition document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMethodReference {
    assembly: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(rename = "method")]
    method_name: String,
    action: String,
    signature: Option<Value>,
    signature_types: Vec<Value>,
    minimum_major: Option<u64>,
    minimum_minor: Option<u64>,
    minimum_patch: Option<u64>,
    maximum_major: Option<u64>,
    maximum_minor: Option<u64>,
    maximum_patch: Option<u64>,
}

impl RawMethodReference {
    fn into_reference(self) -> MethodReference {
        let min_version = Version::new(
            version_component(self.minimum_major, 0),
            version_component(self.minimum_minor, 0),
            version_component(self.minimum_patch, 0),
            0,
        );
        let max_version = Version::new(
            version_component(self.maximum_major, u16::MAX),
            version_component(self.maximum_minor, u16::MAX),
            version_component(self.maximum_patch, u16::MAX),
            u16::MAX,
        );

        let method_signature = match &self.signature {
            None | Some(Value::Null) => MethodSignature::default(),
            Some(value) => parse_signature(value).unwrap_or_else(|| {
                warn!(
                    type_name = %self.type_name,
                    method = %self.method_name,
                    signature = %value,
                    "malformed method signature, using an empty signature"
                );
                MethodSignature::default()
            }),
        };

        let signature_types = self
            .signature_types
            .into_iter()
            .filter_map(|value| match value {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect();

        MethodReference {
            assembly: AssemblyReference::parse(&self.assembly),
            type_name: self.type_name,
            method_name: self.method_name,
            action: self.action,
            method_signature,
            min_version,
            max_version,
            signature_types,
        }
    }
}

fn version_component(value: Option<u64>, default: u16) -> u16 {
    value.map_or(default, |v| u16::try_from(v).unwrap_or(u16::MAX))
}

/// A signature is either an array of byte values or a string of hex byte pairs.
fn parse_signature(value: &Value) -> Option<MethodSignature> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|byte| u8::try_from(byte).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(MethodSignature::new),
        Value::String(text) => MethodSignature::from_hex(text),
        _ => None,
    }
}

fn parse_reference(value: &Value) -> std::result::Result<MethodReference, serde_json::Error> {
    RawMethodReference::deserialize(value).map(RawMethodReference::into_reference)
}

fn parse_replacement(integration: &str, index: usize, value: &Value) -> Option<MethodReplacement> {
    let Some(object) = value.as_object() else {
        warn!(integration, index, "method replacement is not an object, skipping");
        return None;
    };

    let reference = |key: &str, required: bool| -> Option<MethodReference> {
        match object.get(key) {
            None | Some(Value::Null) if !required => Some(MethodReference::default()),
            Some(value @ Value::Object(_)) => match parse_reference(value) {
                Ok(reference) => Some(reference),
                Err(error) => {
                    warn!(
                        integration,
                        index,
                        key,
                        %error,
                        "malformed method reference, skipping replacement"
                    );
                    None
                }
            },
            _ => {
                warn!(
                    integration,
                    index,
                    key,
                    "missing or invalid method reference, skipping replacement"
                );
                None
            }
        }
    };

    Some(MethodReplacement::new(
        reference("caller", false)?,
        reference("target", true)?,
        reference("wrapper", true)?,
    ))
}

fn parse_integration(index: usize, object: &Map<String, Value>) -> Option<Integration> {
    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!(index, "integration without a name, skipping");
            return None;
        }
    };

    let replacements = match object.get("method_replacements") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| parse_replacement(name, i, item))
            .collect(),
        Some(_) => {
            warn!(integration = name, "method_replacements is not an array, ignoring it");
            Vec::new()
        }
    };

    debug!(
        integration = name,
        replacements = replacements.len(),
        "parsed integration"
    );
    Some(Integration::new(name, replacements))
}

/// Parse a definition document.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `json` is not valid JSON and [`crate::Error::Malformed`]
/// if the document is not an array. Entries that cannot be understood are skipped.
///
/// # Examples
///
/// ```rust
/// use hookscope::integrations::load_integrations_from_str;
///
/// let integrations = load_integrations_from_str(r#"[{ "name": "Redis" }, { "name": "" }]"#)?;
/// assert_eq!(integrations.len(), 1);
/// assert!(integrations[0].method_replacements.is_empty());
/// # Ok::<(), hookscope::Error>(())
/// ```
pub fn load_integrations_from_str(json: &str) -> Result<Vec<Integration>> {
    let document: Value = serde_json::from_str(json)?;
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(malformed_error!(
                "integration definitions must be an array, found {}",
                json_kind(&other)
            ))
        }
    };

    let integrations: Vec<Integration> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.as_object() {
            Some(object) => parse_integration(index, object),
            None => {
                warn!(index, "integration is not an object, skipping");
                None
            }
        })
        .collect();

    if integrations.len() != entries.len() {
        info!(
            loaded = integrations.len(),
            skipped = entries.len() - integrations.len(),
            "skipped malformed integrations"
        );
    }
    Ok(integrations)
}

/// Read and parse a definition file.
///
/// # Errors
///
/// Returns [`crate::Error::FileError`] if the file cannot be read, otherwise the errors of
/// [`load_integrations_from_str`].
pub fn load_integrations_from_file(path: impl AsRef<Path>) -> Result<Vec<Integration>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let integrations = load_integrations_from_str(&json)?;

    debug!(path = %path.display(), count = integrations.len(), "loaded integration definitions");
    Ok(integrations)
}

/// Load every definition file named by `config`, in order, and drop the disabled integrations.
///
/// A file that cannot be read or parsed is reported and skipped, so a broken definition file
/// leaves the rest of the catalog usable.
pub fn load_integrations(config: &LoaderConfig) -> Vec<Integration> {
    let process = ProcessInfo::current();
    let span = info_span!("catalog_load", process = %process.name, pid = process.id);
    let _enter = span.enter();

    let mut integrations = Vec::new();
    for path in &config.definition_paths {
        match load_integrations_from_file(path) {
            Ok(loaded) => integrations.extend(loaded),
            Err(error) => {
                warn!(path = %path.display(), %error, "unable to load integration definitions");
            }
        }
    }

    let enabled = filter_integrations_by_name(&integrations, &config.disabled_integrations);
    info!(
        files = config.definition_paths.len(),
        loaded = integrations.len(),
        enabled = enabled.len(),
        "integration catalog loaded"
    );
    enabled
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
