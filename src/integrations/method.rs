use std::hash::{Hash, Hasher};

use strum::{Display, EnumIter, EnumString};

use crate::metadata::{
    identity::{AssemblyReference, Version},
    signatures::MethodSignature,
};

/// The actions the instrumentation engine knows how to apply to a wrapper.
///
/// [`MethodReference::action`] is kept as the raw string read from the catalog; this enum is the
/// typed view of the values that have a meaning.
///
/// ```rust
/// use hookscope::integrations::ReplacementAction;
///
/// let action: ReplacementAction = "InsertFirst".parse().unwrap();
/// assert_eq!(action, ReplacementAction::InsertFirst);
/// assert_eq!(action.to_string(), "InsertFirst");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum ReplacementAction {
    /// Replace calls to the target method with calls to the wrapper
    ReplaceTargetMethod,
    /// Insert a call to the wrapper at the start of the target method
    InsertFirst,
    /// Rewrite the target method body to call through the wrapper
    CallTargetModification,
}

/// An assembly-qualified method, applicable over an inclusive window of assembly versions.
///
/// The default reference has empty names and the widest possible window; used as the caller of
/// a [`MethodReplacement`](crate::integrations::MethodReplacement) it matches any caller.
///
/// Equality and hashing cover the assembly, the type and method names, the signature and the
/// version window. The `action` tag and the `signature_types` hints describe what to do with a
/// method, not which method it is, and do not take part.
#[derive(Debug, Clone)]
pub struct MethodReference {
    /// Assembly declaring the method
    pub assembly: AssemblyReference,
    /// Fully qualified type name
    pub type_name: String,
    /// Method name
    pub method_name: String,
    /// Opaque action tag, see [`ReplacementAction`]
    pub action: String,
    /// Signature used to pick an overload
    pub method_signature: MethodSignature,
    /// Lowest supported assembly version, inclusive
    pub min_version: Version,
    /// Highest supported assembly version, inclusive
    pub max_version: Version,
    /// Type names of the return value and arguments, as written in the catalog
    pub signature_types: Vec<String>,
}

impl Default for MethodReference {
    fn default() -> Self {
        Self {
            assembly: AssemblyReference::default(),
            type_name: String::new(),
            method_name: String::new(),
            action: String::new(),
            method_signature: MethodSignature::default(),
            min_version: Version::MIN,
            max_version: Version::MAX,
            signature_types: Vec::new(),
        }
    }
}

impl MethodReference {
    /// Create a reference to `type_name::method_name` in the assembly described by
    /// `assembly` (a display name, see [`AssemblyReference::parse`]) covering every version.
    ///
    /// ```rust
    /// use hookscope::integrations::MethodReference;
    ///
    /// let reference =
    ///     MethodReference::new("System.Data", "System.Data.Common.DbCommand", "ExecuteReader");
    /// assert_eq!(reference.assembly.name, "System.Data");
    /// assert_eq!(
    ///     reference.method_cache_key(),
    ///     "[System.Data]System.Data.Common.DbCommand.ExecuteReader_vMin_0.0.0.0_vMax_65535.65535.65535.65535"
    /// );
    /// ```
    #[must_use]
    pub fn new(
        assembly: &str,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        Self {
            assembly: AssemblyReference::parse(assembly),
            type_name: type_name.into(),
            method_name: method_name.into(),
            ..Self::default()
        }
    }

    /// Set the signature, builder style.
    #[must_use]
    pub fn with_signature(mut self, signature: MethodSignature) -> Self {
        self.method_signature = signature;
        self
    }

    /// Set the action tag, builder style.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the version window, builder style.
    #[must_use]
    pub fn with_versions(mut self, min_version: Version, max_version: Version) -> Self {
        self.min_version = min_version;
        self.max_version = max_version;
        self
    }

    /// Set the signature type hints, builder style.
    #[must_use]
    pub fn with_signature_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signature_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Cache key for the type: `[assembly]type_vMin_min_vMax_max`.
    #[must_use]
    pub fn type_cache_key(&self) -> String {
        format!(
            "[{}]{}_vMin_{}_vMax_{}",
            self.assembly.name, self.type_name, self.min_version, self.max_version
        )
    }

    /// Cache key for the method: `[assembly]type.method_vMin_min_vMax_max`.
    #[must_use]
    pub fn method_cache_key(&self) -> String {
        format!(
            "[{}]{}.{}_vMin_{}_vMax_{}",
            self.assembly.name,
            self.type_name,
            self.method_name,
            self.min_version,
            self.max_version
        )
    }

    /// `true` if `version` lies within `[min_version, max_version]`.
    ///
    /// Bounds are compared with the [`Version`] ordering, so the revision never excludes a
    /// version on either side.
    ///
    /// ```rust
    /// use hookscope::{integrations::MethodReference, Version};
    ///
    /// let reference = MethodReference::default()
    ///     .with_versions(Version::new(4, 0, 0, 0), Version::new(4, 5, 0, 0));
    /// assert!(reference.is_version_supported(&Version::new(4, 5, 0, 9)));
    /// assert!(!reference.is_version_supported(&Version::new(4, 6, 0, 0)));
    /// ```
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_version_supported(&self, version: &Version) -> bool {
        !(*version < self.min_version) && !(*version > self.max_version)
    }

    /// The action tag as a [`ReplacementAction`], if it names one.
    #[must_use]
    pub fn known_action(&self) -> Option<ReplacementAction> {
        self.action.parse().ok()
    }
}

impl PartialEq for MethodReference {
    fn eq(&self, other: &Self) -> bool {
        self.assembly == other.assembly
            && self.type_name == other.type_name
            && self.method_name == other.method_name
            && self.method_signature == other.method_signature
            && self.min_version == other.min_version
            && self.max_version == other.max_version
    }
}

impl Eq for MethodReference {}

impl Hash for MethodReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.assembly.hash(state);
        self.type_name.hash(state);
        self.method_name.hash(state);
        self.method_signature.hash(state);
        self.min_version.hash(state);
        self.max_version.hash(state);
    }
}
