use crate::integrations::MethodReference;

/// One interception rule: calls from `caller_method` to `target_method` are routed through
/// `wrapper_method`.
///
/// A default `caller_method` matches any caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MethodReplacement {
    /// Caller pattern, default for any caller
    pub caller_method: MethodReference,
    /// Method being intercepted
    pub target_method: MethodReference,
    /// Method substituted for the target
    pub wrapper_method: MethodReference,
}

impl MethodReplacement {
    /// Create a replacement rule.
    #[must_use]
    pub fn new(
        caller_method: MethodReference,
        target_method: MethodReference,
        wrapper_method: MethodReference,
    ) -> Self {
        Self {
            caller_method,
            target_method,
            wrapper_method,
        }
    }

    /// `true` if the rule applies regardless of the calling assembly.
    #[must_use]
    pub fn matches_any_caller(&self) -> bool {
        self.caller_method.assembly.name.is_empty()
    }
}

/// A named, ordered group of [`MethodReplacement`]s, e.g. everything needed to trace ADO.NET.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Integration {
    /// Name used to enable or disable the integration
    pub integration_name: String,
    /// Replacement rules, in catalog order
    pub method_replacements: Vec<MethodReplacement>,
}

impl Integration {
    /// Create an integration.
    #[must_use]
    pub fn new(
        integration_name: impl Into<String>,
        method_replacements: Vec<MethodReplacement>,
    ) -> Self {
        Self {
            integration_name: integration_name.into(),
            method_replacements,
        }
    }

    /// One [`IntegrationMethod`] per replacement, in order.
    ///
    /// ```rust
    /// use hookscope::{Integration, MethodReplacement};
    ///
    /// let integration = Integration::new(
    ///     "HttpMessageHandler",
    ///     vec![MethodReplacement::default(), MethodReplacement::default()],
    /// );
    /// let methods = integration.flatten();
    /// assert_eq!(methods.len(), 2);
    /// assert!(methods.iter().all(|m| m.integration_name == "HttpMessageHandler"));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Vec<IntegrationMethod> {
        self.method_replacements
            .iter()
            .map(|replacement| {
                IntegrationMethod::new(self.integration_name.clone(), replacement.clone())
            })
            .collect()
    }
}

/// A single replacement rule tagged with the integration it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntegrationMethod {
    /// Name of the owning integration
    pub integration_name: String,
    /// The rule
    pub replacement: MethodReplacement,
}

impl IntegrationMethod {
    /// Create an integration method.
    #[must_use]
    pub fn new(integration_name: impl Into<String>, replacement: MethodReplacement) -> Self {
        Self {
            integration_name: integration_name.into(),
            replacement,
        }
    }
}
