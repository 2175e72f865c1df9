//! Selection of the catalog entries that apply to a given module.
//!
//! The instrumentation engine narrows the catalog in three steps: integrations disabled by
//! configuration are dropped ([`filter_integrations_by_name`]), the rest are flattened into
//! individual rules ([`flatten_integrations`]), and the rules are then matched against the module
//! being loaded, both as a caller ([`filter_integrations_by_caller`]) and by the assemblies it
//! references ([`filter_integrations_by_target`]).

use tracing::debug;

use crate::{
    integrations::{Integration, IntegrationMethod},
    metadata::identity::AssemblyReference,
};

/// Flatten every integration into its rules, integrations in order and rules in order.
#[must_use]
pub fn flatten_integrations(integrations: &[Integration]) -> Vec<IntegrationMethod> {
    integrations.iter().flat_map(Integration::flatten).collect()
}

/// Drop the integrations whose name appears in `disabled_names`. Names are case-sensitive.
#[must_use]
pub fn filter_integrations_by_name<S: AsRef<str>>(
    integrations: &[Integration],
    disabled_names: &[S],
) -> Vec<Integration> {
    integrations
        .iter()
        .filter(|integration| {
            let disabled = disabled_names
                .iter()
                .any(|name| name.as_ref() == integration.integration_name);
            if disabled {
                debug!(
                    integration = %integration.integration_name,
                    "integration disabled by configuration"
                );
            }
            !disabled
        })
        .cloned()
        .collect()
}

/// Keep the rules that apply to code in `caller`: rules for any caller and rules whose caller
/// assembly has the same name.
#[must_use]
pub fn filter_integrations_by_caller(
    methods: &[IntegrationMethod],
    caller: &AssemblyReference,
) -> Vec<IntegrationMethod> {
    methods
        .iter()
        .filter(|method| {
            let caller_name = &method.replacement.caller_method.assembly.name;
            caller_name.is_empty() || *caller_name == caller.name
        })
        .cloned()
        .collect()
}

/// Keep the rules whose target lives in `module` itself or in one of the assemblies it
/// references.
#[must_use]
pub fn filter_integrations_by_target(
    methods: &[IntegrationMethod],
    module: &AssemblyReference,
    references: &[AssemblyReference],
) -> Vec<IntegrationMethod> {
    methods
        .iter()
        .filter(|method| {
            let target_name = &method.replacement.target_method.assembly.name;
            *target_name == module.name
                || references
                    .iter()
                    .any(|reference| reference.name == *target_name)
        })
        .cloned()
        .collect()
}
