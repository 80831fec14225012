//! Facade crate for the DTC client message registries.
//! Re-exports domain/kernel primitives and aggregates the module tables.
//! Keep this crate thin: it should compose other crates, not implement
//! protocol logic.
//!
//! ## Usage
//! ```rust,ignore
//! let registry = dtc_client::registry()?;
//! let raw = registry.encode(&MsgMintCredit { creator })?;
//! ```

pub use dtc_domain as domain;
pub use dtc_kernel as kernel;

use dtc_domain::ModuleSet;
use dtc_kernel::registry::{MsgRegistry, RegistryError};
use tracing::info;

/// Protocol modules exposed for direct access to their tables and types.
pub mod modules {
    pub use dtc_credit as credit;
    pub use dtc_dtc as dtc;
    pub use dtc_identity as identity;
    pub use dtc_task as task;
}

/// Module names compiled into this client, in registration order.
pub const MODULE_NAMES: &[&str] = &[
    modules::dtc::MODULE_NAME,
    modules::credit::MODULE_NAME,
    modules::identity::MODULE_NAME,
    modules::task::MODULE_NAME,
];

#[must_use]
pub fn is_known_module(name: &str) -> bool {
    MODULE_NAMES.contains(&name)
}

/// Builds the full message registry from every module table.
///
/// # Errors
/// Returns a [`RegistryError`] if any table carries a duplicate or malformed
/// type URL; with the generated tables this only happens when a module is
/// regenerated inconsistently.
pub fn registry() -> Result<MsgRegistry, RegistryError> {
    registry_with(ModuleSet::ALL)
}

/// Builds a registry limited to the selected modules.
///
/// # Errors
/// Same failure modes as [`registry`].
pub fn registry_with(selection: ModuleSet) -> Result<MsgRegistry, RegistryError> {
    let mut registry = MsgRegistry::new();

    if selection.contains(ModuleSet::DTC) {
        registry.register_module(modules::dtc::MODULE_NAME, modules::dtc::msg_types())?;
    }
    if selection.contains(ModuleSet::CREDIT) {
        registry.register_module(modules::credit::MODULE_NAME, modules::credit::msg_types())?;
    }
    if selection.contains(ModuleSet::IDENTITY) {
        registry.register_module(modules::identity::MODULE_NAME, modules::identity::msg_types())?;
    }
    if selection.contains(ModuleSet::TASK) {
        registry.register_module(modules::task::MODULE_NAME, modules::task::msg_types())?;
    }

    info!(messages = registry.len(), modules = registry.modules().len(), "client registry ready");
    Ok(registry)
}
