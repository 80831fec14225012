//! Kernel utilities shared by the module crates and the facade.
//! Keep this crate lightweight; it provides the codec descriptor, the
//! aggregate message registry, and config loading.
//!
//! ## Registering a module table
//! ```rust,ignore
//! let mut registry = MsgRegistry::new();
//! registry.register_module("credit", dtc_credit::msg_types())?;
//! let raw = registry.encode(&MsgMintCredit { creator })?;
//! ```

pub mod codec;
pub mod config;
pub mod prelude;
pub mod registry;

pub use crate::codec::{CodecError, RawMsg};
pub use crate::registry::{MsgDescriptor, MsgRegistry, RegistryError};

pub use dtc_domain as domain;
