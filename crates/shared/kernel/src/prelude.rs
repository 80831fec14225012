//! Convenience re-exports for registry consumers.

pub use crate::codec::{CodecError, RawMsg, decode, encode};
pub use crate::registry::{MsgDescriptor, MsgRegistry, RegistryError};
pub use dtc_domain::msg::Msg;
pub use dtc_domain::type_url::{TypeUrl, TypeUrlError};
