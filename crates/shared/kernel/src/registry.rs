//! Codec descriptors and the aggregate message registry.
//!
//! Each protocol module contributes an ordered table of descriptors; the
//! registry merges them, rejects duplicates, and answers lookups by type URL.
//! Once built, a registry is immutable and can be shared freely across
//! threads.

use crate::codec::{self, CodecError, RawMsg};
use dtc_domain::msg::Msg;
use dtc_domain::type_url::{TypeUrl, TypeUrlError};
use fxhash::FxHashMap;
use tracing::debug;

/// A registration entry: a message type URL paired with the generated codec
/// for that schema.
///
/// Descriptors are plain data (a static URL plus monomorphized function
/// pointers); they are `Copy` and carry no state.
#[derive(Debug, Clone, Copy)]
pub struct MsgDescriptor {
    type_url: &'static str,
    check: fn(&[u8]) -> Result<(), postcard::Error>,
}

impl MsgDescriptor {
    /// Builds the descriptor for a concrete message type.
    #[must_use]
    pub fn of<M: Msg>() -> Self {
        Self { type_url: M::TYPE_URL, check: check_bytes::<M> }
    }

    /// The type URL this descriptor registers under.
    #[must_use]
    pub const fn type_url(&self) -> &'static str {
        self.type_url
    }

    /// Verifies that `value` parses under this descriptor's schema.
    ///
    /// # Errors
    /// Returns [`CodecError::Decode`] when the bytes do not match.
    pub fn check(&self, value: &[u8]) -> Result<(), CodecError> {
        (self.check)(value)
            .map_err(|source| CodecError::Decode { type_url: self.type_url.to_owned(), source })
    }
}

fn check_bytes<M: Msg>(bytes: &[u8]) -> Result<(), postcard::Error> {
    postcard::from_bytes::<M>(bytes).map(|_| ())
}

/// Failures while building or querying a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate registration for `{type_url}` (first by `{first}`, again by `{second}`)")]
    Duplicate { type_url: &'static str, first: &'static str, second: &'static str },

    #[error("malformed type url `{type_url}`: {source}")]
    MalformedTypeUrl { type_url: &'static str, source: TypeUrlError },

    #[error("no codec registered for `{type_url}`")]
    Unregistered { type_url: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

struct Registered {
    descriptor: MsgDescriptor,
    module: &'static str,
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registered")
            .field("type_url", &self.descriptor.type_url())
            .field("module", &self.module)
            .finish()
    }
}

/// The aggregate of all registered module tables.
///
/// Lookup is by type URL; iteration follows insertion order, which is the
/// order modules registered their tables.
#[derive(Debug, Default)]
pub struct MsgRegistry {
    by_url: FxHashMap<&'static str, Registered>,
    order: Vec<&'static str>,
    modules: Vec<&'static str>,
}

impl MsgRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single descriptor under `module`.
    ///
    /// # Errors
    /// Rejects malformed type URLs and duplicate registrations.
    pub fn register(
        &mut self,
        module: &'static str,
        descriptor: MsgDescriptor,
    ) -> Result<(), RegistryError> {
        let type_url = descriptor.type_url();
        TypeUrl::parse(type_url)
            .map_err(|source| RegistryError::MalformedTypeUrl { type_url, source })?;

        if let Some(existing) = self.by_url.get(type_url) {
            return Err(RegistryError::Duplicate {
                type_url,
                first: existing.module,
                second: module,
            });
        }

        self.by_url.insert(type_url, Registered { descriptor, module });
        self.order.push(type_url);
        Ok(())
    }

    /// Registers a module's full table in its declared order.
    ///
    /// # Errors
    /// Fails on the first malformed or duplicate entry; earlier entries of
    /// the same call stay registered.
    pub fn register_module(
        &mut self,
        module: &'static str,
        descriptors: impl IntoIterator<Item = MsgDescriptor>,
    ) -> Result<(), RegistryError> {
        let mut count = 0usize;
        for descriptor in descriptors {
            self.register(module, descriptor)?;
            count += 1;
        }
        if !self.modules.contains(&module) {
            self.modules.push(module);
        }
        debug!(module, count, "registered module message table");
        Ok(())
    }

    /// Looks a descriptor up by type URL.
    #[must_use]
    pub fn resolve(&self, type_url: &str) -> Option<&MsgDescriptor> {
        self.by_url.get(type_url).map(|r| &r.descriptor)
    }

    /// The module that registered `type_url`, if any.
    #[must_use]
    pub fn module_of(&self, type_url: &str) -> Option<&'static str> {
        self.by_url.get(type_url).map(|r| r.module)
    }

    #[must_use]
    pub fn contains(&self, type_url: &str) -> bool {
        self.by_url.contains_key(type_url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered type URLs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Modules that contributed tables, in registration order.
    #[must_use]
    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }

    /// Encodes `msg`, requiring its type to be registered.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unregistered`] for unknown types, or a codec
    /// error if serialization fails.
    pub fn encode<M: Msg>(&self, msg: &M) -> Result<RawMsg, RegistryError> {
        if !self.contains(M::TYPE_URL) {
            return Err(RegistryError::Unregistered { type_url: M::TYPE_URL.to_owned() });
        }
        Ok(codec::encode(msg)?)
    }

    /// Decodes a [`RawMsg`] into `M`, requiring the envelope's type URL to be
    /// registered.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unregistered`] for unknown URLs, or a codec
    /// error on mismatch/corruption.
    pub fn decode<M: Msg>(&self, raw: &RawMsg) -> Result<M, RegistryError> {
        if !self.contains(raw.type_url.as_str()) {
            return Err(RegistryError::Unregistered { type_url: raw.type_url.clone() });
        }
        Ok(codec::decode(raw)?)
    }

    /// Checks that an envelope names a registered schema and that its bytes
    /// parse under it, without materializing the message.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unregistered`] or a decode error.
    pub fn verify(&self, raw: &RawMsg) -> Result<(), RegistryError> {
        let descriptor = self
            .resolve(&raw.type_url)
            .ok_or_else(|| RegistryError::Unregistered { type_url: raw.type_url.clone() })?;
        Ok(descriptor.check(&raw.value)?)
    }
}
