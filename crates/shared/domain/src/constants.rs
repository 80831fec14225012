//! Protocol-wide constants shared by every module table.

/// Proto package namespace all DTC modules live under.
pub const CHAIN_NAMESPACE: &str = "dtc";

/// Proto package version used by every current module.
pub const PROTO_VERSION: &str = "v1";

/// Smallest denomination of the chain's bond token (1 DTC = 1_000_000 udtc).
pub const BOND_DENOM: &str = "udtc";

/// Bech32 human-readable prefix for account addresses.
pub const ADDRESS_PREFIX: &str = "dtc";

/// Module account receiving the minting split (the GBDP funding pool).
pub const GBDP_POOL_MODULE_NAME: &str = "gbdp_pool";

/// Name of the governance module; the `authority` of every `MsgUpdateParams`
/// is derived from it.
pub const GOV_MODULE_NAME: &str = "gov";

/// Default admin public key (33-byte compressed secp256k1, hex) the node
/// falls back to when module params leave `admin_pubkey` empty.
pub const DEFAULT_ADMIN_PUBKEY_HEX: &str =
    "03555db1e9893d6bafff7c3afdb62ddb99cf2f073d25144701966607f63e561a38";

/// Signature marker the node accepts verbatim in integration tests
/// (the ASCII hex of the word "signature").
pub const INTEGRATION_TEST_SIGNATURE: &str = "7369676e6174757265";

/// Names of the protocol modules, in registration order.
pub mod module_names {
    pub const DTC: &str = "dtc";
    pub const CREDIT: &str = "credit";
    pub const IDENTITY: &str = "identity";
    pub const TASK: &str = "task";
}
