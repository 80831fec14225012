#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the generated message layer.
//! This crate provides the attribute macro that turns a plain struct into a
//! registrable transaction message.

mod macros;

use proc_macro::TokenStream;
use syn::{ItemStruct, parse_macro_input};

/// Attribute macro to define a transaction message type.
///
/// This macro keeps the generated message tables consistent by injecting the
/// behaviors every registrable message needs.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `serde::Serialize`, and
///   `serde::Deserialize`. The macro owns these derives; do not repeat them
///   on the struct.
/// * **Serde Policy**: `deny_unknown_fields`, so stray fields fail decoding
///   instead of being silently dropped.
/// * **`Msg` impl**: implements `dtc_domain::msg::Msg` with the type URL
///   computed from the proto package and the struct name.
///
/// # Arguments
///
/// * `package = "dtc.credit.v1"` - The proto package the message belongs to
///   (required).
/// * `name = "MsgMintCredit"` - Overrides the message name when it differs
///   from the Rust identifier (optional).
///
/// # Example
///
/// ```rust,ignore
/// #[dtc_derive::msg(package = "dtc.credit.v1")]
/// pub struct MsgMintCredit {
///     pub creator: String,
/// }
///
/// assert_eq!(
///     <MsgMintCredit as dtc_domain::msg::Msg>::TYPE_URL,
///     "/dtc.credit.v1.MsgMintCredit",
/// );
/// ```
#[proc_macro_attribute]
pub fn msg(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::msg::expand_msg(args.into(), input).into()
}
