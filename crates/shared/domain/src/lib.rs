//! # Domain Models
//!
//! This crate contains pure protocol types with minimal dependencies
//! (`serde`, `bitflags`, `thiserror`). Keep it lean: no I/O, no networking,
//! just data and simple helpers.

pub mod address;
pub mod coin;
pub mod config;
pub mod constants;
pub mod modules;
pub mod msg;
pub mod type_url;

pub use crate::address::{AddressError, verify_address};
pub use crate::coin::{Coin, CoinError};
pub use crate::modules::ModuleSet;
pub use crate::msg::Msg;
pub use crate::type_url::{TypeUrl, TypeUrlError};
