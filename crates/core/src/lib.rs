//! `tilldesk-core` — domain building blocks for the register client.
//!
//! This crate contains **pure domain** logic (no IO, no HTTP, no clocks):
//! product codes, products, and the validation that turns a lookup response
//! body into a [`Product`].

pub mod code;
pub mod error;
pub mod product;
pub mod value_object;

pub use code::ProductCode;
pub use error::{LookupError, LookupResult};
pub use product::{Product, RawProduct};
pub use value_object::ValueObject;
