//! `tilldesk-client`
//!
//! **Responsibility:** the register client around a remote product endpoint.
//!
//! This crate provides:
//! - Configuration (API base URL, display options)
//! - The HTTP product lookup (`GET {base}/product/{code}`)
//! - The [`Register`] controller that owns the session state
//! - Terminal rendering and the interactive command set
//!
//! The endpoint is the authority on products; nothing is persisted locally.

pub mod commands;
pub mod config;
pub mod controller;
pub mod lookup;
pub mod notify;
pub mod source;
pub mod view;

pub use config::ClientConfig;
pub use controller::Register;
pub use lookup::{HttpProductSource, lookup};
pub use notify::{CheckoutNotifier, StdioNotifier};
pub use source::ProductSource;
