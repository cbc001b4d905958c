//! Register state module.
//!
//! The register is the whole client-side state of one checkout session: the
//! code being typed, at most one pending product, and the purchase list. All
//! transitions are plain functions over [`RegisterState`] (no IO, no async),
//! so callers decide how lookups are actually performed.

pub mod purchase_list;
pub mod state;

pub use purchase_list::PurchaseList;
pub use state::{Completion, LookupPhase, LookupTicket, RegisterState};
