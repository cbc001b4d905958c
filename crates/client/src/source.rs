//! Where products come from.

use async_trait::async_trait;
use tilldesk_core::{LookupResult, Product, ProductCode};

/// A product lookup backend.
///
/// The register talks to this trait only; the HTTP implementation lives in
/// [`crate::lookup`], tests plug in in-memory sources.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Check configuration before a lookup is issued.
    ///
    /// Runs ahead of code validation, so a misconfigured client reports the
    /// configuration problem even for an empty code.
    fn ensure_ready(&self) -> LookupResult<()> {
        Ok(())
    }

    /// Fetch and validate one product.
    async fn fetch(&self, code: &ProductCode) -> LookupResult<Product>;
}
