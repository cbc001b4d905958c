//! The register controller.
//!
//! Owns the session state and runs each operator action against it. Lookups
//! release the state lock while the request is in flight, so the operator can
//! keep typing or fire another lookup; the sequence guard in
//! [`RegisterState`] decides which result lands.

use std::sync::Arc;

use tilldesk_core::{LookupError, Product};
use tilldesk_register::{Completion, RegisterState};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::notify::{CHECKOUT_MESSAGE, CheckoutNotifier};
use crate::source::ProductSource;

/// Handle to one register session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Register {
    state: Arc<Mutex<RegisterState>>,
    source: Arc<dyn ProductSource>,
}

impl Register {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegisterState::new())),
            source,
        }
    }

    /// Copy of the current state, for rendering.
    pub async fn snapshot(&self) -> RegisterState {
        self.state.lock().await.clone()
    }

    pub async fn set_code(&self, code: impl Into<String>) {
        self.state.lock().await.set_code(code);
    }

    /// Look up the current code and update the pending slot.
    ///
    /// Returns the product when it was shown. Every failure is logged and
    /// yields `None`; configuration and input problems abort before any
    /// request and leave the register untouched.
    pub async fn read_code(&self) -> Option<Product> {
        if let Err(err) = self.source.ensure_ready() {
            log_failure(&err, None);
            return None;
        }

        let ticket = {
            let mut state = self.state.lock().await;
            match state.begin_lookup() {
                Ok(ticket) => ticket,
                Err(err) => {
                    log_failure(&err, None);
                    return None;
                }
            }
        };
        debug!(seq = ticket.seq(), code = %ticket.code(), "lookup issued");

        let result = self.source.fetch(ticket.code()).await;

        let mut state = self.state.lock().await;
        match state.complete_lookup(&ticket, result) {
            Completion::Shown(product) => {
                info!(
                    code = %ticket.code(),
                    name = product.name(),
                    price = product.price(),
                    "product loaded"
                );
                Some(product)
            }
            Completion::Cleared(err) => {
                log_failure(&err, Some(ticket.code().as_str()));
                None
            }
            Completion::Superseded { seq, latest } => {
                debug!(seq, latest, code = %ticket.code(), "discarding superseded lookup result");
                None
            }
        }
    }

    /// Add the pending product to the purchase list.
    pub async fn confirm_add(&self) -> Option<Product> {
        let mut state = self.state.lock().await;
        let added = state.confirm_add();
        match &added {
            Some(product) => info!(
                name = product.name(),
                items = state.purchases().len(),
                "product added to purchase list"
            ),
            None => debug!("nothing pending to add"),
        }
        added
    }

    /// Acknowledge the purchase with the operator, then empty the list.
    ///
    /// Always succeeds, including on an empty list.
    pub async fn checkout(&self, notifier: &dyn CheckoutNotifier) -> Vec<Product> {
        notifier.acknowledge(CHECKOUT_MESSAGE);
        let purchased = self.state.lock().await.checkout();
        info!(items = purchased.len(), "checkout complete");
        purchased
    }
}

fn log_failure(err: &LookupError, code: Option<&str>) {
    match err {
        LookupError::Config => error!("API base URL is not configured"),
        LookupError::Input => warn!("enter a product code first"),
        LookupError::Remote { status } => {
            error!(code, status, "failed to load product: server error")
        }
        LookupError::Validation(reason) => {
            error!(code, reason = %reason, "failed to load product: malformed data")
        }
        LookupError::Transport(reason) => {
            error!(code, reason = %reason, "failed to load product: request failed")
        }
    }
}
