//! Checkout acknowledgment.

use std::io::{BufRead, Write};

/// Message shown when a checkout completes.
pub const CHECKOUT_MESSAGE: &str = "Purchase complete.";

/// Blocking acknowledgment shown to the operator on checkout.
///
/// `acknowledge` returns only once the operator has seen the message.
pub trait CheckoutNotifier: Send + Sync {
    fn acknowledge(&self, message: &str);
}

/// Prints the message to stdout and waits for Enter on stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioNotifier;

impl CheckoutNotifier for StdioNotifier {
    fn acknowledge(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{message}");
        let _ = write!(out, "[press Enter] ");
        let _ = out.flush();
        drop(out);

        let mut line = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
            tracing::warn!(error = %e, "failed to read checkout acknowledgment");
        }
    }
}
