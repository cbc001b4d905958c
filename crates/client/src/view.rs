//! Terminal rendering of register state.

use tilldesk_core::Product;
use tilldesk_register::{LookupPhase, PurchaseList, RegisterState};

/// Integral prices print without a fractional part (`150`, not `150.0`).
pub fn format_price(price: f64, suffix: &str) -> String {
    format!("{price}{suffix}")
}

/// Name and price of the pending product, one per line.
pub fn product_card(product: &Product, suffix: &str) -> String {
    format!("{}\n{}", product.name(), format_price(product.price(), suffix))
}

/// One line per purchase, in insertion order.
pub fn purchase_lines(list: &PurchaseList, suffix: &str) -> Vec<String> {
    list.iter()
        .map(|item| format!("{} x1 {}", item.name(), format_price(item.price(), suffix)))
        .collect()
}

pub fn render_list(list: &PurchaseList, suffix: &str) -> String {
    if list.is_empty() {
        return "Purchase list: (empty)".to_string();
    }
    let mut out = String::from("Purchase list:");
    for line in purchase_lines(list, suffix) {
        out.push_str("\n  ");
        out.push_str(&line);
    }
    out
}

pub fn render_state(state: &RegisterState, suffix: &str) -> String {
    let phase = match state.phase() {
        LookupPhase::Idle => "idle",
        LookupPhase::Loading => "loading",
        LookupPhase::PendingShown => "product shown",
    };
    let mut out = format!("Code: {:?} ({phase})", state.code());
    if let Some(product) = state.pending() {
        out.push('\n');
        out.push_str(&product_card(product, suffix));
    }
    out
}
