//! Register state and its transitions.

use serde::Serialize;
use tilldesk_core::{LookupError, LookupResult, Product, ProductCode};

use crate::purchase_list::PurchaseList;

/// Where the register stands in the current lookup cycle.
///
/// `Idle -> Loading -> { PendingShown -> (add) -> Idle, (failure) -> Idle }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPhase {
    Idle,
    Loading,
    PendingShown,
}

/// Handle for one issued lookup.
///
/// Tickets are numbered from a monotonic counter; only the ticket of the most
/// recently issued lookup may write the pending slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    code: ProductCode,
}

impl LookupTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }
}

/// What completing a lookup did to the register.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The product now sits in the pending slot.
    Shown(Product),
    /// The lookup failed; the pending slot was cleared.
    Cleared(LookupError),
    /// A newer lookup was issued meanwhile; nothing changed.
    Superseded { seq: u64, latest: u64 },
}

/// Client-side state of one checkout session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterState {
    code: String,
    pending: Option<Product>,
    purchases: PurchaseList,
    last_issued: u64,
    in_flight: Option<u64>,
}

impl RegisterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn pending(&self) -> Option<&Product> {
        self.pending.as_ref()
    }

    pub fn purchases(&self) -> &PurchaseList {
        &self.purchases
    }

    /// Sequence number of the most recently issued lookup (0 before any).
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn phase(&self) -> LookupPhase {
        if self.in_flight.is_some() {
            LookupPhase::Loading
        } else if self.pending.is_some() {
            LookupPhase::PendingShown
        } else {
            LookupPhase::Idle
        }
    }

    /// Replace the code input.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Issue a lookup for the current code.
    ///
    /// An empty code fails with [`LookupError::Input`] and leaves the state
    /// untouched. Otherwise the register moves to `Loading` and every earlier
    /// ticket is superseded.
    pub fn begin_lookup(&mut self) -> LookupResult<LookupTicket> {
        let code = ProductCode::parse(self.code.clone())?;
        self.last_issued += 1;
        self.in_flight = Some(self.last_issued);
        Ok(LookupTicket {
            seq: self.last_issued,
            code,
        })
    }

    /// Apply the result of a lookup.
    ///
    /// Results for superseded tickets are dropped. For the latest ticket a
    /// product fills the pending slot and any error clears it.
    pub fn complete_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: LookupResult<Product>,
    ) -> Completion {
        if ticket.seq != self.last_issued {
            return Completion::Superseded {
                seq: ticket.seq,
                latest: self.last_issued,
            };
        }

        self.in_flight = None;
        match result {
            Ok(product) => {
                self.pending = Some(product.clone());
                Completion::Shown(product)
            }
            Err(err) => {
                self.pending = None;
                Completion::Cleared(err)
            }
        }
    }

    /// Move the pending product to the end of the purchase list.
    ///
    /// Clears the pending slot and the code input. Without a pending product
    /// this is a no-op and returns `None`.
    pub fn confirm_add(&mut self) -> Option<Product> {
        let product = self.pending.take()?;
        self.purchases.push(product.clone());
        self.code.clear();
        Some(product)
    }

    /// Empty the purchase list unconditionally and return what it held.
    pub fn checkout(&mut self) -> Vec<Product> {
        self.purchases.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tea() -> Product {
        Product::new("Tea", 150.0).unwrap()
    }

    fn lookup_ok(state: &mut RegisterState, code: &str, product: Product) -> Completion {
        state.set_code(code);
        let ticket = state.begin_lookup().unwrap();
        state.complete_lookup(&ticket, Ok(product))
    }

    #[test]
    fn fresh_register_is_idle_and_empty() {
        let state = RegisterState::new();
        assert_eq!(state.phase(), LookupPhase::Idle);
        assert!(state.pending().is_none());
        assert!(state.purchases().is_empty());
        assert_eq!(state.code(), "");
    }

    #[test]
    fn successful_lookup_then_add_fills_the_list() {
        let mut state = RegisterState::new();
        state.set_code("1001");

        let ticket = state.begin_lookup().unwrap();
        assert_eq!(ticket.code().as_str(), "1001");
        assert_eq!(state.phase(), LookupPhase::Loading);

        let completion = state.complete_lookup(&ticket, Ok(tea()));
        assert_eq!(completion, Completion::Shown(tea()));
        assert_eq!(state.phase(), LookupPhase::PendingShown);
        assert_eq!(state.pending(), Some(&tea()));

        assert_eq!(state.confirm_add(), Some(tea()));
        assert_eq!(state.purchases().items(), &[tea()]);
        assert!(state.pending().is_none());
        assert_eq!(state.code(), "");
        assert_eq!(state.phase(), LookupPhase::Idle);
    }

    #[test]
    fn failed_lookup_clears_pending_and_keeps_list() {
        let mut state = RegisterState::new();
        lookup_ok(&mut state, "1001", tea());
        state.confirm_add();
        lookup_ok(&mut state, "1001", tea());

        state.set_code("9999");
        let ticket = state.begin_lookup().unwrap();
        let completion = state.complete_lookup(&ticket, Err(LookupError::remote(404)));

        assert_eq!(completion, Completion::Cleared(LookupError::remote(404)));
        assert!(state.pending().is_none());
        assert_eq!(state.purchases().len(), 1);
        assert_eq!(state.phase(), LookupPhase::Idle);
        assert_eq!(state.code(), "9999");
    }

    #[test]
    fn empty_code_is_rejected_without_issuing_a_ticket() {
        let mut state = RegisterState::new();
        lookup_ok(&mut state, "1001", tea());
        state.set_code("");

        assert_eq!(state.begin_lookup(), Err(LookupError::Input));
        assert_eq!(state.last_issued(), 1);
        assert_eq!(state.pending(), Some(&tea()));
        assert_eq!(state.phase(), LookupPhase::PendingShown);
    }

    #[test]
    fn only_the_latest_issued_lookup_is_applied() {
        let mut state = RegisterState::new();
        state.set_code("1001");
        let first = state.begin_lookup().unwrap();
        state.set_code("2002");
        let second = state.begin_lookup().unwrap();

        let bread = Product::new("Bread", 220.0).unwrap();
        assert_eq!(state.complete_lookup(&second, Ok(bread.clone())), Completion::Shown(bread.clone()));

        // the older response arrives last and must not win
        let late = state.complete_lookup(&first, Ok(tea()));
        assert_eq!(late, Completion::Superseded { seq: 1, latest: 2 });
        assert_eq!(state.pending(), Some(&bread));
    }

    #[test]
    fn stale_failure_does_not_clear_a_newer_result() {
        let mut state = RegisterState::new();
        state.set_code("9999");
        let first = state.begin_lookup().unwrap();
        state.set_code("1001");
        let second = state.begin_lookup().unwrap();

        state.complete_lookup(&second, Ok(tea()));
        state.complete_lookup(&first, Err(LookupError::remote(404)));
        assert_eq!(state.pending(), Some(&tea()));
    }

    #[test]
    fn register_stays_loading_until_latest_lookup_resolves() {
        let mut state = RegisterState::new();
        state.set_code("1001");
        let first = state.begin_lookup().unwrap();
        let second = state.begin_lookup().unwrap();

        state.complete_lookup(&first, Ok(tea()));
        assert_eq!(state.phase(), LookupPhase::Loading);
        state.complete_lookup(&second, Ok(tea()));
        assert_eq!(state.phase(), LookupPhase::PendingShown);
    }

    #[test]
    fn confirm_add_without_pending_is_a_no_op() {
        let mut state = RegisterState::new();
        state.set_code("1001");
        assert_eq!(state.confirm_add(), None);
        assert!(state.purchases().is_empty());
        assert_eq!(state.code(), "1001");
    }

    #[test]
    fn checkout_on_empty_list_succeeds() {
        let mut state = RegisterState::new();
        assert!(state.checkout().is_empty());
        assert!(state.purchases().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// N successful add cycles leave N entries, in order; checkout always
        /// empties the list.
        #[test]
        fn list_grows_by_one_per_add_cycle(prices in prop::collection::vec(0u32..100_000u32, 0..20)) {
            let mut state = RegisterState::new();
            for (i, price) in prices.iter().enumerate() {
                let product = Product::new(format!("item-{i}"), f64::from(*price)).unwrap();
                lookup_ok(&mut state, &i.to_string(), product);
                prop_assert!(state.confirm_add().is_some());
                // a second add without a new lookup does nothing
                prop_assert!(state.confirm_add().is_none());
            }

            prop_assert_eq!(state.purchases().len(), prices.len());
            for (i, (item, price)) in state.purchases().iter().zip(&prices).enumerate() {
                prop_assert_eq!(item.name(), format!("item-{i}"));
                prop_assert_eq!(item.price(), f64::from(*price));
            }

            let drained = state.checkout();
            prop_assert_eq!(drained.len(), prices.len());
            prop_assert_eq!(state.purchases().len(), 0);
        }

        /// Whatever order results arrive in, the pending product is the one
        /// from the last issued lookup.
        #[test]
        fn latest_issued_wins_for_any_arrival_order(
            count in 1usize..8,
            order in prop::collection::vec(any::<prop::sample::Index>(), 8),
        ) {
            let mut state = RegisterState::new();
            let mut tickets = Vec::new();
            for i in 0..count {
                state.set_code(format!("code-{i}"));
                tickets.push(state.begin_lookup().unwrap());
            }

            // shuffle arrival order deterministically from the generated indices
            let mut arrival: Vec<usize> = (0..count).collect();
            for (i, idx) in order.iter().enumerate().take(count) {
                let j = idx.index(count);
                arrival.swap(i, j);
            }

            for i in arrival {
                let product = Product::new(format!("p{i}"), i as f64).unwrap();
                state.complete_lookup(&tickets[i], Ok(product));
            }

            let pending = state.pending().cloned();
            prop_assert_eq!(pending.map(|p| p.name().to_string()), Some(format!("p{}", count - 1)));
            prop_assert_eq!(state.phase(), LookupPhase::PendingShown);
        }
    }
}
