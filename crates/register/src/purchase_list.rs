use serde::Serialize;
use tilldesk_core::Product;

/// Confirmed products of the current session, in insertion order.
///
/// No deduplication and no quantity aggregation: adding the same product twice
/// yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PurchaseList {
    items: Vec<Product>,
}

impl PurchaseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Empty the list, handing back what it held.
    pub fn drain(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.items)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a PurchaseList {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
