//! Shopping cart.
//!
//! The cart is a plain value: an insertion-ordered list of line items and a
//! flag for whether the cart panel is showing. Totals are computed from the
//! items on every call, so they can never disagree with them.
//!
//! Mutations return the [`CartNotice`] the user should see, if any. Every
//! operation is total: unknown product ids are ignored rather than reported.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Severity of a cart notice, used to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
}

/// A user-visible message describing what a cart operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    /// A product was added for the first time.
    Added { name: String },
    /// The quantity of a product already in the cart was incremented.
    AddedAnother { name: String },
    /// A line item was removed.
    Removed { name: String },
    /// Every line item was removed.
    Cleared,
}

impl CartNotice {
    /// Severity used for display.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        match self {
            Self::Added { .. } | Self::AddedAnother { .. } => NoticeLevel::Success,
            Self::Removed { .. } | Self::Cleared => NoticeLevel::Info,
        }
    }
}

impl fmt::Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { name } => write!(f, "Added {name} to your cart"),
            Self::AddedAnother { name } => write!(f, "Added another {name} to your cart"),
            Self::Removed { name } => write!(f, "Removed {name} from your cart"),
            Self::Cleared => f.write_str("Cart cleared"),
        }
    }
}

/// The shopping cart.
///
/// Holds at most one [`CartItem`] per product id, in the order products were
/// first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    #[serde(default)]
    is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart panel is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Quantity of `product_id` in the cart, or 0.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.find(product_id).map_or(0, |item| item.quantity)
    }

    /// Sum of all quantities.
    ///
    /// Widened to `u64` so any number of lines at `u32::MAX` still sums exactly.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity over all items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise appends it with quantity 1. Always opens the panel.
    pub fn add(&mut self, product: Product) -> CartNotice {
        self.is_open = true;

        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return CartNotice::AddedAnother { name: product.name };
        }

        let name = product.name.clone();
        self.items.push(CartItem {
            product,
            quantity: 1,
        });
        CartNotice::Added { name }
    }

    /// Remove the line for `product_id`.
    ///
    /// Returns `None` without changing anything if the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartNotice> {
        let index = self
            .items
            .iter()
            .position(|item| item.product.id == product_id)?;
        let removed = self.items.remove(index);
        Some(CartNotice::Removed {
            name: removed.product.name,
        })
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity below 1 removes the line, exactly like [`Cart::remove`].
    /// There is no upper bound. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> Option<CartNotice> {
        if quantity < 1 {
            return self.remove(product_id);
        }

        if let Some(item) = self.find_mut(product_id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        None
    }

    /// Remove every line.
    pub fn clear(&mut self) -> CartNotice {
        self.items.clear();
        CartNotice::Cleared
    }

    /// Show the cart panel.
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart panel.
    pub const fn close(&mut self) {
        self.is_open = false;
    }

    fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product.id == product_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: i32) -> Product {
        Catalog::fixture()
            .find(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    fn assert_totals_consistent(cart: &Cart) {
        let items: u64 = cart
            .items()
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum();
        assert_eq!(cart.total_items(), items);

        let price: Price = cart
            .items()
            .iter()
            .map(|item| item.product.price.times(item.quantity))
            .sum();
        assert_eq!(cart.total_price(), price);
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::zero());
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = Cart::new();
        for k in 1..=5 {
            cart.add(product(2));
            assert_eq!(cart.items().len(), 1);
            assert_eq!(cart.quantity_of(ProductId::new(2)), k);
        }
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_add_opens_panel_and_names_product() {
        let mut cart = Cart::new();

        let first = cart.add(product(3));
        assert!(cart.is_open());
        assert_eq!(first.to_string(), "Added Smart Watch to your cart");
        assert_eq!(first.level(), NoticeLevel::Success);

        cart.close();
        let second = cart.add(product(3));
        assert!(cart.is_open());
        assert_eq!(second.to_string(), "Added another Smart Watch to your cart");
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(5));
        cart.add(product(1));
        cart.add(product(5));
        cart.add(product(8));

        let ids: Vec<i32> = cart.items().iter().map(|i| i.product.id.as_i32()).collect();
        assert_eq!(ids, vec![5, 1, 8]);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(product(1)); // 1299.99
        cart.add(product(8)); // 49.99
        cart.add(product(8)); // 49.99

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().to_string(), "$1399.97");
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_names_item() {
        let mut cart = Cart::new();
        cart.add(product(4));
        cart.add(product(6));

        let notice = cart.remove(ProductId::new(4)).unwrap();
        assert_eq!(notice.to_string(), "Removed Professional Camera from your cart");
        assert_eq!(notice.level(), NoticeLevel::Info);
        assert_eq!(cart.items().len(), 1);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_missing_is_silent_noop() {
        let mut cart = Cart::new();
        cart.add(product(4));
        let before = cart.clone();

        assert!(cart.remove(ProductId::new(999)).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(product(7));

        assert!(cart.update_quantity(ProductId::new(7), 12).is_none());
        assert_eq!(cart.quantity_of(ProductId::new(7)), 12);
        assert_eq!(cart.total_items(), 12);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_total_items_does_not_saturate() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(2));
        cart.update_quantity(ProductId::new(1), i64::from(u32::MAX));
        cart.update_quantity(ProductId::new(2), i64::from(u32::MAX));

        assert_eq!(cart.total_items(), 2 * u64::from(u32::MAX));
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut updated = Cart::new();
        updated.add(product(1));
        updated.add(product(2));
        let mut removed = updated.clone();

        let via_update = updated.update_quantity(ProductId::new(1), 0);
        let via_remove = removed.remove(ProductId::new(1));

        assert_eq!(updated, removed);
        assert_eq!(via_update, via_remove);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.update_quantity(ProductId::new(1), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_ignored() {
        let mut cart = Cart::new();
        cart.add(product(1));
        let before = cart.clone();

        assert!(cart.update_quantity(ProductId::new(42), 5).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_has_no_upper_bound() {
        let mut cart = Cart::new();
        cart.add(product(8));
        cart.update_quantity(ProductId::new(8), i64::from(u32::MAX) + 10);
        assert_eq!(cart.quantity_of(ProductId::new(8)), u32::MAX);
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(2));
        cart.add(product(2));

        let notice = cart.clear();
        assert_eq!(notice.to_string(), "Cart cleared");
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::zero());
    }

    #[test]
    fn test_open_close() {
        let mut cart = Cart::new();
        cart.open();
        assert!(cart.is_open());
        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_mixed_sequence_keeps_invariants() {
        let mut cart = Cart::new();
        let ops: [(i32, i64); 8] = [(1, 0), (2, 3), (3, 1), (2, 0), (4, 2), (5, -1), (6, 9), (3, 4)];

        for (id, quantity) in ops {
            cart.add(product(id));
            cart.update_quantity(ProductId::new(id), quantity);
            assert_totals_consistent(&cart);

            let mut ids: Vec<i32> = cart.items().iter().map(|i| i.product.id.as_i32()).collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), len, "duplicate line for a product id");
        }
    }

    #[test]
    fn test_cart_survives_session_serialization() {
        let mut cart = Cart::new();
        cart.add(product(2));
        cart.add(product(2));

        let json = serde_json::to_value(&cart).unwrap();
        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total_price().to_string(), "$499.98");
    }
}
