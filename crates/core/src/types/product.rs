//! Product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product.
///
/// Products are immutable; they come from the compiled-in catalog and have
/// no create/update/delete lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable, unique identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// One-sentence blurb shown on product cards.
    pub summary: String,
    /// Full description shown on the detail page.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Category tag used for filtering.
    pub category: String,
}
