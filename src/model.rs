//! Input data model: SKU catalog and orders.
//!
//! These types are supplied by the caller and are read-only to the engine.
//! Strategies regroup copies of [`Order`] values but never alter quantities.

use std::collections::BTreeSet;

/// A stock-keeping unit with its packing quantum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sku {
    /// Unique identifier, referenced by [`OrderItem::sku_id`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// Presentation color tag. Passed through untouched.
    pub color: String,

    /// Number of units in one full case. Expected to be at least 1.
    pub case_size: u32,
}

impl Sku {
    /// Creates a SKU with empty name and color.
    pub fn new(id: impl Into<String>, case_size: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            color: String::new(),
            case_size,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// One order line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderItem {
    pub sku_id: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(sku_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            sku_id: sku_id.into(),
            quantity,
        }
    }
}

/// A customer order: an identifier and its lines.
///
/// Line order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }

    /// Total quantity of `sku_id` on this order, summed over duplicate lines.
    pub fn quantity_of(&self, sku_id: &str) -> u64 {
        self.items
            .iter()
            .filter(|item| item.sku_id == sku_id)
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// The set of SKU identifiers this order touches.
    pub fn sku_set(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.sku_id.as_str()).collect()
    }

    /// Structural signature: sorted, de-duplicated SKU ids joined by `|`.
    ///
    /// Orders with the same SKU set share a signature regardless of
    /// quantities or line order.
    pub fn signature(&self) -> String {
        self.sku_set().into_iter().collect::<Vec<_>>().join("|")
    }
}
