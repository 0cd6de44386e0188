//! Wave scoring.
//!
//! Every strategy measures quality through this module so that results
//! from different strategies are directly comparable.
//!
//! For each SKU in the catalog the quantities of all orders in a group are
//! summed; the part that does not fill a whole case is the *remainder*.
//! The sum of remainders across SKUs is the group's penalty, and a group
//! with zero penalty is *perfect*.

use std::collections::BTreeMap;

use crate::model::{Order, Sku};

/// Per-SKU breakdown of a wave.
///
/// Always satisfies `cases * case_size + remainder == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkuDetail {
    /// Aggregate quantity across the wave.
    pub total: u64,
    /// Number of full cases.
    pub cases: u64,
    /// Units left over after full cases.
    pub remainder: u64,
}

/// Derived metrics for a group of orders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveStats {
    /// `true` iff every SKU total is a whole number of cases.
    pub is_perfect: bool,
    /// Sum of per-SKU remainders.
    pub remainder_score: u64,
    /// Breakdown keyed by SKU id, one entry per catalog SKU.
    pub sku_details: BTreeMap<String, SkuDetail>,
}

/// Splits `total` into full cases and a remainder.
fn split(total: u64, case_size: u32) -> SkuDetail {
    // Case sizes below one are outside the input contract; treat them as one.
    let case_size = u64::from(case_size.max(1));
    SkuDetail {
        total,
        cases: total / case_size,
        remainder: total % case_size,
    }
}

fn sku_total<'a, I>(orders: I, sku: &Sku) -> u64
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().map(|o| o.quantity_of(&sku.id)).sum()
}

/// Computes the full metrics of a group of orders against the catalog.
///
/// Items whose SKU is missing from the catalog do not contribute.
/// An empty group is perfect with zero penalty.
///
/// # Examples
///
/// ```
/// use u_wavebatch::metrics::evaluate;
/// use u_wavebatch::model::{Order, OrderItem, Sku};
///
/// let skus = vec![Sku::new("a", 10)];
/// let orders = vec![
///     Order::new("o1", vec![OrderItem::new("a", 3)]),
///     Order::new("o2", vec![OrderItem::new("a", 7)]),
/// ];
/// let stats = evaluate(&orders, &skus);
/// assert!(stats.is_perfect);
/// assert_eq!(stats.sku_details["a"].cases, 1);
/// ```
pub fn evaluate<'a, I>(orders: I, skus: &[Sku]) -> WaveStats
where
    I: IntoIterator<Item = &'a Order>,
    I::IntoIter: Clone,
{
    let orders = orders.into_iter();
    let mut sku_details = BTreeMap::new();
    let mut remainder_score = 0;

    for sku in skus {
        let detail = split(sku_total(orders.clone(), sku), sku.case_size);
        remainder_score += detail.remainder;
        sku_details.insert(sku.id.clone(), detail);
    }

    WaveStats {
        is_perfect: remainder_score == 0,
        remainder_score,
        sku_details,
    }
}

/// The scalar penalty of [`evaluate`], without building the detail map.
///
/// Strategies call this in their inner loops.
pub fn remainder_score<'a, I>(orders: I, skus: &[Sku]) -> u64
where
    I: IntoIterator<Item = &'a Order>,
    I::IntoIter: Clone,
{
    let orders = orders.into_iter();
    skus.iter()
        .map(|sku| split(sku_total(orders.clone(), sku), sku.case_size).remainder)
        .sum()
}

/// A committed group of orders together with its derived metrics.
///
/// The metrics are computed once, at construction, by [`evaluate`], and
/// cannot be altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wave {
    id: String,
    orders: Vec<Order>,
    stats: WaveStats,
}

impl Wave {
    /// Scores `orders` against `skus` and freezes the result.
    pub fn build(id: impl Into<String>, orders: Vec<Order>, skus: &[Sku]) -> Self {
        let stats = evaluate(&orders, skus);
        Self {
            id: id.into(),
            orders,
            stats,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn is_perfect(&self) -> bool {
        self.stats.is_perfect
    }

    pub fn remainder_score(&self) -> u64 {
        self.stats.remainder_score
    }

    pub fn sku_details(&self) -> &BTreeMap<String, SkuDetail> {
        &self.stats.sku_details
    }

    pub fn stats(&self) -> &WaveStats {
        &self.stats
    }

    /// Identifiers of the orders in this wave, in insertion order.
    pub fn order_ids(&self) -> impl Iterator<Item = &str> {
        self.orders.iter().map(|o| o.id.as_str())
    }
}
