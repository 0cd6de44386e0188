//! Synthetic workloads for benchmarks, demos and property tests.
//!
//! The engine itself never generates data; callers supply catalogs and
//! orders. These helpers produce deliberately awkward quantities (rarely a
//! whole case) so that batching strategies have something to do.

use rand::seq::index;
use rand::Rng;

use crate::model::{Order, OrderItem, Sku};

const COLORS: [&str; 6] = [
    "#ef4444", "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899",
];
const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// How many lines each generated order carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Complexity {
    /// Exactly one line.
    Low,
    /// One or two lines, equally likely.
    #[default]
    Medium,
    /// Between one line and one line per catalog SKU.
    High,
}

/// Generates `count` SKUs with case sizes in `4..=11`.
pub fn generate_skus<R: Rng>(count: usize, rng: &mut R) -> Vec<Sku> {
    (0..count)
        .map(|i| {
            Sku::new(format!("sku-{i}"), rng.random_range(4..=11))
                .with_name(format!("Item {}", NAMES[i % NAMES.len()]))
                .with_color(COLORS[i % COLORS.len()])
        })
        .collect()
}

/// Generates `count` orders over `skus`.
///
/// Each order references distinct SKUs. Quantities are uniform in
/// `1..=case_size * 3 / 2`. Ids are `ORD-001`, `ORD-002`, ...
pub fn generate_orders<R: Rng>(
    count: usize,
    skus: &[Sku],
    complexity: Complexity,
    rng: &mut R,
) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let lines = line_count(skus.len(), complexity, rng);
            let items = index::sample(rng, skus.len(), lines)
                .into_iter()
                .map(|k| {
                    let sku = &skus[k];
                    let max = (sku.case_size.saturating_mul(3) / 2).max(1);
                    OrderItem::new(sku.id.clone(), rng.random_range(1..=max))
                })
                .collect();
            Order::new(format!("ORD-{:03}", i + 1), items)
        })
        .collect()
}

fn line_count<R: Rng>(catalog: usize, complexity: Complexity, rng: &mut R) -> usize {
    if catalog == 0 {
        return 0;
    }
    let wanted = match complexity {
        Complexity::Low => 1,
        Complexity::Medium => {
            if rng.random_bool(0.5) {
                1
            } else {
                2
            }
        }
        Complexity::High => rng.random_range(1..=catalog),
    };
    wanted.min(catalog)
}
