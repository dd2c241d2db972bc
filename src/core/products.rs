//! Work panel derivations: product lifecycle and machine overview

use chrono::NaiveDate;

use crate::core::types::{Machine, PowerState, Product};

#[derive(Debug, Default)]
pub(crate) struct ProductBuckets<'a> {
    pub(crate) live: Vec<&'a Product>,
    pub(crate) past: Vec<&'a Product>,
}

/// A product is live until the day after its expiry date. Products without
/// an expiry date never leave the live bucket.
pub(crate) fn is_live(product: &Product, today: NaiveDate) -> bool {
    product.expiry_date.is_none_or(|expiry| expiry >= today)
}

pub(crate) fn classify_products(products: &[Product], today: NaiveDate) -> ProductBuckets<'_> {
    let (live, past): (Vec<_>, Vec<_>) = products.iter().partition(|p| is_live(p, today));
    ProductBuckets { live, past }
}

/// Online/offline counts shown under the machine grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MachineOverview {
    pub(crate) online: usize,
    pub(crate) offline: usize,
}

pub(crate) fn machine_overview(machines: &[Machine]) -> MachineOverview {
    machines
        .iter()
        .fold(MachineOverview::default(), |mut acc, m| {
            match m.status {
                PowerState::On => acc.online += 1,
                PowerState::Off => acc.offline += 1,
            }
            acc
        })
}
