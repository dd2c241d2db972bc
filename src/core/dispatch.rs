//! Dispatched-goods buckets and totals
//!
//! Three buckets are derived from the dispatch log:
//! - today: date string equal to today's `YYYY-MM-DD`
//! - history: everything else
//! - monthly: parsed date in the current month and year, any day
//!
//! The search box only narrows the listed items. Totals and the item count
//! are always computed over the whole bucket.

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use crate::consts::DATE_FORMAT;
use crate::core::types::DispatchedItem;

/// Tab selected on the dispatched screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DispatchSection {
    #[default]
    Today,
    History,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct DispatchTotals {
    pub(crate) total_quantity: i64,
    pub(crate) total_cost: f64,
    /// Distinct product ids
    pub(crate) total_products: usize,
}

impl DispatchTotals {
    pub(crate) fn from_items<'a>(items: impl IntoIterator<Item = &'a DispatchedItem>) -> Self {
        let mut totals = DispatchTotals::default();
        let mut products = HashSet::new();
        for item in items {
            totals.total_quantity += item.quantity;
            totals.total_cost += item.cost;
            products.insert(item.product_id.as_str());
        }
        totals.total_products = products.len();
        totals
    }
}

#[derive(Debug, Default)]
pub(crate) struct DispatchBuckets<'a> {
    pub(crate) today: Vec<&'a DispatchedItem>,
    pub(crate) history: Vec<&'a DispatchedItem>,
    pub(crate) monthly: Vec<&'a DispatchedItem>,
}

impl DispatchBuckets<'_> {
    pub(crate) fn today_totals(&self) -> DispatchTotals {
        DispatchTotals::from_items(self.today.iter().copied())
    }

    pub(crate) fn monthly_totals(&self) -> DispatchTotals {
        DispatchTotals::from_items(self.monthly.iter().copied())
    }
}

fn in_same_month(date: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .is_ok_and(|d| d.year() == today.year() && d.month() == today.month())
}

pub(crate) fn classify_dispatches(items: &[DispatchedItem], today: NaiveDate) -> DispatchBuckets<'_> {
    let today_str = today.format(DATE_FORMAT).to_string();
    let (today_items, history): (Vec<_>, Vec<_>) =
        items.iter().partition(|item| item.date == today_str);
    let monthly = items
        .iter()
        .filter(|item| in_same_month(&item.date, today))
        .collect();
    DispatchBuckets {
        today: today_items,
        history,
        monthly,
    }
}

/// Case-insensitive substring match on product name or product id.
/// An empty term matches everything.
pub(crate) fn matches_search(item: &DispatchedItem, term: &str) -> bool {
    let needle = term.to_lowercase();
    item.product.to_lowercase().contains(&needle) || item.product_id.to_lowercase().contains(&needle)
}

/// Everything the dispatched screen shows for one tab
#[derive(Debug)]
pub(crate) struct DispatchView<'a> {
    pub(crate) section: DispatchSection,
    /// Bucket items that pass the search filter
    pub(crate) items: Vec<&'a DispatchedItem>,
    /// Unfiltered bucket size
    pub(crate) bucket_len: usize,
    /// Totals over the unfiltered bucket
    pub(crate) bucket_totals: DispatchTotals,
    /// Summary cards: today's totals on the today tab, monthly totals on history
    pub(crate) summary: DispatchTotals,
}

impl DispatchView<'_> {
    pub(crate) fn summary_label(&self) -> &'static str {
        match self.section {
            DispatchSection::Today => "Today's",
            DispatchSection::History => "Monthly",
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.section {
            DispatchSection::Today => "Today's Dispatches",
            DispatchSection::History => "Dispatched History",
        }
    }
}

pub(crate) fn dispatch_view<'a>(
    items: &'a [DispatchedItem],
    today: NaiveDate,
    section: DispatchSection,
    search: &str,
) -> DispatchView<'a> {
    let buckets = classify_dispatches(items, today);
    let (bucket, summary) = match section {
        DispatchSection::Today => (&buckets.today, buckets.today_totals()),
        DispatchSection::History => (&buckets.history, buckets.monthly_totals()),
    };
    DispatchView {
        section,
        items: bucket
            .iter()
            .copied()
            .filter(|item| matches_search(item, search))
            .collect(),
        bucket_len: bucket.len(),
        bucket_totals: DispatchTotals::from_items(bucket.iter().copied()),
        summary,
    }
}
