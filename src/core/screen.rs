//! Per-screen view state for the tabbed screens

use chrono::NaiveDate;
use std::fmt;

use crate::core::dropdown::Dropdown;
use crate::core::products::{MachineOverview, classify_products, machine_overview};
use crate::core::types::{Machine, Product};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum AlertSection {
    #[default]
    Today,
    Past,
}

impl AlertSection {
    pub(crate) fn title(self) -> &'static str {
        match self {
            AlertSection::Today => "Today's Alerts",
            AlertSection::Past => "Past Alerts",
        }
    }

    pub(crate) fn empty_message(self) -> &'static str {
        match self {
            AlertSection::Today => "All systems are running smoothly",
            AlertSection::Past => "No historical alerts found",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PanelView {
    #[default]
    Live,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelFilter {
    Machine,
    ProductType,
}

impl fmt::Display for PanelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PanelFilter::Machine => "Machine/Process No",
            PanelFilter::ProductType => "Product Type",
        })
    }
}

/// What the work panel body shows
#[derive(Debug)]
pub(crate) enum PanelContent<'a> {
    Details(&'a Product),
    Products {
        title: &'static str,
        products: Vec<&'a Product>,
        empty_message: &'static str,
    },
    Machines {
        machines: &'a [Machine],
        overview: MachineOverview,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct WorkPanelState {
    pub(crate) view: PanelView,
    filter: Dropdown<PanelFilter>,
    filter_applied: bool,
    selected: Option<String>,
}

impl Default for WorkPanelState {
    fn default() -> Self {
        Self {
            view: PanelView::Live,
            filter: Dropdown::new(
                "filter",
                vec![PanelFilter::Machine, PanelFilter::ProductType],
                PanelFilter::Machine,
            ),
            filter_applied: false,
            selected: None,
        }
    }
}

impl WorkPanelState {
    /// Fresh panel opened on the given tab
    pub(crate) fn with_view(view: PanelView) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub(crate) fn apply_filter(&mut self, filter: PanelFilter) -> Result<(), AppError> {
        self.filter.choose(&filter.to_string())?;
        self.filter_applied = true;
        Ok(())
    }

    /// "See Details" on a product
    pub(crate) fn select_product(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Details win over the filter, which wins over the live/past tabs
    pub(crate) fn content<'a>(
        &self,
        products: &'a [Product],
        machines: &'a [Machine],
        today: NaiveDate,
    ) -> Result<PanelContent<'a>, AppError> {
        if let Some(id) = &self.selected {
            return products
                .iter()
                .find(|p| &p.id == id)
                .map(PanelContent::Details)
                .ok_or_else(|| AppError::UnknownProduct { id: id.clone() });
        }
        if self.filter_applied {
            return Ok(match self.filter.value() {
                PanelFilter::Machine => PanelContent::Machines {
                    machines,
                    overview: machine_overview(machines),
                },
                PanelFilter::ProductType => PanelContent::Products {
                    title: "Products",
                    products: products.iter().collect(),
                    empty_message: "No products found",
                },
            });
        }
        let buckets = classify_products(products, today);
        Ok(match self.view {
            PanelView::Live => PanelContent::Products {
                title: "Live Products",
                products: buckets.live,
                empty_message: "All products have completed their lifecycle",
            },
            PanelView::Past => PanelContent::Products {
                title: "Past Products",
                products: buckets.past,
                empty_message: "No completed products found",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PowerState;
    use crate::utils::parse_day_month_year;

    fn products() -> Vec<Product> {
        [("A", "20/06/2025"), ("E", "16/06/2025")]
            .iter()
            .map(|(id, expiry)| Product {
                id: id.to_string(),
                name: format!("Product {id}"),
                operation: "Milling".into(),
                date: "11/06/2025".into(),
                expiry_date: Some(parse_day_month_year(expiry).unwrap()),
            })
            .collect()
    }

    fn machines() -> Vec<Machine> {
        vec![
            Machine { id: 1, name: "Drilling".into(), status: PowerState::Off },
            Machine { id: 2, name: "CNC Finish".into(), status: PowerState::On },
        ]
    }

    fn today() -> NaiveDate {
        parse_day_month_year("17/06/2025").unwrap()
    }

    fn product_ids(content: &PanelContent<'_>) -> Vec<String> {
        match content {
            PanelContent::Products { products, .. } => {
                products.iter().map(|p| p.id.clone()).collect()
            }
            other => panic!("expected product list, got {other:?}"),
        }
    }

    #[test]
    fn default_shows_live_products() {
        let (p, m) = (products(), machines());
        let content = WorkPanelState::default().content(&p, &m, today()).unwrap();
        assert_eq!(product_ids(&content), vec!["A"]);
    }

    #[test]
    fn past_tab_shows_expired_products() {
        let (p, m) = (products(), machines());
        let state = WorkPanelState::with_view(PanelView::Past);
        let content = state.content(&p, &m, today()).unwrap();
        assert_eq!(product_ids(&content), vec!["E"]);
    }

    #[test]
    fn filter_overrides_past_tab() {
        let (p, m) = (products(), machines());
        let mut state = WorkPanelState::with_view(PanelView::Past);
        state.apply_filter(PanelFilter::ProductType).unwrap();
        let content = state.content(&p, &m, today()).unwrap();
        assert_eq!(product_ids(&content), vec!["A", "E"]);
    }

    #[test]
    fn machine_filter_shows_overview() {
        let (p, m) = (products(), machines());
        let mut state = WorkPanelState::default();
        state.apply_filter(PanelFilter::Machine).unwrap();
        match state.content(&p, &m, today()).unwrap() {
            PanelContent::Machines { machines, overview } => {
                assert_eq!(machines.len(), 2);
                assert_eq!(overview, MachineOverview { online: 1, offline: 1 });
            }
            other => panic!("expected machines, got {other:?}"),
        }
    }

    #[test]
    fn product_type_filter_lists_everything() {
        let (p, m) = (products(), machines());
        let mut state = WorkPanelState::default();
        state.apply_filter(PanelFilter::ProductType).unwrap();
        let content = state.content(&p, &m, today()).unwrap();
        assert_eq!(product_ids(&content), vec!["A", "E"]);
    }

    #[test]
    fn details_take_priority_over_filter() {
        let (p, m) = (products(), machines());
        let mut state = WorkPanelState::default();
        state.apply_filter(PanelFilter::Machine).unwrap();
        state.select_product("E");
        assert!(matches!(
            state.content(&p, &m, today()).unwrap(),
            PanelContent::Details(product) if product.id == "E"
        ));
    }

    #[test]
    fn unknown_product_details_is_error() {
        let (p, m) = (products(), machines());
        let mut state = WorkPanelState::default();
        state.select_product("Z");
        let err = state.content(&p, &m, today()).unwrap_err();
        assert_eq!(err.to_string(), "No product with id Z");
    }

    #[test]
    fn alert_section_messages() {
        assert_eq!(AlertSection::Today.empty_message(), "All systems are running smoothly");
        assert_eq!(AlertSection::Past.title(), "Past Alerts");
    }
}
