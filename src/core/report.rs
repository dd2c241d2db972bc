//! Report form validation and dispatch report assembly

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

use crate::consts::DATE_FORMAT;
use crate::core::dispatch::DispatchTotals;
use crate::core::dropdown::Dropdown;
use crate::core::types::{DateFilter, DispatchQuery, DispatchedItem};
use crate::error::AppError;
use crate::utils::{parse_date, parse_month, parse_week};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportKind {
    DateWise,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub(crate) const ALL: [ReportKind; 3] =
        [ReportKind::DateWise, ReportKind::Weekly, ReportKind::Monthly];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ReportKind::DateWise => "Date Wise",
            ReportKind::Weekly => "Weekly",
            ReportKind::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field values of the reports screen. Empty strings count as unset.
#[derive(Debug, Clone)]
pub(crate) struct ReportForm {
    kind: Dropdown<ReportKind>,
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
    pub(crate) week: Option<String>,
    pub(crate) month: Option<String>,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            kind: Dropdown::new("report type", ReportKind::ALL.to_vec(), ReportKind::DateWise),
            start: None,
            end: None,
            week: None,
            month: None,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ReportForm {
    pub(crate) fn kind(&self) -> ReportKind {
        *self.kind.value()
    }

    pub(crate) fn select_kind(&mut self, kind: ReportKind) -> Result<(), AppError> {
        self.kind.choose(kind.label())
    }

    /// Check the fields the selected report type needs
    pub(crate) fn validate(&self) -> Result<ReportRequest, AppError> {
        match self.kind() {
            ReportKind::DateWise => {
                let (Some(start), Some(end)) = (present(&self.start), present(&self.end)) else {
                    return Err(AppError::MissingField("Please select both start and end dates"));
                };
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                if start > end {
                    return Err(AppError::InvertedRange {
                        start: start.format(DATE_FORMAT).to_string(),
                        end: end.format(DATE_FORMAT).to_string(),
                    });
                }
                Ok(ReportRequest {
                    kind: ReportKind::DateWise,
                    key: format!(
                        "{}_{}",
                        start.format(DATE_FORMAT),
                        end.format(DATE_FORMAT)
                    ),
                    start,
                    end,
                })
            }
            ReportKind::Weekly => {
                let week =
                    present(&self.week).ok_or(AppError::MissingField("Please select a week"))?;
                let (start, end) = parse_week(week)?;
                Ok(ReportRequest {
                    kind: ReportKind::Weekly,
                    key: week.to_string(),
                    start,
                    end,
                })
            }
            ReportKind::Monthly => {
                let month =
                    present(&self.month).ok_or(AppError::MissingField("Please select a month"))?;
                let (start, end) = parse_month(month)?;
                Ok(ReportRequest {
                    kind: ReportKind::Monthly,
                    key: month.to_string(),
                    start,
                    end,
                })
            }
        }
    }
}

/// A validated report request covering `start..=end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportRequest {
    pub(crate) kind: ReportKind,
    /// Period as entered: `2025-W40`, `2025-10` or `start_end`
    pub(crate) key: String,
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl ReportRequest {
    pub(crate) fn range(&self) -> DateFilter {
        DateFilter::new(Some(self.start), Some(self.end))
    }

    pub(crate) fn query(&self) -> DispatchQuery {
        match self.kind {
            ReportKind::Monthly => DispatchQuery::Month {
                year: self.start.year(),
                month: self.start.month(),
            },
            ReportKind::DateWise | ReportKind::Weekly => DispatchQuery::Range(self.range()),
        }
    }

    /// File name a download of this report would be saved under
    pub(crate) fn artifact_name(&self) -> String {
        let kind = match self.kind {
            ReportKind::DateWise => "date-wise",
            ReportKind::Weekly => "weekly",
            ReportKind::Monthly => "monthly",
        };
        format!("dispatch-report-{kind}-{}.csv", self.key)
    }
}

#[derive(Debug)]
pub(crate) struct Report {
    pub(crate) request: ReportRequest,
    pub(crate) items: Vec<DispatchedItem>,
    /// Per-day totals keyed by ISO date
    pub(crate) daily: BTreeMap<String, DispatchTotals>,
    pub(crate) totals: DispatchTotals,
}

impl Report {
    pub(crate) fn build(request: ReportRequest, mut items: Vec<DispatchedItem>) -> Self {
        items.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        let mut by_day: BTreeMap<&str, Vec<&DispatchedItem>> = BTreeMap::new();
        for item in &items {
            by_day.entry(item.date.as_str()).or_default().push(item);
        }
        let daily = by_day
            .into_iter()
            .map(|(day, day_items)| (day.to_string(), DispatchTotals::from_items(day_items)))
            .collect();

        Self {
            totals: DispatchTotals::from_items(&items),
            request,
            items,
            daily,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn form(kind: ReportKind) -> ReportForm {
        let mut form = ReportForm::default();
        form.select_kind(kind).unwrap();
        form
    }

    fn item(id: u32, product_id: &str, quantity: i64, date: &str) -> DispatchedItem {
        DispatchedItem {
            id,
            product_id: product_id.to_string(),
            product: format!("Product {product_id}"),
            quantity,
            cost: quantity as f64 * 20.0,
            date: date.to_string(),
        }
    }

    #[test]
    fn default_kind_is_date_wise() {
        assert_eq!(ReportForm::default().kind(), ReportKind::DateWise);
    }

    #[test]
    fn date_wise_requires_both_dates() {
        let mut f = form(ReportKind::DateWise);
        f.start = Some("2025-10-01".into());
        let err = f.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please select both start and end dates");

        f.end = Some("   ".into());
        assert!(matches!(f.validate(), Err(AppError::MissingField(_))));
    }

    #[test]
    fn date_wise_rejects_inverted_range() {
        let mut f = form(ReportKind::DateWise);
        f.start = Some("2025-10-05".into());
        f.end = Some("2025-10-01".into());
        assert!(matches!(f.validate(), Err(AppError::InvertedRange { .. })));
    }

    #[test]
    fn date_wise_builds_inclusive_range() {
        let mut f = form(ReportKind::DateWise);
        f.start = Some("2025-09-29".into());
        f.end = Some("2025-10-05".into());
        let req = f.validate().unwrap();
        assert_eq!((req.start, req.end), (d(2025, 9, 29), d(2025, 10, 5)));
        assert_eq!(
            req.artifact_name(),
            "dispatch-report-date-wise-2025-09-29_2025-10-05.csv"
        );
    }

    #[test]
    fn weekly_requires_week() {
        let err = form(ReportKind::Weekly).validate().unwrap_err();
        assert_eq!(err.to_string(), "Please select a week");
    }

    #[test]
    fn weekly_resolves_iso_week() {
        let mut f = form(ReportKind::Weekly);
        f.week = Some("2025-W40".into());
        let req = f.validate().unwrap();
        assert_eq!(req.start, d(2025, 9, 29));
        assert_eq!(req.end, d(2025, 10, 5));
        assert_eq!(req.artifact_name(), "dispatch-report-weekly-2025-W40.csv");
        assert!(matches!(req.query(), DispatchQuery::Range(_)));
    }

    #[test]
    fn monthly_requires_month() {
        let err = form(ReportKind::Monthly).validate().unwrap_err();
        assert_eq!(err.to_string(), "Please select a month");
    }

    #[test]
    fn monthly_queries_by_month() {
        let mut f = form(ReportKind::Monthly);
        f.month = Some("2025-10".into());
        let req = f.validate().unwrap();
        assert_eq!(req.end, d(2025, 10, 31));
        assert_eq!(
            req.query(),
            DispatchQuery::Month {
                year: 2025,
                month: 10
            }
        );
    }

    #[test]
    fn monthly_rejects_bad_month() {
        let mut f = form(ReportKind::Monthly);
        f.month = Some("October".into());
        assert!(matches!(f.validate(), Err(AppError::InvalidMonth { .. })));
    }

    #[test]
    fn only_selected_kind_fields_are_checked() {
        let mut f = form(ReportKind::Monthly);
        f.month = Some("2025-10".into());
        f.start = Some("garbage".into());
        assert!(f.validate().is_ok());
    }

    #[test]
    fn report_groups_items_by_day() {
        let items = [
            item(2, "B", 75, "2025-10-05"),
            item(1, "A", 50, "2025-10-05"),
            item(3, "C", 100, "2025-09-30"),
        ];
        let request = ReportRequest {
            kind: ReportKind::Weekly,
            key: "2025-W40".into(),
            start: d(2025, 9, 29),
            end: d(2025, 10, 5),
        };
        let report = Report::build(request, items.to_vec());

        let ids: Vec<u32> = report.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily["2025-10-05"].total_quantity, 125);
        assert_eq!(report.totals.total_quantity, 225);
        assert_eq!(report.totals.total_cost, 4500.0);
        assert_eq!(report.totals.total_products, 3);
    }
}
