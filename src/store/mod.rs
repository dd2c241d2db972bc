//! In-memory record store and the backend contract the screens talk to
//!
//! Records live for one invocation. Screens only read them; job submissions
//! and report requests are logged and returned, never stored.

mod loader;
mod sample;

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use crate::consts::DATE_FORMAT;
use crate::core::{
    Alert, DispatchQuery, DispatchedItem, Job, JobForm, JobRequest, Machine, Product, Report,
    ReportForm,
};
use crate::error::AppError;

use loader::{RecordFile, read_record_file};

/// Operations a floor backend offers to the screens
pub(crate) trait FloorBackend {
    fn machines(&self) -> &[Machine];

    fn products(&self) -> &[Product];

    /// Every alert on record, in record order
    fn alert_log(&self) -> &[Alert];

    /// Every dispatch entry on record, in record order
    fn dispatch_log(&self) -> &[DispatchedItem];

    /// Alerts raised at or before `as_of`
    fn fetch_alerts(&self, as_of: DateTime<Utc>) -> Vec<Alert> {
        self.alert_log()
            .iter()
            .filter(|alert| alert.date <= as_of)
            .cloned()
            .collect()
    }

    /// Dispatch entries matching `query`. Entries whose date does not
    /// parse cannot be placed in any period and are skipped.
    fn fetch_dispatch_records(&self, query: DispatchQuery) -> Vec<DispatchedItem> {
        self.dispatch_log()
            .iter()
            .filter(|item| {
                NaiveDate::parse_from_str(&item.date, DATE_FORMAT)
                    .is_ok_and(|date| query.matches(date))
            })
            .cloned()
            .collect()
    }

    fn submit_job(&self, request: &JobRequest) -> Result<Job, AppError> {
        let mut form = JobForm::new(self.machines());
        form.fill(request)?;
        let job = form.submit();
        tracing::info!(
            machine = %job.machine,
            product = %job.product,
            state = %job.state,
            stage = %job.stage,
            "Adding job"
        );
        Ok(job)
    }

    fn request_report(&self, form: &ReportForm) -> Result<Report, AppError> {
        let request = form.validate()?;
        tracing::info!(
            kind = %request.kind,
            start = %request.start,
            end = %request.end,
            artifact = %request.artifact_name(),
            "Requesting report"
        );
        let items = self.fetch_dispatch_records(request.query());
        Ok(Report::build(request, items))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordStore {
    alerts: Vec<Alert>,
    dispatched: Vec<DispatchedItem>,
    products: Vec<Product>,
    machines: Vec<Machine>,
}

impl RecordStore {
    /// Built-in records; alert dates are relative to `now`
    pub(crate) fn sample(now: DateTime<Utc>) -> Self {
        Self {
            alerts: sample::alerts(now),
            dispatched: sample::dispatched(),
            products: sample::products(),
            machines: sample::machines(),
        }
    }

    /// Built-in records, overlaid with the collections of `data` if given
    pub(crate) fn load(data: Option<&Path>, now: DateTime<Utc>) -> Result<Self, AppError> {
        let mut store = Self::sample(now);
        if let Some(path) = data {
            store.apply(read_record_file(path)?);
        }
        store.validate()?;
        Ok(store)
    }

    fn apply(&mut self, file: RecordFile) {
        if let Some(alerts) = file.alerts {
            self.alerts = alerts;
        }
        if let Some(dispatched) = file.dispatched {
            self.dispatched = dispatched;
        }
        if let Some(products) = file.products {
            self.products = products;
        }
        if let Some(machines) = file.machines {
            self.machines = machines;
        }
    }

    /// Record ids must be unique within each collection
    fn validate(&self) -> Result<(), AppError> {
        ensure_unique("alert", &self.alerts, |a| a.id)?;
        ensure_unique("dispatch", &self.dispatched, |d| d.id)?;
        ensure_unique("product", &self.products, |p| p.id.as_str())?;
        ensure_unique("machine", &self.machines, |m| m.id)
    }
}

fn ensure_unique<'a, T, K, F>(
    collection: &'static str,
    records: &'a [T],
    key: F,
) -> Result<(), AppError>
where
    K: Eq + Hash + Display,
    F: Fn(&'a T) -> K,
{
    let mut seen = HashSet::new();
    for record in records {
        let id = key(record);
        if seen.contains(&id) {
            return Err(AppError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        seen.insert(id);
    }
    Ok(())
}

impl FloorBackend for RecordStore {
    fn machines(&self) -> &[Machine] {
        &self.machines
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn alert_log(&self) -> &[Alert] {
        &self.alerts
    }

    fn dispatch_log(&self) -> &[DispatchedItem] {
        &self.dispatched
    }
}
