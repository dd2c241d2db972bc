//! Core module - record types and the derivations every screen is built from

mod alerts;
mod dispatch;
mod dropdown;
mod jobs;
mod products;
mod report;
mod screen;
pub(crate) mod types;

pub(crate) use alerts::classify_alerts;
pub(crate) use dispatch::{DispatchSection, DispatchTotals, DispatchView, dispatch_view};
pub(crate) use jobs::{JobForm, JobRequest};
pub(crate) use products::{MachineOverview, is_live};
pub(crate) use report::{Report, ReportForm, ReportKind, ReportRequest};
pub(crate) use screen::{AlertSection, PanelContent, PanelFilter, PanelView, WorkPanelState};
pub(crate) use types::{Alert, DispatchQuery, DispatchedItem, Job, Machine, PowerState, Product};
