mod alerts;
mod dispatched;
mod format;
mod job;
mod report;
mod workpanel;

pub(crate) use alerts::{output_alert_csv, output_alert_json, print_alert_table};
pub(crate) use dispatched::{output_dispatch_csv, output_dispatch_json, print_dispatch_table};
pub(crate) use format::{NumberFormat, TableOptions};
pub(crate) use job::{output_job_csv, output_job_json, print_job};
pub(crate) use report::{output_report_csv, output_report_json, print_report};
pub(crate) use workpanel::{output_workpanel_csv, output_workpanel_json, print_workpanel};
