//! CLI subcommand definitions
//!
//! One subcommand per dashboard screen.

use clap::{Subcommand, ValueEnum};

use crate::core::{JobRequest, PanelFilter, ReportForm, ReportKind};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FilterArg {
    /// Machine/process grid with online/offline counts
    Machine,
    /// Every product regardless of lifecycle
    Product,
}

impl From<FilterArg> for PanelFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Machine => PanelFilter::Machine,
            FilterArg::Product => PanelFilter::ProductType,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum ReportKindArg {
    /// Inclusive start..end range (default)
    #[default]
    DateWise,
    /// One ISO week
    Weekly,
    /// One calendar month
    Monthly,
}

impl From<ReportKindArg> for ReportKind {
    fn from(arg: ReportKindArg) -> Self {
        match arg {
            ReportKindArg::DateWise => ReportKind::DateWise,
            ReportKindArg::Weekly => ReportKind::Weekly,
            ReportKindArg::Monthly => ReportKind::Monthly,
        }
    }
}

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show alerts (default)
    Alerts {
        /// Show past alerts instead of today's
        #[arg(long)]
        past: bool,
    },
    /// Show dispatched goods with totals
    Dispatched {
        /// Show dispatch history instead of today's dispatches
        #[arg(long)]
        history: bool,
        /// Narrow the listing by product name or id (case-insensitive)
        #[arg(short = 'q', long, value_name = "TEXT", default_value = "")]
        search: String,
    },
    /// Show live or past products and machine status
    Workpanel {
        /// Show products whose lifecycle has ended
        #[arg(long)]
        past: bool,
        /// Replace the live/past listing with a filtered view
        #[arg(long, value_enum)]
        filter: Option<FilterArg>,
        /// Show one product's details
        #[arg(long, value_name = "ID")]
        details: Option<String>,
    },
    /// Submit a job for a machine
    AddJob {
        /// Machine name (default: first machine)
        #[arg(long)]
        machine: Option<String>,
        /// Product id, free text (default: "Product A")
        #[arg(long)]
        product: Option<String>,
        /// ON or OFF (default: ON)
        #[arg(long)]
        state: Option<String>,
        /// Cutting, Milling, Drilling or Finishing (default: Milling)
        #[arg(long)]
        stage: Option<String>,
    },
    /// Request a dispatch report
    Report {
        /// Report type
        #[arg(long, value_enum, default_value = "date-wise")]
        kind: ReportKindArg,
        /// Start date for date-wise reports
        #[arg(long, value_name = "DATE")]
        start: Option<String>,
        /// End date for date-wise reports
        #[arg(long, value_name = "DATE")]
        end: Option<String>,
        /// ISO week for weekly reports (YYYY-Www)
        #[arg(long, value_name = "WEEK")]
        week: Option<String>,
        /// Month for monthly reports (YYYY-MM)
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Alerts { past: false }
    }
}

pub(crate) fn job_request(
    machine: Option<&str>,
    product: Option<&str>,
    state: Option<&str>,
    stage: Option<&str>,
) -> JobRequest {
    JobRequest {
        machine: machine.map(str::to_string),
        product: product.map(str::to_string),
        state: state.map(str::to_string),
        stage: stage.map(str::to_string),
    }
}

/// Fill the reports form the way the screen would: pick the type, then the fields
pub(crate) fn report_form(
    kind: ReportKindArg,
    start: Option<&str>,
    end: Option<&str>,
    week: Option<&str>,
    month: Option<&str>,
) -> Result<ReportForm, AppError> {
    let mut form = ReportForm::default();
    form.select_kind(kind.into())?;
    form.start = start.map(str::to_string);
    form.end = end.map(str::to_string);
    form.week = week.map(str::to_string);
    form.month = month.map(str::to_string);
    Ok(form)
}
