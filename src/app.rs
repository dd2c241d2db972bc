use chrono::{DateTime, NaiveDate, Utc};

use crate::cli::{Cli, Commands, job_request, report_form};
use crate::cli::commands::{FilterArg, ReportKindArg};
use crate::core::{
    AlertSection, DispatchSection, PanelView, WorkPanelState, classify_alerts, dispatch_view,
};
use crate::error::AppError;
use crate::output::{
    TableOptions, output_alert_csv, output_alert_json, output_dispatch_csv, output_dispatch_json,
    output_job_csv, output_job_json, output_report_csv, output_report_json,
    output_workpanel_csv, output_workpanel_json, print_alert_table, print_dispatch_table,
    print_job, print_report, print_workpanel,
};
use crate::store::FloorBackend;
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn emit(text: &str) {
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) backend: &'a dyn FloorBackend,
    pub(crate) timezone: Timezone,
    /// Calendar day every "today" comparison uses
    pub(crate) today: NaiveDate,
    pub(crate) now: DateTime<Utc>,
    pub(crate) options: TableOptions,
}

impl CommandContext<'_> {
    fn format(&self) -> OutputFormat {
        if self.cli.json {
            OutputFormat::Json
        } else if self.cli.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Table
        }
    }
}

fn handle_alerts(past: bool, ctx: &CommandContext<'_>) {
    let log = ctx.backend.alert_log();
    let raised = ctx.backend.fetch_alerts(ctx.now).len();
    if raised < log.len() {
        tracing::debug!(later = log.len() - raised, "Alerts dated after the reference time");
    }
    let buckets = classify_alerts(log, ctx.today, ctx.timezone);
    let (section, listed) = if past {
        (AlertSection::Past, &buckets.past)
    } else {
        (AlertSection::Today, &buckets.today)
    };
    tracing::debug!(
        today = buckets.today.len(),
        past = buckets.past.len(),
        "Classified alerts"
    );
    match ctx.format() {
        OutputFormat::Json => emit(&output_alert_json(section, listed, ctx.timezone, ctx.options)),
        OutputFormat::Csv => emit(&output_alert_csv(listed, ctx.timezone, ctx.options)),
        OutputFormat::Table => print_alert_table(section, listed, ctx.timezone, ctx.options),
    }
}

fn handle_dispatched(history: bool, search: &str, ctx: &CommandContext<'_>) {
    let section = if history {
        DispatchSection::History
    } else {
        DispatchSection::Today
    };
    let view = dispatch_view(ctx.backend.dispatch_log(), ctx.today, section, search);
    match ctx.format() {
        OutputFormat::Json => emit(&output_dispatch_json(&view, search, ctx.options)),
        OutputFormat::Csv => emit(&output_dispatch_csv(&view.items, ctx.options)),
        OutputFormat::Table => print_dispatch_table(&view, search, ctx.options),
    }
}

fn handle_workpanel(
    past: bool,
    filter: Option<FilterArg>,
    details: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let view = if past { PanelView::Past } else { PanelView::Live };
    let mut state = WorkPanelState::with_view(view);
    if let Some(filter) = filter {
        state.apply_filter(filter.into())?;
    }
    if let Some(id) = details {
        state.select_product(id);
    }
    let content = state.content(ctx.backend.products(), ctx.backend.machines(), ctx.today)?;
    match ctx.format() {
        OutputFormat::Json => emit(&output_workpanel_json(&content, ctx.today, ctx.options)),
        OutputFormat::Csv => emit(&output_workpanel_csv(&content, ctx.today, ctx.options)),
        OutputFormat::Table => print_workpanel(&content, ctx.today, ctx.options),
    }
    Ok(())
}

fn handle_add_job(
    machine: Option<&str>,
    product: Option<&str>,
    state: Option<&str>,
    stage: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let job = ctx
        .backend
        .submit_job(&job_request(machine, product, state, stage))?;
    match ctx.format() {
        OutputFormat::Json => emit(&output_job_json(&job)),
        OutputFormat::Csv => emit(&output_job_csv(&job)),
        OutputFormat::Table => print_job(&job, ctx.options),
    }
    Ok(())
}

fn handle_report(
    kind: ReportKindArg,
    start: Option<&str>,
    end: Option<&str>,
    week: Option<&str>,
    month: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let form = report_form(kind, start, end, week, month)?;
    let report = ctx.backend.request_report(&form)?;
    match ctx.format() {
        OutputFormat::Json => emit(&output_report_json(&report, ctx.options)),
        OutputFormat::Csv => emit(&output_report_csv(&report, ctx.options)),
        OutputFormat::Table => print_report(&report, ctx.options),
    }
    Ok(())
}

/// Run one screen. No subcommand shows the alerts screen.
pub(crate) fn handle_command(
    command: Option<&Commands>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let default = Commands::default();
    match command.unwrap_or(&default) {
        Commands::Alerts { past } => {
            handle_alerts(*past, ctx);
            Ok(())
        }
        Commands::Dispatched { history, search } => {
            handle_dispatched(*history, search, ctx);
            Ok(())
        }
        Commands::Workpanel {
            past,
            filter,
            details,
        } => handle_workpanel(*past, *filter, details.as_deref(), ctx),
        Commands::AddJob {
            machine,
            product,
            state,
            stage,
        } => handle_add_job(
            machine.as_deref(),
            product.as_deref(),
            state.as_deref(),
            stage.as_deref(),
            ctx,
        ),
        Commands::Report {
            kind,
            start,
            end,
            week,
            month,
        } => handle_report(
            *kind,
            start.as_deref(),
            end.as_deref(),
            week.as_deref(),
            month.as_deref(),
            ctx,
        ),
    }
}
