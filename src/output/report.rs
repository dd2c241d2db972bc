use comfy_table::{Cell, Color};

use crate::consts::DATE_FORMAT;
use crate::core::{DispatchedItem, Report, ReportRequest};
use crate::output::dispatched::{item_json, output_dispatch_csv, totals_json};
use crate::output::format::{
    TableOptions, create_styled_table, format_cost, format_number, header_cell, in_order,
    json_string, print_title, right_cell, styled_cell,
};

fn period_text(request: &ReportRequest) -> String {
    format!(
        "{} to {}",
        request.start.format(DATE_FORMAT),
        request.end.format(DATE_FORMAT)
    )
}

pub(crate) fn print_report(report: &Report, options: TableOptions) {
    let request = &report.request;
    let fmt = options.number_format;
    let use_color = options.use_color;

    print_title(
        &format!("{} Report {}", request.kind, request.key),
        Some(&period_text(request)),
        use_color,
    );
    println!("File: {}", request.artifact_name());
    println!();

    if report.items.is_empty() {
        println!("No dispatches in this period");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Products", use_color),
        header_cell("Qty", use_color),
        header_cell("Cost", use_color),
    ]);
    let cost_color = options.color(Color::Green);
    let days: Vec<_> = report.daily.iter().collect();
    for (day, totals) in in_order(days, options.order) {
        table.add_row(vec![
            Cell::new(day),
            right_cell(&format_number(totals.total_products as i64, fmt), None, false),
            right_cell(&format_number(totals.total_quantity, fmt), None, false),
            right_cell(&format_cost(totals.total_cost, fmt), cost_color, false),
        ]);
    }
    let cyan = options.color(Color::Cyan);
    let green = options.color(Color::Green);
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_number(report.totals.total_products as i64, fmt), cyan, true),
        right_cell(&format_number(report.totals.total_quantity, fmt), cyan, true),
        right_cell(&format_cost(report.totals.total_cost, fmt), green, true),
    ]);
    println!("{table}");

    if options.compact {
        return;
    }

    let mut items = create_styled_table();
    items.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Product", use_color),
        header_cell("Product ID", use_color),
        header_cell("Qty", use_color),
        header_cell("Cost", use_color),
    ]);
    for item in in_order(report.items.iter().collect::<Vec<_>>(), options.order) {
        items.add_row(vec![
            Cell::new(&item.date),
            Cell::new(&item.product),
            Cell::new(&item.product_id),
            right_cell(&format_number(item.quantity, fmt), None, false),
            right_cell(&format_cost(item.cost, fmt), cost_color, false),
        ]);
    }
    println!("{items}");
}

pub(crate) fn output_report_json(report: &Report, options: TableOptions) -> String {
    let request = &report.request;
    let daily: Vec<serde_json::Value> = in_order(report.daily.iter().collect(), options.order)
        .into_iter()
        .map(|(day, totals)| {
            let mut obj = totals_json(totals);
            obj["date"] = serde_json::json!(day);
            obj
        })
        .collect();
    let items: Vec<serde_json::Value> =
        in_order(report.items.iter().collect::<Vec<_>>(), options.order)
            .into_iter()
            .map(item_json)
            .collect();
    let output = serde_json::json!({
        "kind": request.kind.label(),
        "period": request.key,
        "start": request.start.format(DATE_FORMAT).to_string(),
        "end": request.end.format(DATE_FORMAT).to_string(),
        "artifact": request.artifact_name(),
        "totals": totals_json(&report.totals),
        "daily": daily,
        "items": items,
    });
    json_string(&output)
}

/// Body of the downloadable report file
pub(crate) fn output_report_csv(report: &Report, options: TableOptions) -> String {
    let items: Vec<&DispatchedItem> = report.items.iter().collect();
    output_dispatch_csv(&items, options)
}
