use comfy_table::{Cell, Color};
use std::fmt::Write;

use crate::core::{DispatchSection, DispatchTotals, DispatchView, DispatchedItem};
use crate::output::format::{
    NumberFormat, TableOptions, cost_json_value, create_styled_table, csv_escape, format_cost,
    format_number, header_cell, in_order, json_string, print_title, right_cell, styled_cell,
};

pub(super) fn totals_json(totals: &DispatchTotals) -> serde_json::Value {
    serde_json::json!({
        "total_quantity": totals.total_quantity,
        "total_cost": cost_json_value(totals.total_cost),
        "total_products": totals.total_products,
    })
}

pub(super) fn item_json(item: &DispatchedItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "product_id": item.product_id,
        "product": item.product,
        "quantity": item.quantity,
        "cost": cost_json_value(item.cost),
        "date": item.date,
    })
}

fn print_summary(label: &str, totals: &DispatchTotals, fmt: NumberFormat, use_color: bool) {
    let (on, off) = if use_color {
        ("\x1b[1m", "\x1b[0m")
    } else {
        ("", "")
    };
    println!(
        "{label} Quantity: {on}{}{off}   {label} Total: {on}{}{off}   Products: {on}{}{off}",
        format_number(totals.total_quantity, fmt),
        format_cost(totals.total_cost, fmt),
        format_number(totals.total_products as i64, fmt),
    );
}

pub(crate) fn print_dispatch_table(view: &DispatchView<'_>, search: &str, options: TableOptions) {
    let fmt = options.number_format;
    let use_color = options.use_color;

    print_summary(view.summary_label(), &view.summary, fmt, use_color);
    println!();
    print_title(
        view.title(),
        Some(&format!("{} items", view.bucket_len)),
        use_color,
    );

    if view.items.is_empty() {
        if search.is_empty() {
            println!("No dispatched items");
        } else {
            println!("No dispatched items match \"{search}\"");
        }
        return;
    }

    let mut table = create_styled_table();
    let mut header = vec![
        header_cell("Product", use_color),
        header_cell("Product ID", use_color),
    ];
    if !options.compact {
        header.push(header_cell("Date", use_color));
    }
    header.push(header_cell("Qty", use_color));
    header.push(header_cell("Cost", use_color));
    table.set_header(header);

    let cost_color = options.color(Color::Green);
    for item in in_order(view.items.clone(), options.order) {
        let mut row = vec![Cell::new(&item.product), Cell::new(&item.product_id)];
        if !options.compact {
            row.push(Cell::new(&item.date));
        }
        row.push(right_cell(&format_number(item.quantity, fmt), None, false));
        row.push(right_cell(&format_cost(item.cost, fmt), cost_color, false));
        table.add_row(row);
    }

    // Totals cover the whole tab even when the search narrows the rows
    let cyan = options.color(Color::Cyan);
    let green = options.color(Color::Green);
    let totals = &view.bucket_totals;
    let mut row = vec![
        styled_cell("TOTAL", cyan, true),
        styled_cell(
            &format!("{} products", format_number(totals.total_products as i64, fmt)),
            cyan,
            false,
        ),
    ];
    if !options.compact {
        row.push(Cell::new(""));
    }
    row.push(right_cell(&format_number(totals.total_quantity, fmt), cyan, true));
    row.push(right_cell(&format_cost(totals.total_cost, fmt), green, true));
    table.add_row(row);

    println!("{table}");
}

pub(crate) fn output_dispatch_json(
    view: &DispatchView<'_>,
    search: &str,
    options: TableOptions,
) -> String {
    let section = match view.section {
        DispatchSection::Today => "today",
        DispatchSection::History => "history",
    };
    let items: Vec<serde_json::Value> = in_order(view.items.clone(), options.order)
        .into_iter()
        .map(item_json)
        .collect();
    let output = serde_json::json!({
        "section": section,
        "title": view.title(),
        "search": search,
        "item_count": view.bucket_len,
        "summary_label": view.summary_label(),
        "summary": totals_json(&view.summary),
        "totals": totals_json(&view.bucket_totals),
        "items": items,
    });
    json_string(&output)
}

pub(crate) fn output_dispatch_csv(items: &[&DispatchedItem], options: TableOptions) -> String {
    let mut out = String::from("id,product_id,product,quantity,cost,date\n");
    for item in in_order(items.to_vec(), options.order) {
        let _ = writeln!(
            out,
            "{},{},{},{},{:.2},{}",
            item.id,
            csv_escape(&item.product_id),
            csv_escape(&item.product),
            item.quantity,
            item.cost,
            csv_escape(&item.date),
        );
    }
    out
}
