use chrono::NaiveDate;
use comfy_table::{Cell, Color};
use std::fmt::Write;

use crate::consts::DMY_FORMAT;
use crate::core::{Machine, MachineOverview, PanelContent, PowerState, Product, is_live};
use crate::output::format::{
    TableOptions, create_styled_table, csv_escape, format_number, header_cell, in_order,
    json_string, print_title, styled_cell,
};

fn expiry_text(product: &Product) -> String {
    product
        .expiry_date
        .map(|d| d.format(DMY_FORMAT).to_string())
        .unwrap_or_default()
}

fn lifecycle(product: &Product, today: NaiveDate) -> &'static str {
    if is_live(product, today) { "Live" } else { "Past" }
}

fn status_color(status: PowerState, options: &TableOptions) -> Option<Color> {
    match status {
        PowerState::On => options.color(Color::Green),
        PowerState::Off => options.color(Color::DarkGrey),
    }
}

fn print_details(product: &Product, today: NaiveDate, options: TableOptions) {
    print_title(&product.name, None, options.use_color);
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Field", options.use_color),
        header_cell("Value", options.use_color),
    ]);
    let expiry = expiry_text(product);
    let rows = [
        ("Product ID", product.id.as_str()),
        ("Date", product.date.as_str()),
        ("Operation", product.operation.as_str()),
        ("Expiry", if expiry.is_empty() { "-" } else { expiry.as_str() }),
        ("Status", lifecycle(product, today)),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("Machine Assignment"),
        Cell::new(format!("Machine #{}", product.id)),
    ]);
    println!("{table}");
}

fn print_products(
    title: &str,
    products: &[&Product],
    empty_message: &str,
    today: NaiveDate,
    options: TableOptions,
) {
    if products.is_empty() {
        print_title(title, None, options.use_color);
        println!("{empty_message}");
        return;
    }
    print_title(
        title,
        Some(&format!("{} products", products.len())),
        options.use_color,
    );

    let use_color = options.use_color;
    let mut table = create_styled_table();
    if options.compact {
        table.set_header(vec![
            header_cell("ID", use_color),
            header_cell("Product", use_color),
            header_cell("Expiry", use_color),
        ]);
    } else {
        table.set_header(vec![
            header_cell("ID", use_color),
            header_cell("Product", use_color),
            header_cell("Operation", use_color),
            header_cell("Date", use_color),
            header_cell("Expiry", use_color),
            header_cell("Status", use_color),
        ]);
    }

    for product in in_order(products.to_vec(), options.order) {
        if options.compact {
            table.add_row(vec![
                Cell::new(&product.id),
                Cell::new(&product.name),
                Cell::new(expiry_text(product)),
            ]);
        } else {
            let live = is_live(product, today);
            let color = options.color(if live { Color::Green } else { Color::DarkGrey });
            table.add_row(vec![
                Cell::new(&product.id),
                Cell::new(&product.name),
                Cell::new(&product.operation),
                Cell::new(&product.date),
                Cell::new(expiry_text(product)),
                styled_cell(lifecycle(product, today), color, false),
            ]);
        }
    }
    println!("{table}");
}

fn print_machines(machines: &[Machine], overview: MachineOverview, options: TableOptions) {
    print_title("Machine/Process No", None, options.use_color);
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("No", use_color),
        header_cell("Machine", use_color),
        header_cell("Status", use_color),
    ]);
    for machine in in_order(machines.iter().collect(), options.order) {
        table.add_row(vec![
            Cell::new(machine.id),
            Cell::new(&machine.name),
            styled_cell(
                machine.status.label(),
                status_color(machine.status, &options),
                true,
            ),
        ]);
    }
    println!("{table}");
    println!();
    print_title("Status Overview", None, use_color);
    let fmt = options.number_format;
    println!(
        "Online: {}   Offline: {}",
        format_number(overview.online as i64, fmt),
        format_number(overview.offline as i64, fmt)
    );
}

pub(crate) fn print_workpanel(content: &PanelContent<'_>, today: NaiveDate, options: TableOptions) {
    match content {
        PanelContent::Details(product) => print_details(product, today, options),
        PanelContent::Products {
            title,
            products,
            empty_message,
        } => print_products(title, products, empty_message, today, options),
        PanelContent::Machines { machines, overview } => {
            print_machines(machines, *overview, options);
        }
    }
}

fn product_json(product: &Product, today: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "id": product.id,
        "name": product.name,
        "operation": product.operation,
        "date": product.date,
        "expiry_date": product.expiry_date.map(|d| d.format(DMY_FORMAT).to_string()),
        "status": lifecycle(product, today),
    })
}

pub(crate) fn output_workpanel_json(
    content: &PanelContent<'_>,
    today: NaiveDate,
    options: TableOptions,
) -> String {
    let output = match content {
        PanelContent::Details(product) => serde_json::json!({
            "view": "details",
            "product": product_json(product, today),
        }),
        PanelContent::Products {
            title,
            products,
            empty_message,
        } => {
            let rows: Vec<serde_json::Value> = in_order(products.clone(), options.order)
                .into_iter()
                .map(|p| product_json(p, today))
                .collect();
            let mut obj = serde_json::json!({
                "view": "products",
                "title": title,
                "products": rows,
            });
            if products.is_empty() {
                obj["message"] = serde_json::json!(empty_message);
            }
            obj
        }
        PanelContent::Machines { machines, overview } => {
            let rows: Vec<serde_json::Value> = in_order(machines.iter().collect(), options.order)
                .into_iter()
                .map(|m: &Machine| {
                    serde_json::json!({ "id": m.id, "name": m.name, "status": m.status.label() })
                })
                .collect();
            serde_json::json!({
                "view": "machines",
                "machines": rows,
                "online": overview.online,
                "offline": overview.offline,
            })
        }
    };
    json_string(&output)
}

pub(crate) fn output_workpanel_csv(
    content: &PanelContent<'_>,
    today: NaiveDate,
    options: TableOptions,
) -> String {
    let mut out = String::new();
    let products: Vec<&Product> = match content {
        PanelContent::Machines { machines, .. } => {
            out.push_str("id,name,status\n");
            for machine in in_order(machines.iter().collect::<Vec<_>>(), options.order) {
                let _ = writeln!(
                    out,
                    "{},{},{}",
                    machine.id,
                    csv_escape(&machine.name),
                    machine.status
                );
            }
            return out;
        }
        PanelContent::Details(product) => vec![*product],
        PanelContent::Products { products, .. } => in_order(products.clone(), options.order),
    };

    out.push_str("id,name,operation,date,expiry_date,status\n");
    for product in products {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_escape(&product.id),
            csv_escape(&product.name),
            csv_escape(&product.operation),
            csv_escape(&product.date),
            expiry_text(product),
            lifecycle(product, today),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortOrder;
    use crate::output::NumberFormat;
    use crate::utils::parse_day_month_year;

    fn options() -> TableOptions {
        TableOptions {
            order: SortOrder::Asc,
            use_color: false,
            compact: false,
            number_format: NumberFormat::default(),
        }
    }

    fn product(id: &str, expiry: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            operation: "Milling".into(),
            date: "15/06/2025".into(),
            expiry_date: expiry.map(|e| parse_day_month_year(e).unwrap()),
        }
    }

    fn today() -> NaiveDate {
        parse_day_month_year("17/06/2025").unwrap()
    }

    #[test]
    fn empty_product_list_carries_message() {
        let content = PanelContent::Products {
            title: "Live Products",
            products: vec![],
            empty_message: "All products have completed their lifecycle",
        };
        let json: serde_json::Value =
            serde_json::from_str(&output_workpanel_json(&content, today(), options())).unwrap();
        assert_eq!(json["view"], "products");
        assert_eq!(json["message"], "All products have completed their lifecycle");
    }

    #[test]
    fn details_json_reports_lifecycle() {
        let p = product("E", Some("16/06/2025"));
        let json: serde_json::Value = serde_json::from_str(&output_workpanel_json(
            &PanelContent::Details(&p),
            today(),
            options(),
        ))
        .unwrap();
        assert_eq!(json["product"]["status"], "Past");
        assert_eq!(json["product"]["expiry_date"], "16/06/2025");
    }

    #[test]
    fn machines_json_has_overview() {
        let machines = vec![
            Machine { id: 1, name: "Cutting MC/1".into(), status: PowerState::On },
            Machine { id: 2, name: "Milling 1".into(), status: PowerState::Off },
        ];
        let content = PanelContent::Machines {
            machines: &machines,
            overview: MachineOverview { online: 1, offline: 1 },
        };
        let json: serde_json::Value =
            serde_json::from_str(&output_workpanel_json(&content, today(), options())).unwrap();
        assert_eq!(json["machines"][1]["status"], "OFF");
        assert_eq!(json["online"], 1);
    }

    #[test]
    fn csv_leaves_missing_expiry_blank() {
        let a = product("A", None);
        let csv = output_workpanel_csv(
            &PanelContent::Products {
                title: "Products",
                products: vec![&a],
                empty_message: "",
            },
            today(),
            options(),
        );
        assert_eq!(csv.lines().nth(1), Some("A,Product A,Milling,15/06/2025,,Live"));
    }
}
