use comfy_table::{Cell, Color};
use std::fmt::Write;

use crate::core::{Alert, AlertSection};
use crate::output::format::{
    TableOptions, create_styled_table, csv_escape, header_cell, in_order, json_string,
    print_title, styled_cell,
};
use crate::utils::Timezone;

fn local_time(alert: &Alert, timezone: Timezone) -> String {
    timezone
        .to_fixed_offset(alert.date)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn section_key(section: AlertSection) -> &'static str {
    match section {
        AlertSection::Today => "today",
        AlertSection::Past => "past",
    }
}

pub(crate) fn print_alert_table(
    section: AlertSection,
    alerts: &[&Alert],
    timezone: Timezone,
    options: TableOptions,
) {
    if alerts.is_empty() {
        print_title(section.title(), None, options.use_color);
        println!("{}", section.empty_message());
        return;
    }
    print_title(
        section.title(),
        Some(&format!("{} alerts", alerts.len())),
        options.use_color,
    );

    let mut table = create_styled_table();
    let use_color = options.use_color;
    if options.compact {
        table.set_header(vec![
            header_cell("From", use_color),
            header_cell("Message", use_color),
            header_cell("When", use_color),
        ]);
    } else {
        table.set_header(vec![
            header_cell("", use_color),
            header_cell("From", use_color),
            header_cell("Message", use_color),
            header_cell("When", use_color),
            header_cell("Date", use_color),
        ]);
    }

    let badge = options.color(Color::Magenta);
    for alert in in_order(alerts.to_vec(), options.order) {
        if options.compact {
            table.add_row(vec![
                Cell::new(&alert.name),
                Cell::new(&alert.message),
                Cell::new(&alert.timestamp),
            ]);
        } else {
            table.add_row(vec![
                styled_cell(&alert.initials(), badge, true),
                Cell::new(&alert.name),
                Cell::new(&alert.message),
                Cell::new(&alert.timestamp),
                Cell::new(local_time(alert, timezone)),
            ]);
        }
    }

    println!("{table}");
}

pub(crate) fn output_alert_json(
    section: AlertSection,
    alerts: &[&Alert],
    timezone: Timezone,
    options: TableOptions,
) -> String {
    let rows: Vec<serde_json::Value> = in_order(alerts.to_vec(), options.order)
        .into_iter()
        .map(|alert| {
            serde_json::json!({
                "id": alert.id,
                "name": alert.name,
                "initials": alert.initials(),
                "message": alert.message,
                "avatar": alert.avatar,
                "timestamp": alert.timestamp,
                "date": timezone.to_fixed_offset(alert.date).to_rfc3339(),
            })
        })
        .collect();

    let mut output = serde_json::json!({
        "section": section_key(section),
        "title": section.title(),
        "count": rows.len(),
        "alerts": rows,
    });
    if alerts.is_empty() {
        output["message"] = serde_json::json!(section.empty_message());
    }
    json_string(&output)
}

pub(crate) fn output_alert_csv(
    alerts: &[&Alert],
    timezone: Timezone,
    options: TableOptions,
) -> String {
    let mut out = String::from("id,name,initials,message,timestamp,date\n");
    for alert in in_order(alerts.to_vec(), options.order) {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            alert.id,
            csv_escape(&alert.name),
            csv_escape(&alert.initials()),
            csv_escape(&alert.message),
            csv_escape(&alert.timestamp),
            timezone.to_fixed_offset(alert.date).to_rfc3339(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortOrder;
    use crate::output::NumberFormat;
    use chrono::{TimeZone, Utc};

    fn options(order: SortOrder) -> TableOptions {
        TableOptions {
            order,
            use_color: false,
            compact: false,
            number_format: NumberFormat::default(),
        }
    }

    fn alert(id: u32, name: &str, message: &str) -> Alert {
        Alert {
            id,
            name: name.to_string(),
            message: message.to_string(),
            avatar: String::new(),
            timestamp: "2 hours ago".to_string(),
            date: Utc.with_ymd_and_hms(2025, 10, 5, 8, 0, 0).unwrap(),
        }
    }

    fn utc() -> Timezone {
        Timezone::parse(Some("UTC")).unwrap()
    }

    #[test]
    fn json_lists_alerts_with_initials() {
        let a = alert(1, "Mr.Manager", "Machine 1 is under maintenance");
        let json: serde_json::Value = serde_json::from_str(&output_alert_json(
            AlertSection::Today,
            &[&a],
            utc(),
            options(SortOrder::Asc),
        ))
        .unwrap();
        assert_eq!(json["section"], "today");
        assert_eq!(json["count"], 1);
        assert_eq!(json["alerts"][0]["initials"], "M");
        assert_eq!(json["alerts"][0]["date"], "2025-10-05T08:00:00+00:00");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn json_empty_section_carries_message() {
        let json: serde_json::Value = serde_json::from_str(&output_alert_json(
            AlertSection::Past,
            &[],
            utc(),
            options(SortOrder::Asc),
        ))
        .unwrap();
        assert_eq!(json["message"], "No historical alerts found");
        assert_eq!(json["alerts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn csv_escapes_and_orders() {
        let a = alert(1, "Supervisor", "Check rack 3, aisle 2");
        let b = alert(2, "Mr.john Doe", "Low stock");
        let csv = output_alert_csv(&[&a, &b], utc(), options(SortOrder::Desc));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,name,initials,message,timestamp,date");
        assert!(lines[1].starts_with("2,Mr.john Doe,MD,Low stock,"));
        assert!(lines[2].contains("\"Check rack 3, aisle 2\""));
    }
}
