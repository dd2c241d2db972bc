//! Built-in floor records used when no data file replaces them

use chrono::{DateTime, Duration, Utc};

use crate::core::{Alert, DispatchedItem, Machine, PowerState, Product};
use crate::utils::parse_day_month_year;

const AVATAR_PLACEHOLDER: &str = "/api/placeholder/40/40";

fn alert(id: u32, name: &str, message: &str, timestamp: &str, date: DateTime<Utc>) -> Alert {
    Alert {
        id,
        name: name.to_string(),
        message: message.to_string(),
        avatar: AVATAR_PLACEHOLDER.to_string(),
        timestamp: timestamp.to_string(),
        date,
    }
}

/// Two alerts raised today and one from the day before `now`
pub(super) fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(1, "Mr.Manager", "Machine 1 is under maintenance", "2 hours ago", now),
        alert(
            2,
            "Mr.john Doe",
            "Product A is not available in enough qty",
            "4 hours ago",
            now,
        ),
        alert(
            3,
            "Supervisor",
            "Inventory check required",
            "Yesterday at 3 PM",
            now - Duration::days(1),
        ),
    ]
}

pub(super) fn dispatched() -> Vec<DispatchedItem> {
    [
        (1, "A001", "Product A", 50, 1000.0, "2025-10-05"),
        (2, "B002", "Product B", 75, 1500.0, "2025-10-05"),
        (3, "C003", "Product C", 100, 2000.0, "2025-09-30"),
        (4, "D004", "Product D", 25, 500.0, "2025-09-29"),
        (5, "E005", "Product E", 150, 3000.0, "2025-09-28"),
    ]
    .into_iter()
    .map(|(id, product_id, product, quantity, cost, date)| DispatchedItem {
        id,
        product_id: product_id.to_string(),
        product: product.to_string(),
        quantity,
        cost,
        date: date.to_string(),
    })
    .collect()
}

pub(super) fn products() -> Vec<Product> {
    [
        ("A", "Milling", "15/06/2025", "20/06/2025"),
        ("B", "Cutting", "14/06/2025", "19/06/2025"),
        ("C", "Drilling", "13/06/2025", "18/06/2025"),
        ("D", "Milling", "12/06/2025", "17/06/2025"),
        ("E", "Finishing", "11/06/2025", "16/06/2025"),
    ]
    .into_iter()
    .map(|(id, operation, date, expiry)| Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        operation: operation.to_string(),
        date: date.to_string(),
        expiry_date: parse_day_month_year(expiry).ok(),
    })
    .collect()
}

pub(super) fn machines() -> Vec<Machine> {
    [
        (1, "Cutting MC/1", PowerState::On),
        (2, "Milling 1", PowerState::Off),
        (3, "Milling 2", PowerState::On),
        (4, "Drilling", PowerState::Off),
        (5, "CNC Finish", PowerState::On),
    ]
    .into_iter()
    .map(|(id, name, status)| Machine {
        id,
        name: name.to_string(),
        status,
    })
    .collect()
}
