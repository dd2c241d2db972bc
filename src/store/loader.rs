//! Record file loading
//!
//! A record file is TOML, or JSON when the extension is `.json`. Each
//! collection it names replaces the built-in one; missing collections are
//! left alone.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::{Alert, DispatchedItem, Machine, Product};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordFile {
    pub(crate) alerts: Option<Vec<Alert>>,
    pub(crate) dispatched: Option<Vec<DispatchedItem>>,
    pub(crate) products: Option<Vec<Product>>,
    pub(crate) machines: Option<Vec<Machine>>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub(crate) fn read_record_file(path: &Path) -> Result<RecordFile, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };
    let file: RecordFile = parsed.map_err(|message| AppError::ParseData {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::debug!(
        path = %path.display(),
        alerts = file.alerts.as_ref().map(Vec::len),
        dispatched = file.dispatched.as_ref().map(Vec::len),
        products = file.products.as_ref().map(Vec::len),
        machines = file.machines.as_ref().map(Vec::len),
        "Loaded record file"
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn toml_file_with_one_collection() {
        let file = write_temp(
            ".toml",
            r#"
[[machines]]
id = 7
name = "Lathe 1"
status = "OFF"
"#,
        );
        let records = read_record_file(file.path()).unwrap();
        let machines = records.machines.unwrap();
        assert_eq!(machines[0].name, "Lathe 1");
        assert!(records.alerts.is_none());
        assert!(records.products.is_none());
    }

    #[test]
    fn json_file_by_extension() {
        let file = write_temp(
            ".json",
            r#"{"dispatched":[{"id":9,"productId":"Z900","product":"Product Z","quantity":3,"cost":60,"date":"2025-10-01"}]}"#,
        );
        let records = read_record_file(file.path()).unwrap();
        assert_eq!(records.dispatched.unwrap()[0].product_id, "Z900");
    }

    #[test]
    fn alert_dates_are_rfc3339_strings() {
        let file = write_temp(
            ".toml",
            r#"
[[alerts]]
id = 1
name = "Shift Lead"
message = "Coolant low"
date = "2025-10-05T06:30:00Z"
"#,
        );
        let alerts = read_record_file(file.path()).unwrap().alerts.unwrap();
        assert_eq!(alerts[0].initials(), "SL");
        assert_eq!(alerts[0].timestamp, "");
    }

    #[test]
    fn malformed_expiry_is_parse_error() {
        let file = write_temp(
            ".json",
            r#"{"products":[{"id":"A","name":"Product A","operation":"Milling","date":"15/06/2025","expiryDate":"2025-06-20"}]}"#,
        );
        let err = read_record_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ParseData { .. }));
        assert!(err.to_string().contains("2025-06-20"), "{err}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_record_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::ReadData { .. }));
    }
}
