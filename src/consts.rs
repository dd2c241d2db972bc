/// ISO calendar date used by dispatch records and CLI arguments: "2025-10-05"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day/month/year date used by work-panel products: "16/06/2025"
pub(crate) const DMY_FORMAT: &str = "%d/%m/%Y";
