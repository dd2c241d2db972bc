//! Record types held by the record store
//!
//! Every screen derives its view from these flat records.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine or job power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum PowerState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl PowerState {
    pub(crate) const ALL: [PowerState; 2] = [PowerState::On, PowerState::Off];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Production stage a job is entered at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Stage {
    Cutting,
    Milling,
    Drilling,
    Finishing,
}

impl Stage {
    pub(crate) const ALL: [Stage; 4] = [
        Stage::Cutting,
        Stage::Milling,
        Stage::Drilling,
        Stage::Finishing,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Stage::Cutting => "Cutting",
            Stage::Milling => "Milling",
            Stage::Drilling => "Drilling",
            Stage::Finishing => "Finishing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Machine {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) status: PowerState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Job {
    pub(crate) machine: String,
    /// Free-text product id, accepted as typed
    pub(crate) product: String,
    pub(crate) state: PowerState,
    pub(crate) stage: Stage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Alert {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) avatar: String,
    /// Human display text ("2 hours ago"), not used for classification
    #[serde(default)]
    pub(crate) timestamp: String,
    pub(crate) date: DateTime<Utc>,
}

impl Alert {
    /// First letter of each word of the sender name, uppercased
    pub(crate) fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DispatchedItem {
    pub(crate) id: u32,
    pub(crate) product_id: String,
    pub(crate) product: String,
    pub(crate) quantity: i64,
    pub(crate) cost: f64,
    /// ISO `YYYY-MM-DD`, compared as a string for the today bucket
    pub(crate) date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Product {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) operation: String,
    /// Display-only start date (`DD/MM/YYYY`)
    pub(crate) date: String,
    #[serde(default, with = "day_month_year")]
    pub(crate) expiry_date: Option<NaiveDate>,
}

/// Serde adapter for optional `DD/MM/YYYY` fields
mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::consts::DMY_FORMAT;
    use crate::utils::parse_day_month_year;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DMY_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_day_month_year(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Inclusive date range used by record fetches and reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}

/// Which dispatch records a fetch returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DispatchQuery {
    Range(DateFilter),
    Month { year: i32, month: u32 },
}

impl DispatchQuery {
    pub(crate) fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DispatchQuery::Range(filter) => filter.contains(date),
            DispatchQuery::Month { year, month } => {
                date.year() == *year && date.month() == *month
            }
        }
    }
}
