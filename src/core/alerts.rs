//! Today/past split for the alerts screen

use chrono::NaiveDate;

use crate::core::types::Alert;
use crate::utils::Timezone;

#[derive(Debug, Default)]
pub(crate) struct AlertBuckets<'a> {
    pub(crate) today: Vec<&'a Alert>,
    pub(crate) past: Vec<&'a Alert>,
}

/// Split alerts by whether their calendar day (in `timezone`) is `today`.
/// Input order is preserved within each bucket.
pub(crate) fn classify_alerts<'a>(
    alerts: &'a [Alert],
    today: NaiveDate,
    timezone: Timezone,
) -> AlertBuckets<'a> {
    let (today_alerts, past): (Vec<_>, Vec<_>) = alerts
        .iter()
        .partition(|alert| timezone.local_date(alert.date) == today);
    AlertBuckets {
        today: today_alerts,
        past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn tz() -> Timezone {
        Timezone::Named(chrono_tz::UTC)
    }

    fn alert(id: u32, date: DateTime<Utc>) -> Alert {
        Alert {
            id,
            name: format!("sender {id}"),
            message: "check machine".to_string(),
            avatar: String::new(),
            timestamp: String::new(),
            date,
        }
    }

    fn noon() -> DateTime<Utc> {
        "2025-10-05T12:00:00Z".parse().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
    }

    #[test]
    fn today_and_yesterday_split_one_each() {
        let alerts = vec![alert(1, noon()), alert(2, noon() - Duration::days(1))];
        let buckets = classify_alerts(&alerts, today(), tz());
        assert_eq!(buckets.today.len(), 1);
        assert_eq!(buckets.past.len(), 1);
        assert_eq!(buckets.today[0].id, 1);
        assert_eq!(buckets.past[0].id, 2);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let buckets = classify_alerts(&[], today(), tz());
        assert!(buckets.today.is_empty());
        assert!(buckets.past.is_empty());
    }

    #[test]
    fn time_of_day_is_ignored() {
        let alerts = vec![
            alert(1, "2025-10-05T00:00:00Z".parse().unwrap()),
            alert(2, "2025-10-05T23:59:59Z".parse().unwrap()),
            alert(3, "2025-10-06T00:00:00Z".parse().unwrap()),
        ];
        let buckets = classify_alerts(&alerts, today(), tz());
        let ids: Vec<u32> = buckets.today.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(buckets.past[0].id, 3);
    }

    #[test]
    fn future_alerts_are_past_bucket() {
        let alerts = vec![alert(1, noon() + Duration::days(2))];
        let buckets = classify_alerts(&alerts, today(), tz());
        assert!(buckets.today.is_empty());
        assert_eq!(buckets.past.len(), 1);
    }

    #[test]
    fn day_boundary_follows_timezone() {
        // 20:00 UTC on the 4th is already the 5th in Kolkata (+05:30)
        let alerts = vec![alert(1, "2025-10-04T20:00:00Z".parse().unwrap())];
        let kolkata = Timezone::parse(Some("Asia/Kolkata")).unwrap();
        assert_eq!(classify_alerts(&alerts, today(), kolkata).today.len(), 1);
        assert_eq!(classify_alerts(&alerts, today(), tz()).past.len(), 1);
    }

    #[test]
    fn buckets_are_disjoint_and_cover_input() {
        let alerts: Vec<Alert> = (0..10)
            .map(|i| alert(i, noon() - Duration::hours(i64::from(i) * 7)))
            .collect();
        let buckets = classify_alerts(&alerts, today(), tz());
        assert_eq!(buckets.today.len() + buckets.past.len(), alerts.len());

        let mut ids: Vec<u32> = buckets
            .today
            .iter()
            .chain(buckets.past.iter())
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert!(buckets.today.iter().all(|t| !buckets.past.iter().any(|p| p.id == t.id)));
    }

    #[test]
    fn reclassifying_today_bucket_is_stable() {
        let alerts = vec![
            alert(1, noon()),
            alert(2, noon() - Duration::days(1)),
            alert(3, noon() - Duration::hours(3)),
        ];
        let first = classify_alerts(&alerts, today(), tz());
        let today_only: Vec<Alert> = first.today.iter().map(|a| (*a).clone()).collect();

        let second = classify_alerts(&today_only, today(), tz());
        assert_eq!(second.today.len(), today_only.len());
        assert!(second.past.is_empty());
    }
}
