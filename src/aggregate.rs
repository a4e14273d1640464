use std::collections::HashMap;

use anyhow::Context;

use crate::models::{DailyTotal, EarningsSummary, WorkRecord};
use crate::time::TimeParts;

/// Pay types counted toward the reward total.
pub const REWARD_PAY_TYPES: [&str; 2] = ["missionReward", "referralReward"];

/// Strip the currency symbol and thousands separators from a payout value and
/// parse it as a decimal amount. A payout that is not numeric after stripping
/// aborts the run.
pub fn parse_payout(raw: &str) -> anyhow::Result<f64> {
    raw.replace(['$', ','], "")
        .trim()
        .parse()
        .with_context(|| format!("payout {raw:?} is not a numeric amount"))
}

/// Group records by work date, sum durations and payouts per day, and total
/// the reward-type payouts across the whole export.
///
/// Duration triples are summed raw and normalized once per group. Grouping is
/// by exact value equality of the date field, so records with a blank date
/// form their own group.
pub fn aggregate(records: &[WorkRecord]) -> anyhow::Result<EarningsSummary> {
    let mut days: HashMap<String, DailyTotal> = HashMap::new();
    let mut reward_payout = 0.0;

    for record in records {
        let payout = parse_payout(&record.payout)?;
        let time = TimeParts::parse(record.duration.as_deref());

        let entry = days
            .entry(record.work_date.clone())
            .or_insert_with(|| DailyTotal {
                work_date: record.work_date.clone(),
                time: TimeParts::ZERO,
                payout: 0.0,
            });
        entry.time = entry.time + time;
        entry.payout += payout;

        if REWARD_PAY_TYPES.contains(&record.pay_type.as_str()) {
            reward_payout += payout;
        }
    }

    let days = days
        .into_values()
        .map(|day| DailyTotal {
            time: day.time.normalize(),
            ..day
        })
        .collect();

    Ok(EarningsSummary {
        days,
        reward_payout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(work_date: &str, duration: Option<&str>, payout: &str, pay_type: &str) -> WorkRecord {
        WorkRecord {
            work_date: work_date.to_string(),
            duration: duration.map(str::to_string),
            payout: payout.to_string(),
            pay_type: pay_type.to_string(),
        }
    }

    #[test]
    fn payout_strips_symbol_and_separators() {
        assert_eq!(parse_payout("$12.34").unwrap(), 12.34);
        assert_eq!(parse_payout("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_payout("7.50").unwrap(), 7.50);
    }

    #[test]
    fn non_numeric_payout_is_fatal() {
        assert!(parse_payout("pending").is_err());
        assert!(parse_payout("").is_err());
    }

    #[test]
    fn sums_and_normalizes_per_day() {
        let records = vec![
            record("2024-01-01", Some("1h 30m"), "$10.00", "regular"),
            record("2024-01-01", Some("45m"), "$5.00", "missionReward"),
        ];

        let summary = aggregate(&records).unwrap();
        assert_eq!(summary.days.len(), 1);
        let day = &summary.days[0];
        assert_eq!(day.time.hours, 2);
        assert_eq!(day.time.minutes, 15);
        assert_eq!(day.time.seconds, 0);
        assert!((day.payout - 15.0).abs() < 1e-9);
        assert!((summary.reward_payout - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reward_total_only_counts_recognized_pay_types() {
        let records = vec![
            record("2024-01-01", Some("1h"), "$10.00", "regular"),
            record("2024-01-01", None, "$3.00", "missionReward"),
            record("", None, "$4.00", "referralReward"),
            record("2024-01-02", Some("30m"), "$6.00", "overtimeBonus"),
        ];

        let summary = aggregate(&records).unwrap();
        assert!((summary.reward_payout - 7.0).abs() < 1e-9);
    }

    #[test]
    fn blank_date_forms_its_own_group() {
        let records = vec![
            record("2024-01-01", Some("1h"), "$10.00", "regular"),
            record("", None, "$2.00", "referralReward"),
        ];

        let summary = aggregate(&records).unwrap();
        assert_eq!(summary.days.len(), 2);
        let blank = summary.days.iter().find(|d| d.work_date.is_empty()).unwrap();
        assert_eq!(blank.time, TimeParts::ZERO);
        assert!((blank.payout - 2.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_duration_counts_as_zero_time_but_keeps_payout() {
        let records = vec![
            record("2024-01-01", Some("n/a"), "$8.00", "regular"),
            record("2024-01-01", Some("20m"), "$2.00", "regular"),
        ];

        let summary = aggregate(&records).unwrap();
        let day = &summary.days[0];
        assert_eq!(day.time.minutes, 20);
        assert!((day.payout - 10.0).abs() < 1e-9);
    }

    #[test]
    fn bad_payout_aborts_aggregation() {
        let records = vec![record("2024-01-01", Some("1h"), "oops", "regular")];
        assert!(aggregate(&records).is_err());
    }

    #[test]
    fn per_day_totals_renormalize_to_the_raw_grand_total() {
        let records = vec![
            record("2024-01-01", Some("50m 70s"), "$1.00", "regular"),
            record("2024-01-01", Some("40m"), "$1.00", "regular"),
            record("2024-01-02", Some("1h 95m"), "$1.00", "regular"),
        ];

        let summary = aggregate(&records).unwrap();
        let from_days = summary
            .days
            .iter()
            .fold(TimeParts::ZERO, |acc, day| acc + day.time)
            .normalize();
        let from_records = records
            .iter()
            .fold(TimeParts::ZERO, |acc, r| {
                acc + TimeParts::parse(r.duration.as_deref())
            })
            .normalize();
        assert_eq!(from_days, from_records);
    }
}
