use std::fmt::Write;

use anyhow::{bail, Context};
use chrono::NaiveDate;

use crate::models::{DailyTotal, EarningsSummary};
use crate::time::TimeParts;

// Formats the export has been seen to use for workDate.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

fn parse_work_date(raw: &str) -> anyhow::Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }
    bail!("work date {raw:?} is not a calendar date");
}

/// Render the full earnings report. Days are ordered chronologically, then a
/// blank line separates the per-day section from the overall totals.
///
/// The report is built as one string so that nothing reaches stdout unless
/// every stage has succeeded.
pub fn render(summary: &EarningsSummary) -> anyhow::Result<String> {
    let mut days: Vec<(NaiveDate, &DailyTotal)> = Vec::with_capacity(summary.days.len());
    for day in &summary.days {
        let date = parse_work_date(&day.work_date)
            .with_context(|| format!("cannot sort day keyed by {:?}", day.work_date))?;
        days.push((date, day));
    }
    days.sort_by_key(|(date, _)| *date);

    let mut output = String::new();

    for (date, day) in &days {
        let _ = writeln!(
            output,
            "Date: {}, Hours: {}, Minutes: {}, Seconds: {}, Total Earned: ${:.2}",
            date.format("%Y-%m-%d"),
            day.time.hours,
            day.time.minutes,
            day.time.seconds,
            day.payout
        );
    }

    let overall_time = days
        .iter()
        .fold(TimeParts::ZERO, |acc, (_, day)| acc + day.time)
        .normalize();
    let overall_payout: f64 = days.iter().map(|(_, day)| day.payout).sum();

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Total Overall Time: {} hours, {} minutes, {} seconds",
        overall_time.hours, overall_time.minutes, overall_time.seconds
    );
    let _ = writeln!(output, "Total Overall Earnings: ${overall_payout:.2}");
    let _ = writeln!(
        output,
        "Total Earnings from missionReward and referralReward: ${:.2}",
        summary.reward_payout
    );

    Ok(output)
}
