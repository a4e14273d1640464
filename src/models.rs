use serde::Deserialize;

use crate::time::TimeParts;

/// One row of the work session export. `duration` is absent for sessions the
/// platform logged without a time component. Extra columns in the export are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub work_date: String,
    pub duration: Option<String>,
    pub payout: String,
    pub pay_type: String,
}

#[derive(Debug, Clone)]
pub struct DailyTotal {
    pub work_date: String,
    pub time: TimeParts,
    pub payout: f64,
}

#[derive(Debug, Clone)]
pub struct EarningsSummary {
    pub days: Vec<DailyTotal>,
    pub reward_payout: f64,
}
