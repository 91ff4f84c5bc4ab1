use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An accepted leave request. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = "E1001")]
    pub employee_id: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "vacation")]
    pub leave_type: String,
    #[schema(example = "Family trip")]
    pub reason: String,
    /// Mon-Fri dates inside [start_date, end_date].
    #[schema(example = 5)]
    pub leave_days: u32,
}
