use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::leave_request::LeaveRequest;
use crate::utils::calendar::business_days_between;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("This leave request overlaps with an existing leave request")]
    Overlap,
    #[error("leave store lock poisoned")]
    Poisoned,
}

/// A validated request that has not been stored yet; `leave_days` is
/// computed at insertion time.
#[derive(Debug)]
pub struct LeaveDraft {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub reason: String,
}

/// In-memory, append-only collection of accepted leave requests.
/// All data is lost on process restart.
#[derive(Default)]
pub struct LeaveStore {
    records: Mutex<Vec<LeaveRequest>>,
}

/// Two inclusive ranges intersect iff a1 <= b2 && b1 <= a2. Only records
/// for the same employee are considered.
fn overlaps_existing(
    records: &[LeaveRequest],
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .any(|r| start <= r.end_date && r.start_date <= end)
}

impl LeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<LeaveRequest>>, StoreError> {
        self.records.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Runs the overlap scan and the append under one guard, so two
    /// concurrent creates for the same employee cannot both pass the check.
    pub fn insert_checked(&self, draft: LeaveDraft) -> Result<LeaveRequest, StoreError> {
        let mut records = self.guard()?;

        if overlaps_existing(&records, &draft.employee_id, draft.start_date, draft.end_date) {
            return Err(StoreError::Overlap);
        }

        let record = LeaveRequest {
            leave_days: business_days_between(draft.start_date, draft.end_date),
            employee_id: draft.employee_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            leave_type: draft.leave_type,
            reason: draft.reason,
        };
        records.push(record.clone());
        Ok(record)
    }

    /// All stored requests for the employee, in insertion order.
    pub fn list_by_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, StoreError> {
        let records = self.guard()?;
        Ok(records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
