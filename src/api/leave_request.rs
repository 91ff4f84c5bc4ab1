use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::leave_request::LeaveRequest;
use crate::store::{LeaveDraft, LeaveStore};

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_CONSECUTIVE_DAYS: i64 = 14;

/// Incoming payload. Every field is optional so that missing fields
/// accumulate into the validation report instead of failing deserialization.
#[derive(Deserialize, ToSchema)]
pub struct CreateLeaveRequest {
    #[schema(example = "E1001")]
    pub employee_id: Option<String>,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: Option<String>,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub end_date: Option<String>,
    #[schema(example = "vacation")]
    pub leave_type: Option<String>,
    #[schema(example = "Family trip")]
    pub reason: Option<String>,
}

/// First validation pass: field presence, date format, ordering, max span.
/// All violations accumulate into one ordered list; date-dependent checks
/// are skipped when either date is missing or unparsable. The overlap check
/// is a separate pass run by the store at insertion time.
fn validate(payload: &CreateLeaveRequest) -> Result<LeaveDraft, Vec<String>> {
    let mut details = Vec::new();

    let fields = [
        ("employee_id", &payload.employee_id),
        ("start_date", &payload.start_date),
        ("end_date", &payload.end_date),
        ("leave_type", &payload.leave_type),
        ("reason", &payload.reason),
    ];
    for (name, value) in fields {
        if value.is_none() {
            details.push(format!("Missing {name} in request"));
        }
    }

    let mut parse_failed = false;
    let mut parse = |value: &Option<String>| -> Option<NaiveDate> {
        let raw = value.as_deref()?;
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                parse_failed = true;
                None
            }
        }
    };
    let start_date = parse(&payload.start_date);
    let end_date = parse(&payload.end_date);
    if parse_failed {
        // one generic error, even when both dates are malformed
        details.push("Invalid date format. Use YYYY-MM-DD".to_string());
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            details.push("end_date must be after start_date".to_string());
        }
        // evaluated even when ordering failed; a reversed range yields a
        // negative span and never trips the limit
        if (end - start).num_days() + 1 > MAX_CONSECUTIVE_DAYS {
            details.push(format!("Maximum consecutive leave days is {MAX_CONSECUTIVE_DAYS}"));
        }
    }

    if !details.is_empty() {
        return Err(details);
    }

    Ok(LeaveDraft {
        employee_id: payload.employee_id.clone().unwrap_or_default(),
        start_date: start_date.unwrap_or_default(),
        end_date: end_date.unwrap_or_default(),
        leave_type: payload.leave_type.clone().unwrap_or_default(),
        reason: payload.reason.clone().unwrap_or_default(),
    })
}

/// Swagger doc for the create endpoint
#[utoipa::path(
    post,
    path = "/api/v1/leave-requests",
    request_body(
        content = CreateLeaveRequest,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request created",
         body = Object,
         example = json!({
            "message": "Leave request created successfully",
            "leave_request": {
                "employee_id": "E1001",
                "start_date": "2026-01-05",
                "end_date": "2026-01-09",
                "leave_type": "vacation",
                "reason": "Family trip",
                "leave_days": 5
            }
         })
        ),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "error": "VALIDATION_ERROR",
            "message": "Invalid request",
            "details": ["end_date must be after start_date"]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave Requests"
)]
pub async fn create_leave_request(
    store: web::Data<LeaveStore>,
    payload: web::Json<CreateLeaveRequest>,
) -> Result<impl Responder, ApiError> {
    let draft = validate(&payload).map_err(ApiError::Validation)?;

    // overlap check and append happen under one store guard
    let record = store.insert_checked(draft)?;

    tracing::info!(
        employee_id = %record.employee_id,
        leave_days = record.leave_days,
        "leave request created"
    );

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Leave request created successfully",
        "leave_request": record
    })))
}

/// Swagger doc for the per-employee listing endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave-requests/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee to list leave requests for")
    ),
    responses(
        (status = 200, description = "Stored leave requests for the employee",
         body = Object,
         example = json!({
            "employee_id": "E1001",
            "leave_requests": [{
                "employee_id": "E1001",
                "start_date": "2026-01-05",
                "end_date": "2026-01-09",
                "leave_type": "vacation",
                "reason": "Family trip",
                "leave_days": 5
            }]
         })
        ),
        (status = 404, description = "No leave requests stored", body = Object, example = json!({
            "message": "No leave requests found for this employee"
        }))
    ),
    tag = "Leave Requests"
)]
pub async fn list_leave_requests(
    store: web::Data<LeaveStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let employee_id = path.into_inner();
    let leave_requests: Vec<LeaveRequest> = store.list_by_employee(&employee_id)?;

    if leave_requests.is_empty() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "No leave requests found for this employee"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "employee_id": employee_id,
        "leave_requests": leave_requests
    })))
}
