use crate::api::leave_request::CreateLeaveRequest;
use crate::model::leave_request::LeaveRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Request Service API",
        version = "1.0.0",
        description = r#"
## Leave Request Service

Submit and query employee leave requests, held in an in-memory store.

### 🔹 Key Features
- **Submit leave**
  - Field, date-format, ordering and max-duration validation
  - Rejects ranges overlapping an existing request for the same employee
  - Leave days computed as the Monday-Friday dates in the range
- **Query leave**
  - List every stored request for an employee

### 📦 Response Format
- JSON-based RESTful responses
- Validation failures return the full ordered list of violations

All data lives in process memory and is lost on restart.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::create_leave_request,
        crate::api::leave_request::list_leave_requests,
    ),
    components(schemas(CreateLeaveRequest, LeaveRequest)),
    tags(
        (name = "Leave Requests", description = "Leave request submission and lookup APIs"),
    )
)]
pub struct ApiDoc;
