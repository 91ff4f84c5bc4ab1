use crate::{api::leave_request, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/leave-requests")
                // /leave-requests
                .service(
                    web::resource("")
                        .route(web::post().to(leave_request::create_leave_request)),
                )
                // /leave-requests/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(leave_request::list_leave_requests)),
                ),
        ),
    );
}
