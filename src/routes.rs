// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::write_gate::write_guard};

pub fn router(app_state: AppState) -> Router {
    let agenda_routes = Router::new()
        .route("/week", get(handlers::agenda::get_week))
        .route("/appointments", post(handlers::agenda::create_appointment))
        .route("/appointments/{id}", get(handlers::agenda::get_appointment))
        .route("/appointments/{id}/confirm", post(handlers::agenda::confirm_appointment))
        .route("/appointments/{id}/cancel", post(handlers::agenda::cancel_appointment));

    let barber_routes = Router::new()
        .route("/"
               ,get(handlers::barbers::list_barbers)
               .post(handlers::barbers::create_barber)
        )
        .route("/{id}", put(handlers::barbers::update_barber))
        .route("/{id}/deactivate", post(handlers::barbers::deactivate_barber));

    let service_routes = Router::new()
        .route("/"
               ,get(handlers::catalog::list_services)
               .post(handlers::catalog::create_service)
        )
        .route("/{id}", put(handlers::catalog::update_service))
        .route("/{id}/deactivate", post(handlers::catalog::deactivate_service));

    let financial_routes = Router::new()
        .route("/summary", get(handlers::financial::get_summary))
        .route("/expenses"
               ,get(handlers::financial::list_expenses)
               .post(handlers::financial::create_expense)
        )
        .route("/expenses/{id}"
               ,put(handlers::financial::update_expense)
               .delete(handlers::financial::delete_expense)
        );

    // Tudo que grava no webhook passa pelo write_guard (um por vez)
    let api_routes = Router::new()
        .nest("/agenda", agenda_routes)
        .nest("/barbers", barber_routes)
        .nest("/services", service_routes)
        .nest("/financial", financial_routes)
        .route("/reports/summary", get(handlers::reports::get_summary))
        .route("/settings"
               ,get(handlers::settings::get_settings)
               .put(handlers::settings::update_settings)
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            write_guard,
        ))
        // Clique na grade só abre modal: não grava nada
        .route("/agenda/slot-click", post(handlers::agenda::slot_click))
        .route("/health", get(|| async { "OK" }));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .with_state(app_state)
}
