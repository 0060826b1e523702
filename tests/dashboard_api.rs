// tests/dashboard_api.rs

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use barbershop_dashboard::{
    config::{AppConfig, AppState},
    routes,
};
use common::{spawn_webhook, unreachable_webhook, Fixtures, Recorder};

fn state_for(base_url: String) -> AppState {
    let config = AppConfig {
        webhook_base_url: base_url,
        bind_addr: "127.0.0.1:0".into(),
        expenses_path: "despesas".into(),
    };
    AppState::new(&config).unwrap()
}

async fn app(fixtures: Fixtures, recorder: Recorder) -> Router {
    let base = spawn_webhook(fixtures, recorder).await;
    routes::router(state_for(base))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

fn new_appointment() -> Value {
    json!({
        "clientName": "Lucas",
        "clientPhone": "(11) 98765-4321",
        "serviceId": "1",
        "barberId": "1",
        "start": "2024-05-09T10:00:00"
    })
}

#[tokio::test]
async fn health_answers_ok() {
    let app = app(Fixtures::default(), Recorder::default()).await;
    let (status, body) = call(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn week_view_places_appointments_and_hides_canceled() {
    let app = app(Fixtures::default(), Recorder::default()).await;
    let (status, week) = call(&app, Method::GET, "/api/agenda/week?date=2024-05-08", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(week["previousAnchor"], "2024-05-01");
    assert_eq!(week["slots"].as_array().unwrap().len(), 20);

    let days = week["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-05-06");

    let monday = days[0]["appointments"].as_array().unwrap();
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0]["placement"]["rowStart"], 3);
    assert_eq!(monday[0]["placement"]["rowSpan"], 2);
    assert_eq!(monday[0]["style"]["label"], "Confirmado");
    assert_eq!(monday[1]["placement"]["rowStart"], 12);
    assert_eq!(monday[1]["placement"]["rowSpan"], 1);

    // o agendamento de terça está cancelado
    assert!(days[1]["appointments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn slot_click_and_detail_open_modals() {
    let app = app(Fixtures::default(), Recorder::default()).await;

    let (status, modal) = call(
        &app,
        Method::POST,
        "/api/agenda/slot-click",
        Some(json!({"date": "2024-05-07", "time": "14:30"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(modal, json!({"modal": "create", "start": "2024-05-07T14:30:00"}));

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/agenda/slot-click",
        Some(json!({"date": "2024-05-07", "time": "meio-dia"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, modal) = call(&app, Method::GET, "/api/agenda/appointments/10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(modal["modal"], "detail");
    assert_eq!(modal["appointment"]["clientName"], "Carlos");

    let (status, _) = call(&app, Method::GET, "/api/agenda/appointments/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_appointment_form_never_reaches_webhook() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let mut form = new_appointment();
    form["clientPhone"] = json!("11987654321");
    form["clientName"] = json!("");
    let (status, body) = call(&app, Method::POST, "/api/agenda/appointments", Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["client_phone"].is_array());
    assert!(body["details"]["client_name"].is_array());

    let mut form = new_appointment();
    form["barberId"] = json!("77");
    let (status, body) = call(&app, Method::POST, "/api/agenda/appointments", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["barber_id"][0], "Barbeiro não encontrado.");

    assert!(recorder.is_empty());
}

#[tokio::test]
async fn whitespace_only_fields_are_rejected_before_the_webhook() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let barber = json!({"name": "   ", "specialty": "Navalha"});
    let (status, body) = call(&app, Method::POST, "/api/barbers", Some(barber)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["name"][0], "Nome do barbeiro é obrigatório.");

    let mut form = new_appointment();
    form["clientName"] = json!(" \t ");
    let (status, body) = call(&app, Method::POST, "/api/agenda/appointments", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["client_name"].is_array());

    assert!(recorder.is_empty());
}

#[tokio::test]
async fn new_appointment_is_sent_as_pending_with_names() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let (status, created) =
        call(&app, Method::POST, "/api/agenda/appointments", Some(new_appointment())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "99");
    assert_eq!(created["end"], "2024-05-09T10:45:00");

    let sent = recorder.calls("agenda");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["Status"], "Pendente");
    assert_eq!(sent[0]["Data"], "2024-05-09");
    assert_eq!(sent[0]["Hora"], "10:00");
    assert_eq!(sent[0]["Servico"], "Corte");
    assert_eq!(sent[0]["Barbeiro"], "João");
    assert_eq!(sent[0]["ID_Servico"], 1);
}

#[tokio::test]
async fn confirm_and_cancel_replace_the_whole_record() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let (status, confirmed) = call(
        &app,
        Method::POST,
        "/api/agenda/appointments/11/confirm",
        Some(json!({"paymentMethod": "Dinheiro"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["status"], "confirmed");

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/agenda/appointments/11/confirm",
        Some(json!({"paymentMethod": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::POST, "/api/agenda/appointments/10/cancel", None).await;
    assert_eq!(status, StatusCode::OK);

    let sent = recorder.calls("agenda");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["ID"], 11);
    assert_eq!(sent[0]["Status"], "Confirmado");
    assert_eq!(sent[0]["Forma_Pagamento"], "Dinheiro");
    assert_eq!(sent[0]["Cliente"], "Marcos");
    assert_eq!(sent[1]["ID"], 10);
    assert_eq!(sent[1]["Status"], "Cancelado");
    assert_eq!(sent[1]["Forma_Pagamento"], "Pix");
}

#[tokio::test]
async fn financial_summary_combines_commissions_and_expenses() {
    let app = app(Fixtures::default(), Recorder::default()).await;
    let (status, summary) = call(
        &app,
        Method::GET,
        "/api/financial/summary?from=2024-05-06&to=2024-05-12",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["grossRevenue"]["current"].as_f64(), Some(35.0));
    assert_eq!(summary["totalCommissions"].as_f64(), Some(7.0));
    assert_eq!(summary["standaloneExpenses"].as_f64(), Some(10.0));
    assert_eq!(summary["totalExpenses"]["current"].as_f64(), Some(17.0));
    assert_eq!(summary["netProfit"]["current"].as_f64(), Some(18.0));
    assert_eq!(summary["previousRange"], json!({"from": "2024-04-29", "to": "2024-05-05"}));
    assert_eq!(summary["totalExpenses"]["previous"].as_f64(), Some(1500.0));
    assert_eq!(summary["dailySeries"].as_array().unwrap().len(), 7);
    assert_eq!(summary["revenueByPaymentMethod"][0]["method"], "Pix");
    assert_eq!(summary["expenses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn summary_ranges_are_checked_before_aggregating() {
    let app = app(Fixtures::default(), Recorder::default()).await;

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/financial/summary?from=2024-05-12&to=2024-05-06",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["to"].is_array());

    let (status, _) = call(
        &app,
        Method::GET,
        "/api/reports/summary?from=0001-01-01&to=9999-12-31",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::GET, "/api/financial/expenses?from=2024-01-01&to=2025-06-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Data no limite do calendário: o período anterior encosta no mínimo
    let (status, summary) = call(&app, Method::GET, "/api/financial/summary?from=-262143-01-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["dailySeries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn report_summary_counts_and_ranks() {
    let app = app(Fixtures::default(), Recorder::default()).await;
    let (status, report) = call(
        &app,
        Method::GET,
        "/api/reports/summary?from=2024-05-06&to=2024-05-12",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["totalAppointments"]["current"].as_f64(), Some(2.0));
    assert_eq!(report["totalAppointments"]["percentageChange"].as_f64(), Some(100.0));
    assert_eq!(report["topBarbers"][0]["name"], "João");
    assert_eq!(report["topBarbers"][1]["name"], "Pedro");
    let hours = report["busiestHours"].as_array().unwrap();
    assert_eq!(hours.len(), 11);
    assert_eq!(hours[1], json!({"hour": "10:00", "value": 1}));
}

#[tokio::test]
async fn barber_table_toggles_sort_direction() {
    let app = app(Fixtures::default(), Recorder::default()).await;
    let (status, table) = call(&app, Method::GET, "/api/barbers?sort=name&click=name", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["sort"], json!({"key": "name", "direction": "descending"}));
    assert_eq!(table["rows"][0]["name"], "Pedro");
    assert_eq!(table["rows"][1]["name"], "João");
}

#[tokio::test]
async fn deactivate_service_resends_record_as_inactive() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let (status, service) = call(&app, Method::POST, "/api/services/1/deactivate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(service["status"], "inactive");

    let sent = recorder.calls("servicos");
    assert_eq!(sent[0]["Status"], "Desativado");
    assert_eq!(sent[0]["Nome"], "Corte");

    let (status, _) = call(&app, Method::PUT, "/api/services/7", Some(json!({
        "name": "Corte", "price": 35, "duration": 30
    })))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expense_crud_goes_through_webhook() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let (status, body) = call(&app, Method::POST, "/api/financial/expenses", Some(json!({
        "description": "Toalhas", "amount": 0, "date": "2024-05-08", "category": "Lazer"
    })))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["amount"].is_array());
    assert!(body["details"]["category"].is_array());

    let (status, created) = call(&app, Method::POST, "/api/financial/expenses", Some(json!({
        "description": "Toalhas", "amount": 80.5, "date": "2024-05-08", "category": "Produtos"
    })))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "99");

    let (status, _) = call(&app, Method::DELETE, "/api/financial/expenses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(recorder.calls("despesas:delete"), vec![json!({"ID": "1"})]);

    let (status, listed) = call(
        &app,
        Method::GET,
        "/api/financial/expenses?from=2024-04-01&to=2024-05-31",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["date"], "2024-05-08");
    assert_eq!(listed[1]["category"], "Outros");
}

#[tokio::test]
async fn settings_load_and_validate_before_saving() {
    let recorder = Recorder::default();
    let app = app(Fixtures::default(), recorder.clone()).await;

    let (status, page) = call(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["state"], "loaded");
    assert_eq!(page["data"]["paymentMethods"], json!(["pix", "dinheiro"]));

    let mut form = page["data"].clone();
    form["paymentMethods"] = json!([]);
    let (status, body) = call(&app, Method::PUT, "/api/settings", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["payment_methods"].is_array());
    assert!(recorder.is_empty());
}

#[tokio::test]
async fn webhook_down_degrades_reads_and_fails_writes() {
    let app = routes::router(state_for(unreachable_webhook().await));

    let (status, table) = call(&app, Method::GET, "/api/barbers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["rows"], json!([]));

    let (status, page) = call(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["state"], "failed");

    let (status, _) = call(&app, Method::POST, "/api/barbers", Some(json!({
        "name": "Ana", "specialty": "Navalha"
    })))
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn concurrent_write_is_rejected_with_conflict() {
    let recorder = Recorder::default();
    let base = spawn_webhook(Fixtures::default(), recorder.clone()).await;
    let state = state_for(base);
    let app = routes::router(state.clone());

    let held = state.write_gate.try_acquire().unwrap();
    let (status, _) = call(&app, Method::POST, "/api/barbers", Some(json!({
        "name": "Ana", "specialty": "Navalha"
    })))
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // leituras não passam pelo bloqueio
    let (status, _) = call(&app, Method::GET, "/api/barbers", None).await;
    assert_eq!(status, StatusCode::OK);

    drop(held);
    let (status, _) = call(&app, Method::POST, "/api/barbers", Some(json!({
        "name": "Ana", "specialty": "Navalha"
    })))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(recorder.calls("barbers").len(), 1);
}
