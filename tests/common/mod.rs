// tests/common/mod.rs
//
// Webhook falso em processo: responde com fixtures e grava o que recebe.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<(String, Value)>>>);

impl Recorder {
    fn push(&self, name: &str, body: Value) {
        self.0.lock().unwrap().push((name.to_string(), body));
    }

    pub fn calls(&self, name: &str) -> Vec<Value> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// `None` faz o recurso responder 500.
#[derive(Clone)]
pub struct Fixtures {
    pub servicos: Option<Value>,
    pub barbers: Option<Value>,
    pub agenda: Option<Value>,
    pub config: Option<Value>,
    pub despesas: Option<Value>,
    pub fail_writes: bool,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            servicos: Some(servicos()),
            barbers: Some(barbers()),
            agenda: Some(agenda()),
            config: Some(config()),
            despesas: Some(despesas()),
            fail_writes: false,
        }
    }
}

pub fn servicos() -> Value {
    json!([
        {"ID": 1, "Nome": "Corte", "Preço": "35,00", "Duração (min)": 45, "Status": "Ativo"},
        {"ID": 2, "Nome": "Barba", "Preço": 25, "Duração (min)": "30", "Status": "Desativado"}
    ])
}

pub fn barbers() -> Value {
    json!([
        {"ID": 1, "Nome": "João", "Especialidade": "Corte", "Status": "Ativo", "Observacoes": "", "Comissao": 20},
        {"ID": "2", "Nome": "Pedro", "Especialidade": "Barba", "Status": "Inativo"}
    ])
}

pub fn agenda() -> Value {
    json!([
        {
            "ID": 10, "Data": "2024-05-06", "Hora": "10:00",
            "Cliente": "Carlos", "Telefone_Cliente": "(11) 98765-4321",
            "ID_Servico": 1, "Servico": "Corte", "ID_Barbeiro": 1, "Barbeiro": "João",
            "Status": "Confirmado", "Forma_Pagamento": "Pix"
        },
        {
            "ID": 11, "Data": "2024-05-06", "Hora": "14:30",
            "Cliente": "Marcos", "Telefone_Cliente": "(11) 91234-5678",
            "ID_Servico": 99, "Servico": "Pigmentação", "ID_Barbeiro": 2, "Barbeiro": "Pedro",
            "Status": "Pendente"
        },
        {
            "ID": 12, "Data": "2024-05-07", "Hora": "11:00",
            "Cliente": "Rafael", "Telefone_Cliente": "(11) 90000-0000",
            "ID_Servico": 2, "Servico": "Barba", "ID_Barbeiro": 1, "Barbeiro": "João",
            "Status": "Cancelado"
        },
        {
            "ID": 13, "Data": "07/05/2024", "Hora": "11:00",
            "Cliente": "Sem data", "ID_Servico": 1, "ID_Barbeiro": 1, "Status": "Pendente"
        }
    ])
}

pub fn config() -> Value {
    json!([{
        "Nome_Barbearia": "AlphaClub",
        "Telefone_Principal": "(11) 99999-9999",
        "Endereco": "Rua das Tesouras, 123",
        "Horario_Funcionamento": "Seg a Sáb, 9h às 20h",
        "Formas_Pagamento": "Pix, Dinheiro, Cheque",
        "Responder_Audio": "Sim",
        "Enviar_Reacoes": "não"
    }])
}

pub fn despesas() -> Value {
    json!([
        {"ID": 1, "Descricao": "Pomadas", "Valor": "10,00", "Data": "2024-05-08", "Categoria": "Produtos"},
        {"ID": 2, "Descricao": "Aluguel", "Valor": 1500, "Data": "2024-04-30", "Categoria": "Aluguel"},
        {"ID": 3, "Descricao": "Sem data", "Valor": 5, "Data": "ontem", "Categoria": "Outros"}
    ])
}

fn reply(data: Option<Value>) -> Response {
    match data {
        Some(value) => Json(value).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

// Eco no formato do webhook: lista com o registro gravado (ID 99 se novo)
fn echo(mut body: Value) -> Response {
    if body.get("ID").is_none() {
        body["ID"] = json!(99);
    }
    Json(json!([body])).into_response()
}

pub fn webhook(fixtures: Fixtures, recorder: Recorder) -> Router {
    let resources = [
        ("servicos", fixtures.servicos),
        ("barbers", fixtures.barbers),
        ("agenda", fixtures.agenda),
        ("config", fixtures.config),
        ("despesas", fixtures.despesas),
    ];
    let fail_writes = fixtures.fail_writes;

    let mut router = Router::new();
    for (name, data) in resources {
        let on_post = recorder.clone();
        let on_delete = recorder.clone();
        router = router.route(
            &format!("/webhook/{name}"),
            get(move || {
                let data = data.clone();
                async move { reply(data) }
            })
            .post(move |Json(body): Json<Value>| {
                let recorder = on_post.clone();
                async move {
                    recorder.push(name, body.clone());
                    if fail_writes {
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    } else {
                        echo(body)
                    }
                }
            })
            .delete(move |Query(query): Query<HashMap<String, String>>| {
                let recorder = on_delete.clone();
                async move {
                    recorder.push(&format!("{name}:delete"), json!(query));
                    StatusCode::OK.into_response()
                }
            }),
        );
    }
    router
}

/// Sobe o webhook falso em uma porta livre e devolve a base URL.
pub async fn spawn_webhook(fixtures: Fixtures, recorder: Recorder) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = webhook(fixtures, recorder);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/webhook")
}

/// Base URL de uma porta que ninguém escuta.
pub async fn unreachable_webhook() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/webhook")
}
