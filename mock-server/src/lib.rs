use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: u64,
    pub content: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub answers: Vec<AnswerOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pool {
    pub id: u64,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize)]
pub struct PoolList {
    pub data: Vec<Pool>,
}

#[derive(Deserialize)]
pub struct CreatePool {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerOption {
    pub content: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestion {
    pub pool_id: u64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub answers: Vec<CreateAnswerOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: u64,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub pool_id: u64,
    pub answers: Vec<SubmittedAnswer>,
    pub name: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    pools: BTreeMap<u64, Pool>,
    pub submissions: Vec<Submission>,
}

impl Store {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

fn reject(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
}

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Router over an existing store, so tests can inspect what was written.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/pool", get(list_pools).post(create_pool))
        .route("/pool/submit", post(submit_pool))
        .route("/pool/{id}", get(get_pool))
        .route("/question", post(create_question))
        .route("/question/{id}", delete(delete_question))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_db(listener, Db::default()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn list_pools(State(db): State<Db>) -> Json<PoolList> {
    let store = db.read().await;
    Json(PoolList {
        data: store.pools.values().cloned().collect(),
    })
}

async fn create_pool(
    State(db): State<Db>,
    Json(input): Json<CreatePool>,
) -> ApiResult<(StatusCode, Json<Pool>)> {
    if input.name.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "name must not be empty"));
    }
    let mut store = db.write().await;
    let pool = Pool {
        id: store.next_id(),
        name: input.name,
        questions: Vec::new(),
    };
    store.pools.insert(pool.id, pool.clone());
    info!("created pool {}", pool.id);
    Ok((StatusCode::CREATED, Json(pool)))
}

async fn get_pool(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Pool>> {
    let store = db.read().await;
    store
        .pools
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("pool {id} not found")))
}

async fn create_question(
    State(db): State<Db>,
    Json(input): Json<CreateQuestion>,
) -> ApiResult<(StatusCode, Json<Question>)> {
    if !matches!(input.kind.as_str(), "answer" | "bullet" | "checkbox") {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            format!("unknown question type {}", input.kind),
        ));
    }
    let mut store = db.write().await;
    if !store.pools.contains_key(&input.pool_id) {
        return Err(reject(
            StatusCode::NOT_FOUND,
            format!("pool {} not found", input.pool_id),
        ));
    }
    let id = store.next_id();
    let mut answers = Vec::with_capacity(input.answers.len());
    for option in input.answers {
        answers.push(AnswerOption {
            id: store.next_id(),
            content: option.content,
            is_correct: option.is_correct,
        });
    }
    let question = Question {
        id,
        title: input.title,
        content: input.content,
        kind: input.kind,
        answers,
    };
    if let Some(pool) = store.pools.get_mut(&input.pool_id) {
        pool.questions.push(question.clone());
    }
    Ok((StatusCode::CREATED, Json(question)))
}

async fn delete_question(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    for pool in store.pools.values_mut() {
        if let Some(index) = pool.questions.iter().position(|q| q.id == id) {
            pool.questions.remove(index);
            return Ok(StatusCode::NO_CONTENT);
        }
    }
    Err(reject(StatusCode::NOT_FOUND, format!("question {id} not found")))
}

async fn submit_pool(
    State(db): State<Db>,
    Json(input): Json<Submission>,
) -> ApiResult<(StatusCode, Json<Submission>)> {
    let mut store = db.write().await;
    if !store.pools.contains_key(&input.pool_id) {
        return Err(reject(
            StatusCode::NOT_FOUND,
            format!("pool {} not found", input.pool_id),
        ));
    }
    store.submissions.push(input.clone());
    info!("stored submission for pool {}", input.pool_id);
    Ok((StatusCode::CREATED, Json(input)))
}
