//! Stateless HTTP request builder and response parser for the poll API.
//!
//! # Design
//! `PollClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Parsing always runs the status checker
//! first, so a non-2xx response never reaches the JSON decoder.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::status::check_status;
use crate::types::{NewPool, NewQuestion, Pool, PoolId, PoolList, Question, QuestionId, Submission};

#[derive(Debug, Clone)]
pub struct PollClient {
    base_url: String,
}

impl PollClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` (relative to the base URL) with no body.
    pub fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a request for `path` carrying `body` as JSON.
    pub fn json_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn build_list_pools(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/pool")
    }

    pub fn build_create_pool(&self, input: &NewPool) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/pool", input)
    }

    pub fn build_get_pool(&self, id: PoolId) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/pool/{id}"))
    }

    pub fn build_create_question(&self, input: &NewQuestion) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/question", input)
    }

    pub fn build_delete_question(&self, id: QuestionId) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/question/{id}"))
    }

    pub fn build_submit_pool(&self, input: &Submission) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/pool/submit", input)
    }

    pub fn parse_list_pools(&self, response: HttpResponse) -> Result<Vec<Pool>, ApiError> {
        let list: PoolList = parse_json(response)?;
        Ok(list.data)
    }

    pub fn parse_create_pool(&self, response: HttpResponse) -> Result<Pool, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_pool(&self, response: HttpResponse) -> Result<Pool, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_question(&self, response: HttpResponse) -> Result<Question, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_question(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(response)?;
        Ok(())
    }

    pub fn parse_submit_pool(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(response)?;
        Ok(())
    }
}

/// Status-check `response`, then decode its body.
pub fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let response = check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
