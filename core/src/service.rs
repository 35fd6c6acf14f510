//! API facade: one injected transport, verb methods, typed endpoints.
//!
//! # Design
//! `ApiService` owns the transport it is given at construction; there is no
//! global client. Every call takes the same route:
//! request interceptor, transport, response interceptor, status checker.
//! Mutations log failures at `warn!` before handing them back.

use log::{debug, warn};
use serde::Serialize;

use crate::client::PollClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::interceptor::{intercept_response, Passthrough, RequestInterceptor};
use crate::status::check_status;
use crate::types::{NewPool, NewQuestion, Pool, PoolId, Question, QuestionId, Submission};

pub struct ApiService<T> {
    transport: T,
    client: PollClient,
    interceptor: Box<dyn RequestInterceptor>,
}

impl<T: Transport> ApiService<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            client: PollClient::new(base_url),
            interceptor: Box::new(Passthrough),
        }
    }

    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptor = Box::new(interceptor);
        self
    }

    pub fn client(&self) -> &PollClient {
        &self.client
    }

    /// Run `request` through the interceptors and the transport. The
    /// returned response has not been status-checked.
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.interceptor.intercept(request);
        debug!("{} {}", request.method.as_str(), request.path);
        intercept_response(self.transport.execute(&request))
    }

    fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        check_status(self.send(request)?)
    }

    pub fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.dispatch(self.client.request(HttpMethod::Get, path))
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.dispatch(self.client.json_request(HttpMethod::Post, path, body)?)
    }

    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.dispatch(self.client.json_request(HttpMethod::Patch, path, body)?)
    }

    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.dispatch(self.client.json_request(HttpMethod::Put, path, body)?)
    }

    pub fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.dispatch(self.client.request(HttpMethod::Delete, path))
    }

    pub fn list_pools(&self) -> Result<Vec<Pool>, ApiError> {
        let response = self.send(self.client.build_list_pools())?;
        self.client.parse_list_pools(response)
    }

    pub fn get_pool(&self, id: PoolId) -> Result<Pool, ApiError> {
        let response = self.send(self.client.build_get_pool(id))?;
        self.client.parse_get_pool(response)
    }

    pub fn create_pool(&self, input: &NewPool) -> Result<Pool, ApiError> {
        let result = self
            .client
            .build_create_pool(input)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_pool(resp));
        log_mutation("create pool", result)
    }

    pub fn create_question(&self, input: &NewQuestion) -> Result<Question, ApiError> {
        let result = self
            .client
            .build_create_question(input)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_question(resp));
        log_mutation("create question", result)
    }

    pub fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        let result = self
            .send(self.client.build_delete_question(id))
            .and_then(|resp| self.client.parse_delete_question(resp));
        log_mutation("delete question", result)
    }

    pub fn submit_pool(&self, input: &Submission) -> Result<(), ApiError> {
        let result = self
            .client
            .build_submit_pool(input)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_submit_pool(resp));
        log_mutation("submit pool", result)
    }
}

fn log_mutation<R>(what: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
    if let Err(err) = &result {
        warn!("{what} failed: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::error::{ErrorKind, TransportError};

    /// Replays canned results and records what was sent.
    struct Scripted {
        replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<HttpResponse, TransportError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("no scripted reply left")
        }
    }

    fn reply(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    struct Tagging;

    impl RequestInterceptor for Tagging {
        fn intercept(&self, mut request: HttpRequest) -> HttpRequest {
            request.headers.push(("x-client".to_string(), "poll".to_string()));
            request
        }
    }

    #[test]
    fn verbs_apply_status_checker() {
        let transport = Scripted::new(vec![reply(204, ""), reply(404, "gone")]);
        let api = ApiService::new(&transport, "http://api");
        assert_eq!(api.delete("/question/1").unwrap().status, 204);
        let err = api.get("/pool/1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HttpStatusError);
        assert_eq!(err.body(), Some("gone"));
    }

    #[test]
    fn patch_and_put_carry_json_bodies() {
        let transport = Scripted::new(vec![reply(200, "{}"), reply(200, "{}")]);
        let api = ApiService::new(&transport, "http://api");
        api.patch("/pool/1", &NewPool { name: "A".into() }).unwrap();
        api.put("/pool/1", &NewPool { name: "B".into() }).unwrap();
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].method, HttpMethod::Patch);
        assert_eq!(seen[1].method, HttpMethod::Put);
        assert_eq!(seen[1].body.as_deref(), Some(r#"{"name":"B"}"#));
    }

    #[test]
    fn transport_failure_surfaces_as_network_error() {
        let transport = Scripted::new(vec![Err(TransportError::network("connection refused"))]);
        let api = ApiService::new(&transport, "http://api");
        let err = api.list_pools().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkError);
    }

    #[test]
    fn request_interceptor_sees_every_request() {
        let transport = Scripted::new(vec![reply(200, r#"{"data":[]}"#)]);
        let api = ApiService::new(&transport, "http://api").with_interceptor(Tagging);
        assert!(api.list_pools().unwrap().is_empty());
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].path, "http://api/pool");
        assert!(seen[0]
            .headers
            .contains(&("x-client".to_string(), "poll".to_string())));
    }

    #[test]
    fn submit_pool_rejection_keeps_status() {
        let transport = Scripted::new(vec![reply(422, r#"{"message":"bad"}"#)]);
        let api = ApiService::new(&transport, "http://api");
        let submission = Submission {
            pool_id: 1,
            answers: Vec::new(),
            name: "Lunch".to_string(),
        };
        let err = api.submit_pool(&submission).unwrap_err();
        assert_eq!(err.status(), Some(422));
    }
}
