//! Client core for the poll service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network itself (host-does-IO pattern). The host supplies a
//! `Transport`; `ApiService` runs every call through the interceptors and
//! the status checker. On top of that sit the form models used to author
//! questions and answer pools, and the normalization that turns answers
//! into a submission.
//!
//! # Design
//! - `PollClient` is stateless: it holds only `base_url`.
//! - Each endpoint is split into `build_*` and `parse_*` so the I/O
//!   boundary stays explicit.
//! - Question kinds are a union, matched exhaustively wherever a type
//!   changes behavior.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod interceptor;
pub mod normalize;
pub mod service;
pub mod status;
pub mod types;
pub mod view;

pub use client::PollClient;
pub use error::{ApiError, ErrorKind, TransportError, TransportErrorKind};
pub use form::{PoolForm, QuestionAction, QuestionForm, SubmitAction, SubmitForm, ValidationErrors};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use normalize::normalize;
pub use service::ApiService;
pub use status::check_status;
pub use types::{
    AnswerOption, NewAnswerOption, NewPool, NewQuestion, Pool, Question, QuestionKind, QuestionType, Submission,
    SubmittedAnswer,
};
pub use view::SubmitView;
