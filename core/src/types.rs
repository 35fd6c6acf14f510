//! Domain DTOs for the poll API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two crates. On the wire a
//! question is a flat object with a `type` string and an optional `answers`
//! list. In Rust it is a `QuestionKind` union so that an `answer` question
//! simply has no options to get wrong.

use serde::{Deserialize, Deserializer, Serialize};

pub type PoolId = u64;
pub type QuestionId = u64;
pub type OptionId = u64;

/// Discriminant of a question as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Free text.
    Answer,
    /// Single choice.
    Bullet,
    /// Multiple choice.
    Checkbox,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Answer => "answer",
            QuestionType::Bullet => "bullet",
            QuestionType::Checkbox => "checkbox",
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "answer" => Ok(QuestionType::Answer),
            "bullet" => Ok(QuestionType::Bullet),
            "checkbox" => Ok(QuestionType::Checkbox),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option of a `bullet` or `checkbox` question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: OptionId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Answer,
    Bullet(Vec<AnswerOption>),
    Checkbox(Vec<AnswerOption>),
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::Answer => QuestionType::Answer,
            QuestionKind::Bullet(_) => QuestionType::Bullet,
            QuestionKind::Checkbox(_) => QuestionType::Checkbox,
        }
    }

    pub fn options(&self) -> &[AnswerOption] {
        match self {
            QuestionKind::Answer => &[],
            QuestionKind::Bullet(options) | QuestionKind::Checkbox(options) => options,
        }
    }
}

/// A question returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireQuestion", into = "WireQuestion")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub content: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }
}

#[derive(Serialize, Deserialize)]
struct WireQuestion {
    id: QuestionId,
    title: String,
    content: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    #[serde(default, deserialize_with = "null_as_empty")]
    answers: Vec<AnswerOption>,
}

impl From<WireQuestion> for Question {
    fn from(wire: WireQuestion) -> Self {
        let kind = match wire.question_type {
            QuestionType::Answer => QuestionKind::Answer,
            QuestionType::Bullet => QuestionKind::Bullet(wire.answers),
            QuestionType::Checkbox => QuestionKind::Checkbox(wire.answers),
        };
        Question {
            id: wire.id,
            title: wire.title,
            content: wire.content,
            kind,
        }
    }
}

impl From<Question> for WireQuestion {
    fn from(question: Question) -> Self {
        let question_type = question.question_type();
        let answers = match question.kind {
            QuestionKind::Answer => Vec::new(),
            QuestionKind::Bullet(options) | QuestionKind::Checkbox(options) => options,
        };
        WireQuestion {
            id: question.id,
            title: question.title,
            content: question.content,
            question_type,
            answers,
        }
    }
}

/// Lists the server may send as `null` decode as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pool (poll) and its ordered questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub questions: Vec<Question>,
}

/// `GET /pool` wraps the list in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolList {
    pub data: Vec<Pool>,
}

/// Request payload for `POST /pool`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPool {
    pub name: String,
}

/// An option as authored, before the server assigns it an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAnswerOption {
    pub content: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Request payload for `POST /question`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub pool_id: PoolId,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub answers: Vec<NewAnswerOption>,
}

/// One normalized answer: the same shape for every question type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    /// The prompt the respondent saw (the question's `content`).
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub value: Vec<String>,
}

/// Request payload for `POST /pool/submit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub pool_id: PoolId,
    pub answers: Vec<SubmittedAnswer>,
    /// Name of the pool being answered.
    pub name: String,
}
