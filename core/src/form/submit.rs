//! Respondent answer form.
//!
//! Raw values are kept per question under a `question-{id}` key, the same
//! key the form inputs are registered with. Option selections are stored as
//! stringified option ids, exactly as an input widget reports them.

use std::collections::HashMap;

use crate::types::{OptionId, QuestionId};

pub fn field_key(question_id: QuestionId) -> String {
    format!("question-{question_id}")
}

/// Raw value of one question's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Typed text (`answer`).
    Text(String),
    /// Id of the chosen radio option (`bullet`).
    Single(String),
    /// Ids of checked options in click order (`checkbox`).
    Multi(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    SetText {
        question_id: QuestionId,
        text: String,
    },
    Select {
        question_id: QuestionId,
        option_id: OptionId,
    },
    Toggle {
        question_id: QuestionId,
        option_id: OptionId,
        checked: bool,
    },
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    values: HashMap<String, FieldValue>,
}

impl SubmitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, question_id: QuestionId) -> Option<&FieldValue> {
        self.values.get(&field_key(question_id))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `option_id` is currently checked for a `checkbox` question.
    pub fn is_checked(&self, question_id: QuestionId, option_id: OptionId) -> bool {
        let id = option_id.to_string();
        match self.value(question_id) {
            Some(FieldValue::Multi(ids)) => ids.contains(&id),
            Some(FieldValue::Single(selected)) => *selected == id,
            _ => false,
        }
    }

    pub fn apply(&mut self, action: SubmitAction) {
        match action {
            SubmitAction::SetText { question_id, text } => {
                self.values.insert(field_key(question_id), FieldValue::Text(text));
            }
            SubmitAction::Select {
                question_id,
                option_id,
            } => {
                self.values
                    .insert(field_key(question_id), FieldValue::Single(option_id.to_string()));
            }
            SubmitAction::Toggle {
                question_id,
                option_id,
                checked,
            } => {
                let id = option_id.to_string();
                let entry = self
                    .values
                    .entry(field_key(question_id))
                    .or_insert_with(|| FieldValue::Multi(Vec::new()));
                if !matches!(entry, FieldValue::Multi(_)) {
                    *entry = FieldValue::Multi(Vec::new());
                }
                if let FieldValue::Multi(ids) = entry {
                    if checked {
                        if !ids.contains(&id) {
                            ids.push(id);
                        }
                    } else {
                        ids.retain(|v| *v != id);
                    }
                }
            }
            SubmitAction::Reset => self.values.clear(),
        }
    }
}
