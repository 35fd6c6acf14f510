//! Turn raw per-question form values into a uniform submission.
//!
//! Every question yields `{questionId, question, type, value}` with `value`
//! a list of strings, whatever the question type. Option contents always
//! come from the pool as fetched, never from the form: the form only
//! contributes ids.

use crate::form::{FieldValue, SubmitForm};
use crate::types::{AnswerOption, Pool, Question, QuestionKind, Submission, SubmittedAnswer};

pub fn normalize(pool: &Pool, form: &SubmitForm) -> Submission {
    Submission {
        pool_id: pool.id,
        answers: pool
            .questions
            .iter()
            .map(|q| normalize_answer(q, form.value(q.id)))
            .collect(),
        name: pool.name.clone(),
    }
}

pub fn normalize_answer(question: &Question, raw: Option<&FieldValue>) -> SubmittedAnswer {
    let value = match &question.kind {
        QuestionKind::Checkbox(options) => selected_contents(options, raw),
        QuestionKind::Bullet(options) => match raw {
            Some(FieldValue::Single(id)) => options
                .iter()
                .find(|o| o.id.to_string() == *id)
                .map(|o| vec![o.content.clone()])
                .unwrap_or_default(),
            _ => Vec::new(),
        },
        QuestionKind::Answer => match raw {
            Some(FieldValue::Text(text)) if !text.is_empty() => vec![text.clone()],
            _ => Vec::new(),
        },
    };

    SubmittedAnswer {
        question_id: question.id,
        question: question.content.clone(),
        question_type: question.question_type(),
        value,
    }
}

fn selected_contents(options: &[AnswerOption], raw: Option<&FieldValue>) -> Vec<String> {
    let selected: &[String] = match raw {
        Some(FieldValue::Multi(ids)) => ids,
        Some(FieldValue::Single(id)) => std::slice::from_ref(id),
        _ => &[],
    };
    options
        .iter()
        .filter(|o| selected.contains(&o.id.to_string()))
        .map(|o| o.content.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmitAction;
    use crate::types::QuestionType;

    fn option(id: u64, content: &str) -> AnswerOption {
        AnswerOption {
            id,
            content: content.to_string(),
            is_correct: None,
        }
    }

    fn question(id: u64, kind: QuestionKind) -> Question {
        Question {
            id,
            title: format!("Q{id}"),
            content: format!("Question {id}?"),
            kind,
        }
    }

    #[test]
    fn blank_or_missing_text_gives_empty_value() {
        let q = question(1, QuestionKind::Answer);
        assert!(normalize_answer(&q, None).value.is_empty());
        assert!(normalize_answer(&q, Some(&FieldValue::Text(String::new())))
            .value
            .is_empty());
        assert_eq!(
            normalize_answer(&q, Some(&FieldValue::Text("pizza".into()))).value,
            vec!["pizza"]
        );
    }

    #[test]
    fn checkbox_follows_option_order_not_click_order() {
        let q = question(
            1,
            QuestionKind::Checkbox(vec![option(10, "X"), option(11, "Y"), option(12, "Z")]),
        );
        let raw = FieldValue::Multi(vec!["12".into(), "10".into(), "99".into()]);
        assert_eq!(normalize_answer(&q, Some(&raw)).value, vec!["X", "Z"]);
    }

    #[test]
    fn bullet_selects_single_content() {
        let q = question(2, QuestionKind::Bullet(vec![option(1, "A"), option(2, "B")]));
        let answer = normalize_answer(&q, Some(&FieldValue::Single("2".into())));
        assert_eq!(answer.value, vec!["B"]);
        assert_eq!(answer.question_type, QuestionType::Bullet);
        assert_eq!(answer.question, "Question 2?");
        assert!(normalize_answer(&q, Some(&FieldValue::Single("9".into())))
            .value
            .is_empty());
        assert!(normalize_answer(&q, None).value.is_empty());
    }

    #[test]
    fn mismatched_raw_value_counts_as_unset() {
        let q = question(3, QuestionKind::Answer);
        assert!(normalize_answer(&q, Some(&FieldValue::Multi(vec!["1".into()])))
            .value
            .is_empty());
    }

    #[test]
    fn whole_pool_is_normalized_in_question_order() {
        let pool = Pool {
            id: 1,
            name: "Lunch".into(),
            questions: vec![
                question(1, QuestionKind::Checkbox(vec![option(10, "X"), option(11, "Y")])),
                question(2, QuestionKind::Answer),
            ],
        };
        let mut form = SubmitForm::new();
        form.apply(SubmitAction::Toggle {
            question_id: 1,
            option_id: 10,
            checked: true,
        });

        let submission = normalize(&pool, &form);
        assert_eq!(submission.pool_id, 1);
        assert_eq!(submission.name, "Lunch");
        assert_eq!(submission.answers.len(), 2);
        assert_eq!(submission.answers[0].question_id, 1);
        assert_eq!(submission.answers[0].value, vec!["X"]);
        assert!(submission.answers[1].value.is_empty());
    }
}
