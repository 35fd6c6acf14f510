//! Respondent view state: fill in the form, or look at what was submitted.

use crate::form::{SubmitAction, SubmitForm};
use crate::normalize::normalize;
use crate::types::{Pool, Submission};

#[derive(Debug, Clone)]
pub struct SubmitView {
    pool: Pool,
    form: SubmitForm,
    presented: Option<Submission>,
    is_visible: bool,
}

impl SubmitView {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
            form: SubmitForm::new(),
            presented: None,
            is_visible: false,
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn form(&self) -> &SubmitForm {
        &self.form
    }

    /// The last submission, shown while results are visible.
    pub fn presented(&self) -> Option<&Submission> {
        self.presented.as_ref()
    }

    /// `true` while the results are shown instead of the form.
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn apply(&mut self, action: SubmitAction) {
        self.form.apply(action);
    }

    /// Normalize the current form, remember it for the results view, and
    /// switch to results. Returns `None` when the pool has no questions.
    pub fn submit(&mut self) -> Option<&Submission> {
        if self.pool.questions.is_empty() {
            return None;
        }
        self.presented = Some(normalize(&self.pool, &self.form));
        self.is_visible = true;
        self.presented.as_ref()
    }

    /// Clear the form once the server accepted the submission.
    pub fn submitted(&mut self) {
        self.form.apply(SubmitAction::Reset);
    }

    pub fn show_questions(&mut self) {
        self.is_visible = false;
    }

    /// Switch back to results. Only possible after a submit.
    pub fn show_results(&mut self) -> bool {
        if self.presented.is_some() {
            self.is_visible = true;
        }
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerOption, Question, QuestionKind};

    fn pool() -> Pool {
        Pool {
            id: 5,
            name: "Survey".into(),
            questions: vec![Question {
                id: 1,
                title: "Q1".into(),
                content: "Pick one".into(),
                kind: QuestionKind::Bullet(vec![
                    AnswerOption {
                        id: 1,
                        content: "A".into(),
                        is_correct: None,
                    },
                    AnswerOption {
                        id: 2,
                        content: "B".into(),
                        is_correct: None,
                    },
                ]),
            }],
        }
    }

    #[test]
    fn starts_on_the_form() {
        let mut view = SubmitView::new(pool());
        assert!(!view.is_visible());
        assert!(!view.show_results());
        assert!(view.presented().is_none());
    }

    #[test]
    fn submit_switches_to_results_and_toggles_locally() {
        let mut view = SubmitView::new(pool());
        view.apply(SubmitAction::Select {
            question_id: 1,
            option_id: 2,
        });
        let submission = view.submit().unwrap();
        assert_eq!(submission.answers[0].value, vec!["B"]);
        assert!(view.is_visible());

        view.submitted();
        assert!(view.form().is_empty());

        view.show_questions();
        assert!(!view.is_visible());
        assert!(view.show_results());
        assert_eq!(view.presented().unwrap().answers[0].value, vec!["B"]);
    }

    #[test]
    fn empty_pool_cannot_be_submitted() {
        let mut view = SubmitView::new(Pool {
            id: 1,
            name: "Empty".into(),
            questions: Vec::new(),
        });
        assert!(view.submit().is_none());
        assert!(!view.is_visible());
    }
}
