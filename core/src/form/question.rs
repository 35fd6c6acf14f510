//! Question authoring form.
//!
//! The question type decides how the option list behaves: `answer` has no
//! options at all, `bullet` allows exactly one correct option, `checkbox`
//! lets every option be marked independently.

use super::{Checker, ValidationErrors};
use crate::types::{NewAnswerOption, NewQuestion, PoolId, QuestionType};

/// Input widget used to mark an option correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionControl {
    None,
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDraft {
    pub content: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionAction {
    SetTitle(String),
    SetContent(String),
    SetType(QuestionType),
    AppendOption,
    RemoveOption(usize),
    SetOptionContent(usize, String),
    /// Mark option `i` correct (`bullet`) or flip it (`checkbox`).
    MarkCorrect(usize),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionForm {
    title: String,
    content: String,
    question_type: QuestionType,
    options: Vec<OptionDraft>,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            question_type: QuestionType::Answer,
            options: Vec::new(),
        }
    }
}

impl QuestionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn options(&self) -> &[OptionDraft] {
        &self.options
    }

    pub fn control(&self) -> OptionControl {
        match self.question_type {
            QuestionType::Answer => OptionControl::None,
            QuestionType::Bullet => OptionControl::Radio,
            QuestionType::Checkbox => OptionControl::Checkbox,
        }
    }

    /// Apply one action. Actions naming an option index that does not exist
    /// leave the form unchanged.
    pub fn apply(&mut self, action: QuestionAction) {
        match action {
            QuestionAction::SetTitle(title) => self.title = title,
            QuestionAction::SetContent(content) => self.content = content,
            QuestionAction::SetType(question_type) => {
                self.question_type = question_type;
                if question_type == QuestionType::Bullet {
                    self.keep_first_correct();
                }
            }
            QuestionAction::AppendOption => self.options.push(OptionDraft::default()),
            QuestionAction::RemoveOption(index) => {
                if index < self.options.len() {
                    self.options.remove(index);
                }
            }
            QuestionAction::SetOptionContent(index, content) => {
                if let Some(option) = self.options.get_mut(index) {
                    option.content = content;
                }
            }
            QuestionAction::MarkCorrect(index) => self.mark_correct(index),
            QuestionAction::Reset => *self = Self::default(),
        }
    }

    fn mark_correct(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        match self.question_type {
            QuestionType::Answer => {}
            QuestionType::Bullet => {
                for (i, option) in self.options.iter_mut().enumerate() {
                    option.is_correct = i == index;
                }
            }
            QuestionType::Checkbox => {
                let option = &mut self.options[index];
                option.is_correct = !option.is_correct;
            }
        }
    }

    fn keep_first_correct(&mut self) {
        let mut seen = false;
        for option in &mut self.options {
            if option.is_correct {
                option.is_correct = !seen;
                seen = true;
            }
        }
    }

    /// Validate and build the `POST /question` payload. `answer` questions
    /// always go out with an empty option list, whatever the form holds.
    pub fn validate(&self, pool_id: PoolId) -> Result<NewQuestion, ValidationErrors> {
        let mut check = Checker::default();
        check.min_len("title", &self.title, 1, "Title is required");
        check.min_len("content", &self.content, 1, "Content is required");
        check.finish()?;

        let answers = match self.question_type {
            QuestionType::Answer => Vec::new(),
            QuestionType::Bullet | QuestionType::Checkbox => self
                .options
                .iter()
                .map(|o| NewAnswerOption {
                    content: o.content.clone(),
                    is_correct: o.is_correct,
                })
                .collect(),
        };

        Ok(NewQuestion {
            pool_id,
            title: self.title.clone(),
            content: self.content.clone(),
            question_type: self.question_type,
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(question_type: QuestionType, contents: &[&str]) -> QuestionForm {
        let mut form = QuestionForm::new();
        form.apply(QuestionAction::SetTitle("Q1".into()));
        form.apply(QuestionAction::SetContent("Pick".into()));
        form.apply(QuestionAction::SetType(question_type));
        for (i, content) in contents.iter().enumerate() {
            form.apply(QuestionAction::AppendOption);
            form.apply(QuestionAction::SetOptionContent(i, content.to_string()));
        }
        form
    }

    fn correct(form: &QuestionForm) -> Vec<bool> {
        form.options().iter().map(|o| o.is_correct).collect()
    }

    #[test]
    fn bullet_marking_is_exclusive() {
        let mut form = form(QuestionType::Bullet, &["A", "B", "C"]);
        form.apply(QuestionAction::MarkCorrect(0));
        form.apply(QuestionAction::MarkCorrect(2));
        assert_eq!(correct(&form), vec![false, false, true]);

        form.apply(QuestionAction::MarkCorrect(2));
        assert_eq!(correct(&form), vec![false, false, true]);
    }

    #[test]
    fn checkbox_toggle_only_touches_its_option() {
        let mut form = form(QuestionType::Checkbox, &["A", "B", "C"]);
        form.apply(QuestionAction::MarkCorrect(0));
        form.apply(QuestionAction::MarkCorrect(2));
        assert_eq!(correct(&form), vec![true, false, true]);

        form.apply(QuestionAction::MarkCorrect(0));
        assert_eq!(correct(&form), vec![false, false, true]);
    }

    #[test]
    fn appended_option_is_blank_and_incorrect() {
        let mut form = QuestionForm::new();
        form.apply(QuestionAction::AppendOption);
        assert_eq!(form.options(), &[OptionDraft::default()]);
    }

    #[test]
    fn removing_an_option_drops_its_flag() {
        let mut form = form(QuestionType::Checkbox, &["A", "B", "C"]);
        form.apply(QuestionAction::MarkCorrect(1));
        form.apply(QuestionAction::RemoveOption(1));
        assert_eq!(correct(&form), vec![false, false]);
        let contents: Vec<_> = form.options().iter().map(|o| o.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "C"]);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut form = form(QuestionType::Bullet, &["A"]);
        let before = form.clone();
        form.apply(QuestionAction::MarkCorrect(5));
        form.apply(QuestionAction::RemoveOption(5));
        form.apply(QuestionAction::SetOptionContent(5, "Z".into()));
        assert_eq!(form, before);
    }

    #[test]
    fn switching_to_bullet_keeps_one_correct_option() {
        let mut form = form(QuestionType::Checkbox, &["A", "B", "C"]);
        form.apply(QuestionAction::MarkCorrect(1));
        form.apply(QuestionAction::MarkCorrect(2));
        form.apply(QuestionAction::SetType(QuestionType::Bullet));
        assert_eq!(correct(&form), vec![false, true, false]);
    }

    #[test]
    fn control_follows_type() {
        let mut form = QuestionForm::new();
        assert_eq!(form.control(), OptionControl::None);
        form.apply(QuestionAction::SetType(QuestionType::Bullet));
        assert_eq!(form.control(), OptionControl::Radio);
        form.apply(QuestionAction::SetType(QuestionType::Checkbox));
        assert_eq!(form.control(), OptionControl::Checkbox);
    }

    #[test]
    fn answer_type_submits_no_options() {
        let mut form = form(QuestionType::Checkbox, &["A", "B"]);
        form.apply(QuestionAction::SetType(QuestionType::Answer));
        let question = form.validate(4).unwrap();
        assert_eq!(question.question_type, QuestionType::Answer);
        assert!(question.answers.is_empty());
        assert_eq!(question.pool_id, 4);
    }

    #[test]
    fn bullet_payload_carries_correct_flag() {
        let mut form = form(QuestionType::Bullet, &["A", "B"]);
        form.apply(QuestionAction::MarkCorrect(1));
        let question = form.validate(1).unwrap();
        assert_eq!(
            question.answers,
            vec![
                NewAnswerOption {
                    content: "A".into(),
                    is_correct: false
                },
                NewAnswerOption {
                    content: "B".into(),
                    is_correct: true
                },
            ]
        );
    }

    #[test]
    fn title_and_content_are_required() {
        let err = QuestionForm::new().validate(1).unwrap_err();
        assert_eq!(err.message("title"), Some("Title is required"));
        assert_eq!(err.message("content"), Some("Content is required"));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = form(QuestionType::Bullet, &["A"]);
        form.apply(QuestionAction::Reset);
        assert_eq!(form, QuestionForm::default());
        assert_eq!(form.question_type(), QuestionType::Answer);
    }
}
