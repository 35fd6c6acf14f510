//! Text rendering of the pool views.

use poll_core::form::SubmitForm;
use poll_core::{Pool, Question, QuestionKind, QuestionType, Submission};

pub fn pool_list(pools: &[Pool]) -> String {
    if pools.is_empty() {
        return "There is no pools\n".to_string();
    }
    let mut out = String::new();
    for pool in pools {
        out.push_str(&format!(
            "[{}] {} ({} questions)\n",
            pool.id,
            pool.name,
            pool.questions.len()
        ));
    }
    out
}

pub fn pool_detail(pool: &Pool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", pool.name));
    if pool.questions.is_empty() {
        out.push_str("There is no questions\n");
        return out;
    }
    let width = pool
        .questions
        .iter()
        .map(|q| q.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Question".len());
    out.push_str(&format!("{:>6}  {:<width$}  Type\n", "ID", "Question"));
    for q in &pool.questions {
        out.push_str(&format!("{:>6}  {:<width$}  {}\n", q.id, q.title, q.question_type()));
    }
    out
}

/// The respondent's form: every question with its input affordance.
pub fn submit_form(pool: &Pool, form: &SubmitForm) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", pool.name));
    for (index, question) in pool.questions.iter().enumerate() {
        if index > 0 {
            out.push_str("---\n");
        }
        write_question(&mut out, question, form);
    }
    out
}

fn write_question(out: &mut String, question: &Question, form: &SubmitForm) {
    out.push_str(&format!("{} (question {})\n", question.content, question.id));
    match &question.kind {
        QuestionKind::Answer => out.push_str("    > your answer\n"),
        QuestionKind::Bullet(options) => {
            for option in options {
                let mark = if form.is_checked(question.id, option.id) { "(*)" } else { "( )" };
                out.push_str(&format!("    {mark} {} [{}]\n", option.content, option.id));
            }
        }
        QuestionKind::Checkbox(options) => {
            for option in options {
                let mark = if form.is_checked(question.id, option.id) { "[x]" } else { "[ ]" };
                out.push_str(&format!("    {mark} {} [{}]\n", option.content, option.id));
            }
        }
    }
}

pub fn results(submission: &Submission) -> String {
    let mut out = String::new();
    out.push_str(&format!("Results for: {}\n", submission.name));
    for (index, answer) in submission.answers.iter().enumerate() {
        if index > 0 {
            out.push_str("---\n");
        }
        out.push_str(&format!("{}\n", answer.question));
        for (i, item) in answer.value.iter().enumerate() {
            match answer.question_type {
                QuestionType::Checkbox => {
                    out.push_str(&format!("    {}. {item}\n", i + 1));
                }
                QuestionType::Answer | QuestionType::Bullet => {
                    out.push_str(&format!("    {item}\n"));
                }
            }
        }
    }
    out
}
