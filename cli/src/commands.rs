//! Subcommands: one per view of the poll application.
//!
//! Every mutation is followed by a refetch; nothing fetched earlier is
//! reused after the server state changed.

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use clap::Subcommand;
use log::info;
use poll_core::form::{PoolForm, QuestionAction, QuestionForm, SubmitAction};
use poll_core::types::{OptionId, PoolId, QuestionId};
use poll_core::{ApiService, Pool, QuestionKind, QuestionType, SubmitView, Transport};

use crate::render;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all pools.
    Pools,

    /// Create a pool.
    PoolCreate {
        #[arg(long)]
        name: String,
    },

    /// Show one pool and its questions.
    Pool { id: PoolId },

    /// Add a question to a pool.
    QuestionAdd {
        pool_id: PoolId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// answer, bullet or checkbox.
        #[arg(long = "type", default_value = "answer")]
        question_type: QuestionType,
        /// Option text, repeat for each option.
        #[arg(long = "option", value_name = "TEXT")]
        options: Vec<String>,
        /// 1-based position of a correct option, repeatable.
        #[arg(long = "correct", value_name = "N")]
        correct: Vec<usize>,
    },

    /// Delete a question from a pool.
    QuestionDelete { pool_id: PoolId, question_id: QuestionId },

    /// Answer a pool and show the results.
    Submit {
        pool_id: PoolId,
        /// QUESTION_ID=VALUE. Text for answer questions, an option id for
        /// bullet questions, comma separated option ids for checkboxes.
        #[arg(long = "answer", value_name = "QID=VALUE", value_parser = parse_answer)]
        answers: Vec<(QuestionId, String)>,
        /// Print the questions instead of submitting.
        #[arg(long)]
        show_form: bool,
    },
}

pub fn run<T: Transport>(api: &ApiService<T>, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Pools => {
            let pools = api.list_pools().context("failed to list pools")?;
            out.write_all(render::pool_list(&pools).as_bytes())?;
        }
        Command::PoolCreate { name } => {
            let input = PoolForm::new(name).validate()?;
            let pool = api.create_pool(&input).context("failed to create pool")?;
            info!("created pool {}", pool.id);
            let pools = api.list_pools().context("failed to list pools")?;
            out.write_all(render::pool_list(&pools).as_bytes())?;
        }
        Command::Pool { id } => {
            let pool = api.get_pool(id).with_context(|| format!("failed to fetch pool {id}"))?;
            out.write_all(render::pool_detail(&pool).as_bytes())?;
        }
        Command::QuestionAdd {
            pool_id,
            title,
            content,
            question_type,
            options,
            correct,
        } => {
            let form = question_form(title, content, question_type, options, &correct)?;
            let input = form.validate(pool_id)?;
            let question = api.create_question(&input).context("failed to create question")?;
            info!("created question {} in pool {pool_id}", question.id);
            let pool = api
                .get_pool(pool_id)
                .with_context(|| format!("failed to fetch pool {pool_id}"))?;
            out.write_all(render::pool_detail(&pool).as_bytes())?;
        }
        Command::QuestionDelete { pool_id, question_id } => {
            api.delete_question(question_id)
                .with_context(|| format!("failed to delete question {question_id}"))?;
            let pool = api
                .get_pool(pool_id)
                .with_context(|| format!("failed to fetch pool {pool_id}"))?;
            out.write_all(render::pool_detail(&pool).as_bytes())?;
        }
        Command::Submit {
            pool_id,
            answers,
            show_form,
        } => {
            let pool = api
                .get_pool(pool_id)
                .with_context(|| format!("failed to fetch pool {pool_id}"))?;
            if pool.questions.is_empty() {
                bail!("There is no data.");
            }
            let mut view = SubmitView::new(pool);
            for action in answer_actions(view.pool(), &answers)? {
                view.apply(action);
            }
            if show_form {
                out.write_all(render::submit_form(view.pool(), view.form()).as_bytes())?;
                return Ok(());
            }
            let submission = view
                .submit()
                .cloned()
                .ok_or_else(|| anyhow!("pool {pool_id} has no questions"))?;
            api.submit_pool(&submission).context("failed to submit answers")?;
            view.submitted();
            out.write_all(render::results(&submission).as_bytes())?;
        }
    }
    Ok(())
}

/// Drive a `QuestionForm` the way an editor would: add each option, type
/// its text, then click the correct markers in order.
pub fn question_form(
    title: String,
    content: String,
    question_type: QuestionType,
    options: Vec<String>,
    correct: &[usize],
) -> Result<QuestionForm> {
    let mut form = QuestionForm::new();
    form.apply(QuestionAction::SetTitle(title));
    form.apply(QuestionAction::SetContent(content));
    form.apply(QuestionAction::SetType(question_type));
    let count = options.len();
    for (index, text) in options.into_iter().enumerate() {
        form.apply(QuestionAction::AppendOption);
        form.apply(QuestionAction::SetOptionContent(index, text));
    }
    for &n in correct {
        if n == 0 || n > count {
            bail!("--correct {n} does not name an option (1..={count})");
        }
        form.apply(QuestionAction::MarkCorrect(n - 1));
    }
    Ok(form)
}

pub fn parse_answer(s: &str) -> Result<(QuestionId, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=VALUE, got {s:?}"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid question id {id:?}"))?;
    Ok((id, value.to_string()))
}

/// Translate `--answer` arguments into form actions for `pool`.
pub fn answer_actions(pool: &Pool, answers: &[(QuestionId, String)]) -> Result<Vec<SubmitAction>> {
    let mut actions = Vec::new();
    for (question_id, value) in answers {
        let question_id = *question_id;
        let question = pool
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| anyhow!("pool {} has no question {question_id}", pool.id))?;
        match &question.kind {
            QuestionKind::Answer => actions.push(SubmitAction::SetText {
                question_id,
                text: value.clone(),
            }),
            QuestionKind::Bullet(_) => actions.push(SubmitAction::Select {
                question_id,
                option_id: parse_option_id(value)?,
            }),
            QuestionKind::Checkbox(_) => {
                for id in value.split(',').filter(|v| !v.trim().is_empty()) {
                    actions.push(SubmitAction::Toggle {
                        question_id,
                        option_id: parse_option_id(id)?,
                        checked: true,
                    });
                }
            }
        }
    }
    Ok(actions)
}

fn parse_option_id(value: &str) -> Result<OptionId> {
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid option id {value:?}"))
}
