//! The interactive lesson session.
//!
//! A session is one strictly sequential pass: topic input, curriculum
//! fetch, title and goals display, three lessons with two graded questions
//! each, then the summary and a closing message. No backtracking, no
//! concurrency; the flow blocks on stdin and on the provider in turn.

use std::io::BufRead;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::instrument;
use uuid::Uuid;

use crate::curriculum::{Curriculum, LESSON_COUNT, QUESTIONS_PER_LESSON};
use crate::output::{Emitter, Style};
use crate::paginate::paginate;
use crate::prompt::{build_grading_prompt, build_teaching_prompt};
use crate::traits::{CompletionProvider, CompletionRequest};

const TOPIC_PROMPT: &str = "What would you like to learn about? ";
const CLOSING_MESSAGE: &str = "\nThanks for learning with Ten Minute Lessons!\n\n";

/// Generation settings for the session's completion calls.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Max tokens per completion call.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
        }
    }
}

/// One interactive tutoring session over injected input and output.
///
/// Input is any `BufRead` and output any `Write`-backed [`Emitter`], so
/// tests drive the full flow from a cursor into a byte buffer.
pub struct Session<'a, W: Write, R: BufRead> {
    provider: &'a dyn CompletionProvider,
    emitter: Emitter<W>,
    input: R,
    config: SessionConfig,
}

impl<'a, W: Write, R: BufRead> Session<'a, W, R> {
    pub fn new(
        provider: &'a dyn CompletionProvider,
        emitter: Emitter<W>,
        input: R,
        config: SessionConfig,
    ) -> Self {
        Self {
            provider,
            emitter,
            input,
            config,
        }
    }

    /// Run the session start to finish.
    ///
    /// Provider failures propagate; a section the model failed to label
    /// displays as blank content and the session continues.
    #[instrument(name = "session", skip(self), fields(session_id = %Uuid::new_v4()))]
    pub async fn run(&mut self) -> Result<()> {
        self.emitter.emit(TOPIC_PROMPT, Style::Prompt)?;
        let topic = self.read_line()?;
        tracing::info!(topic = %topic, "session started");

        let plan = self.complete(build_teaching_prompt(&topic)).await?;
        let curriculum = Curriculum::new(plan);

        let title = self.section(curriculum.title(), "TITLE");
        self.emitter.emit(&format!("{title}\n\n"), Style::Content)?;

        self.emitter.line("Goals:")?;
        let goals = self.section(curriculum.goals(), "GOALS");
        self.emitter.emit(&format!("{goals}\n\n"), Style::Content)?;

        for lesson in 1..=LESSON_COUNT {
            self.emitter.line(&format!("Lesson {lesson}"))?;
            let text = self.section(curriculum.lesson(lesson), "LESSON");
            self.emitter
                .emit(&format!("{}\n\n", paginate(&text, 0)), Style::Content)?;

            for question in 1..=QUESTIONS_PER_LESSON {
                let question_text = self.section(curriculum.question(lesson, question), "QUESTION");
                self.emitter.emit(
                    &format!("{}\n\n", paginate(&question_text, 0)),
                    Style::Question,
                )?;

                let answer = self.read_line()?;
                let verdict = self
                    .complete(build_grading_prompt(&question_text, &answer))
                    .await?;
                self.emitter
                    .emit(&format!("\n{}\n\n", paginate(&verdict, 0)), Style::Content)?;
            }
        }

        let summary = self.section(curriculum.summary(), "SUMMARY");
        self.emitter
            .emit(&format!("\n{}\n\n", paginate(&summary, 0)), Style::Content)?;

        self.emitter.emit(CLOSING_MESSAGE, Style::Prompt)?;
        tracing::info!("session finished");
        Ok(())
    }

    /// One completion call with the session's generation settings.
    async fn complete(&self, prompt: String) -> Result<String> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let response = self.provider.complete(&request).await?;
        tracing::debug!(
            provider = self.provider.name(),
            tokens = response.token_usage.total_tokens,
            latency_ms = response.latency_ms,
            "completion finished"
        );
        Ok(response.content)
    }

    /// Read one line of user input; EOF reads as an empty answer.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read user input")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Pass a section through, logging when the model left it out. The
    /// user sees blank content either way.
    fn section(&self, text: String, label: &str) -> String {
        if text.is_empty() {
            tracing::warn!(label, "model output had no such section");
        }
        text
    }
}
