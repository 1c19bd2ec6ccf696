//! MBTI Quiz Engine
//!
//! Platform-agnostic core for the yes/no personality quiz: the question bank,
//! the answer tally, four-axis resolution, and tolerant decoding of the stored
//! result. No UI or browser dependencies live here.

pub mod axis;
pub mod code;
pub mod constants;
pub mod decode;
pub mod feedback;
pub mod labels;
pub mod question;
pub mod session;
pub mod storage;
pub mod tally;

pub use axis::{Axis, Letter};
pub use code::{CodeParseError, TypologyCode, looks_like_code};
pub use decode::{DecodeOutcome, ResolvedCode, Strategy, decode, decode_from_store};
pub use feedback::{CopyFeedback, CopyStatus, Ticket};
pub use labels::{ResultView, label_for};
pub use question::{Question, QuestionBank, QuestionBankError};
pub use session::{AnswerTrail, QuizError, QuizSession, SessionState, Step};
pub use storage::{MemoryStore, StorageError};
pub use tally::Tally;

use constants::STORAGE_KEY;
use std::sync::Arc;
use thiserror::Error;

/// Trait for abstracting the key/value slot the result travels through.
/// Platform-specific implementations should provide this
pub trait ResultStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum EngineError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("failed to persist result: {0}")]
    Persist(#[source] E),
}

/// Runs quiz sessions and hands their result to the next page through a store.
pub struct QuizEngine<S>
where
    S: ResultStore,
{
    bank: Arc<QuestionBank>,
    store: S,
}

impl<S> QuizEngine<S>
where
    S: ResultStore,
{
    pub fn new(bank: QuestionBank, store: S) -> Self {
        Self {
            bank: Arc::new(bank),
            store,
        }
    }

    /// Engine over the shipped twelve questions.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded question data is invalid.
    pub fn with_builtin_bank(store: S) -> Result<Self, QuestionBankError> {
        Ok(Self::new(QuestionBank::builtin()?, store))
    }

    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        QuizSession::new(Arc::clone(&self.bank))
    }

    /// Answer the current question and persist the code when the quiz completes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Quiz`] if the session is already complete, or
    /// [`EngineError::Persist`] if the finished code cannot be stored. In the
    /// latter case the session is still complete.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        is_yes: bool,
    ) -> Result<Step, EngineError<S::Error>> {
        let step = session.answer(is_yes)?;
        if let Step::Complete(code) = step {
            self.persist(code).map_err(EngineError::Persist)?;
        }
        Ok(step)
    }

    /// Write the bare code under the shared result key.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn persist(&self, code: TypologyCode) -> Result<(), S::Error> {
        log::debug!("persisting {code} under {STORAGE_KEY}");
        self.store.write(STORAGE_KEY, &code.to_string())
    }

    /// Decode whatever is stored under the result key.
    pub fn stored_outcome(&self) -> DecodeOutcome {
        decode_from_store(&self.store, STORAGE_KEY)
    }

    /// Text and copy target for the result page.
    pub fn load_result(&self) -> ResultView {
        ResultView::render(&self.stored_outcome())
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}
