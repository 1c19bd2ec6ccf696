use crate::axis::Letter;
use crate::code::TypologyCode;
use crate::question::{Question, QuestionBank};
use crate::tally::Tally;
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

/// Answer trail; inline for the shipped bank size.
pub type AnswerTrail = SmallVec<[Letter; 12]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at `cursor`.
    InProgress { cursor: usize },
    /// Every question answered; the code is final.
    Complete(TypologyCode),
}

/// What the caller should do after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the question at this index next.
    Next(usize),
    /// The quiz just finished with this code.
    Complete(TypologyCode),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz already complete with {0}; start a new session")]
    SessionComplete(TypologyCode),
    #[error("no question at index {cursor} in a bank of {total}")]
    CursorOutOfRange { cursor: usize, total: usize },
}

/// One pass through the question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    trail: AnswerTrail,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            trail: AnswerTrail::new(),
            state: SessionState::InProgress { cursor: 0 },
        }
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::SessionComplete`] once every question has been answered;
    /// the session is left unchanged.
    pub fn answer(&mut self, is_yes: bool) -> Result<Step, QuizError> {
        let cursor = match self.state {
            SessionState::InProgress { cursor } => cursor,
            SessionState::Complete(code) => return Err(QuizError::SessionComplete(code)),
        };
        let Some((id, letter)) = self
            .bank
            .get(cursor)
            .map(|question| (question.id, question.letter_for(is_yes)))
        else {
            let total = self.bank.len();
            debug_assert!(cursor < total, "in-progress cursor {cursor} past {total}");
            return Err(QuizError::CursorOutOfRange { cursor, total });
        };
        self.trail.push(letter);
        log::debug!(
            "question {id} answered {} -> {letter}",
            if is_yes { "yes" } else { "no" }
        );

        let next = cursor + 1;
        if next < self.bank.len() {
            self.state = SessionState::InProgress { cursor: next };
            Ok(Step::Next(next))
        } else {
            Ok(Step::Complete(self.finalize()))
        }
    }

    fn finalize(&mut self) -> TypologyCode {
        let code = Tally::from_letters(&self.trail).to_code();
        self.state = SessionState::Complete(code);
        log::info!("quiz complete: {code} from {} answers", self.trail.len());
        code
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the question awaiting an answer, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { cursor } => Some(cursor),
            SessionState::Complete(_) => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.cursor().and_then(|idx| self.bank.get(idx))
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete(_))
    }

    #[must_use]
    pub const fn code(&self) -> Option<TypologyCode> {
        match self.state {
            SessionState::Complete(code) => Some(code),
            SessionState::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub fn trail(&self) -> &[Letter] {
        &self.trail
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.trail.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

impl PartialEq for QuizSession {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bank, &other.bank)
            && self.trail == other.trail
            && self.state == other.state
    }
}
