//! Question model and the built-in question bank.
use crate::axis::{Axis, Letter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

/// A yes/no prompt that contributes one letter to the answer trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "yes")]
    pub yes_letter: Letter,
    #[serde(rename = "no")]
    pub no_letter: Letter,
}

impl Question {
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.yes_letter.axis()
    }

    /// Letter recorded for the given answer.
    #[must_use]
    pub const fn letter_for(&self, is_yes: bool) -> Letter {
        if is_yes { self.yes_letter } else { self.no_letter }
    }
}

#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question at position {position} has id {found}, expected {expected}")]
    IdSequence {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("question {id} pairs {yes} with {no}, which are not opposite poles of one axis")]
    SplitAxis { id: u32, yes: Letter, no: Letter },
    #[error("no question covers the {0} axis")]
    UncoveredAxis(Axis),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct RawBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, ids are not `1..=n` in order,
    /// a question's letters are not opposite poles, or an axis has no question.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        for (position, question) in questions.iter().enumerate() {
            let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
            if question.id != expected {
                return Err(QuestionBankError::IdSequence {
                    position,
                    expected,
                    found: question.id,
                });
            }
            if question.yes_letter.opposite() != question.no_letter {
                return Err(QuestionBankError::SplitAxis {
                    id: question.id,
                    yes: question.yes_letter,
                    no: question.no_letter,
                });
            }
        }
        if let Some(axis) = Axis::ALL
            .into_iter()
            .find(|axis| !questions.iter().any(|q| q.axis() == *axis))
        {
            return Err(QuestionBankError::UncoveredAxis(axis));
        }
        Ok(Self { questions })
    }

    /// Load a bank from JSON of the form `{"questions": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the bank fails validation.
    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let raw: RawBank = serde_json::from_str(json)?;
        Self::new(raw.questions)
    }

    /// The twelve shipped questions, three per axis.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data file is broken.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Questions that feed `axis`, in display order.
    pub fn on_axis(&self, axis: Axis) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.axis() == axis)
    }
}
