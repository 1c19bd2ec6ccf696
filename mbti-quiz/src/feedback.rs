//! Transient text on the copy button.
//!
//! Each copy attempt issues a [`Ticket`]; the delayed reset only applies if
//! its ticket is still the latest, so a reset scheduled by an earlier click
//! never clobbers the text of a newer one.
use crate::constants::{
    COPY_FAILURE_RESET_MS, COPY_FAILURE_TEXT, COPY_IDLE_TEXT, COPY_SUCCESS_RESET_MS,
    COPY_SUCCESS_TEXT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Idle => COPY_IDLE_TEXT,
            Self::Copied => COPY_SUCCESS_TEXT,
            Self::Failed => COPY_FAILURE_TEXT,
        }
    }

    /// Delay before returning to idle, or `None` when already idle.
    #[must_use]
    pub const fn reset_after_ms(self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Copied => Some(COPY_SUCCESS_RESET_MS),
            Self::Failed => Some(COPY_FAILURE_RESET_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    status: CopyStatus,
    generation: u64,
}

impl CopyFeedback {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: CopyStatus::Idle,
            generation: 0,
        }
    }

    /// Record the outcome of a copy attempt.
    ///
    /// Returns the ticket for the pending reset and its delay.
    pub fn settle(&mut self, copied: bool) -> (Ticket, u32) {
        self.generation = self.generation.wrapping_add(1);
        self.status = if copied {
            CopyStatus::Copied
        } else {
            CopyStatus::Failed
        };
        let delay = self.status.reset_after_ms().unwrap_or(0);
        (Ticket(self.generation), delay)
    }

    /// Return to idle if `ticket` is from the latest attempt.
    ///
    /// Returns whether the status changed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.status == CopyStatus::Idle {
            return false;
        }
        self.status = CopyStatus::Idle;
        true
    }

    #[must_use]
    pub const fn status(&self) -> CopyStatus {
        self.status
    }

    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.status.text()
    }
}
