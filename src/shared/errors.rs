use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Invalid time window: start must be before end")]
    InvalidWindow,

    #[error("Court not found: {0}")]
    CourtNotFound(i32),

    #[error("Coach not found: {0}")]
    CoachNotFound(i32),

    #[error("Slot already taken for court {court_id}")]
    SlotConflict { court_id: i32 },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Transient storage failure: {0}")]
    Transient(String),
}

impl DomainError {
    /// Whether the operation may succeed if simply retried. True only
    /// for storage-side contention and timeouts; a `SlotConflict` needs
    /// a different window, not another attempt at the same one.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Transient(_))
    }
}

// ── Tests ──────────────────────────────────────────────────────
