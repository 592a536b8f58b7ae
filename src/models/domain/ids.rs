use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::errors::{AppError, AppResult};

pub type QuestionId = u64;
pub type ChoiceId = u64;

static GLOBAL_IDS: Lazy<Arc<IdGenerator>> = Lazy::new(|| Arc::new(IdGenerator::new()));

/// Hands out monotonically increasing ids for questions and choices.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Shared generator used by the convenience constructors on `Question`.
    pub fn global() -> Arc<IdGenerator> {
        Arc::clone(&GLOBAL_IDS)
    }

    /// Fails once the counter cannot advance, so no id is ever handed out twice.
    pub fn next_id(&self) -> AppResult<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|n| AppError::InternalError(format!("Id generator exhausted at {}", n)))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
