use serde::Serialize;

use crate::models::domain::ids::ChoiceId;

/// An answer option. Only a `Question` can create one or change its
/// correctness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Choice {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
