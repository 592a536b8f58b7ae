use serde::Serialize;

use crate::models::domain::ids::{ChoiceId, QuestionId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradedAnswer {
    pub question_id: QuestionId,
    pub selected_choice_ids: Vec<ChoiceId>,
    pub correct_selected_ids: Vec<ChoiceId>,
    pub is_correct: bool,
    pub points_earned: i16,
}
