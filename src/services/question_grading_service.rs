use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::domain::ids::ChoiceId;
use crate::models::domain::{GradedAnswer, Question};

pub struct QuestionGradingService;

impl QuestionGradingService {
    /// Grade one submitted answer. The question's full points are awarded only
    /// when every correct choice and nothing else was selected.
    pub fn grade_answer(question: &Question, selected_ids: &[ChoiceId]) -> AppResult<GradedAnswer> {
        let correct_selected_ids = question.correct_selected_choices(selected_ids)?;

        let correct_ids: HashSet<ChoiceId> = question.correct_choice_ids().into_iter().collect();
        if correct_ids.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Question {} has no correct choices",
                question.id()
            )));
        }

        let selected: HashSet<ChoiceId> = selected_ids.iter().copied().collect();
        let is_correct = selected == correct_ids;
        let points_earned = if is_correct { question.points() } else { 0 };

        log::debug!(
            "Graded question {}: {} of {} correct choices selected, {} points",
            question.id(),
            correct_selected_ids.len(),
            correct_ids.len(),
            points_earned
        );

        Ok(GradedAnswer {
            question_id: question.id(),
            selected_choice_ids: selected_ids.to_vec(),
            correct_selected_ids,
            is_correct,
            points_earned,
        })
    }

    /// Total points for a set of graded answers.
    pub fn total_points(answers: &[GradedAnswer]) -> i32 {
        answers.iter().map(|a| i32::from(a.points_earned)).sum()
    }
}
