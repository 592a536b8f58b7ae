use serde::Serialize;

use crate::models::domain::ids::{ChoiceId, QuestionId};
use crate::models::domain::{Choice, Question};

/// A question as shown to a student: no correctness flags.
#[derive(Debug, Clone, Serialize)]
pub struct StudentQuestionDto {
    pub id: QuestionId,
    pub title: String,
    pub points: i16,
    pub max_selections: i16,
    pub choices: Vec<StudentChoiceDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentChoiceDto {
    pub id: ChoiceId,
    pub text: String,
}

impl From<&Choice> for StudentChoiceDto {
    fn from(choice: &Choice) -> Self {
        StudentChoiceDto {
            id: choice.id(),
            text: choice.text().to_string(),
        }
    }
}

impl From<&Question> for StudentQuestionDto {
    fn from(question: &Question) -> Self {
        StudentQuestionDto {
            id: question.id(),
            title: question.title().to_string(),
            points: question.points(),
            max_selections: question.max_selections(),
            choices: question.choices().iter().map(StudentChoiceDto::from).collect(),
        }
    }
}
