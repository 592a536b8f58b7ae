pub mod errors;
pub mod models;
pub mod services;

pub use errors::{AppError, AppResult};
pub use models::domain::{Choice, ChoiceId, GradedAnswer, IdGenerator, Question, QuestionId};
pub use services::QuestionGradingService;

#[cfg(test)]
pub mod test_utils;
