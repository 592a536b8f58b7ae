pub mod choice;
pub mod graded_answer;
pub mod ids;
pub mod question;
pub use choice::Choice;
pub use graded_answer::GradedAnswer;
pub use ids::{ChoiceId, IdGenerator, QuestionId};
pub use question::Question;
