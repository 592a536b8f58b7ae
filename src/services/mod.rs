pub mod question_grading_service;
pub use question_grading_service::QuestionGradingService;
