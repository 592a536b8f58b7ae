use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_POINTS: i16 = 1;
pub const DEFAULT_MAX_SELECTIONS: i16 = 1;

fn default_points() -> i16 {
    DEFAULT_POINTS
}

fn default_max_selections() -> i16 {
    DEFAULT_MAX_SELECTIONS
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default = "default_points")]
    #[validate(range(min = 1, max = 100))]
    pub points: i16,

    #[serde(default = "default_max_selections")]
    #[validate(range(min = 1))]
    pub max_selections: i16,
}

impl CreateQuestionRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

impl Default for CreateQuestionRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddChoiceRequest {
    #[validate(length(min = 1, max = 100))]
    pub text: String,

    #[serde(default)]
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_request(title: &str, points: i16, max_selections: i16) -> CreateQuestionRequest {
        CreateQuestionRequest {
            title: title.to_string(),
            points,
            max_selections,
        }
    }

    #[test]
    fn test_valid_create_question_request() {
        assert!(question_request("q1", 1, 1).validate().is_ok());
        assert!(question_request(&"a".repeat(200), 100, 4).validate().is_ok());
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(question_request("", 1, 1).validate().is_err());
        assert!(question_request(&"a".repeat(201), 1, 1).validate().is_err());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let title = "é".repeat(200);
        assert!(question_request(&title, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_points_bounds() {
        assert!(question_request("q1", 0, 1).validate().is_err());
        assert!(question_request("q1", -10, 1).validate().is_err());
        assert!(question_request("q1", 101, 1).validate().is_err());
    }

    #[test]
    fn test_max_selections_must_be_positive() {
        assert!(question_request("q1", 1, 0).validate().is_err());
    }

    #[test]
    fn test_defaults_apply_when_deserializing() {
        let request: CreateQuestionRequest =
            serde_json::from_str(r#"{ "title": "q1" }"#).unwrap();

        assert_eq!(request.points, DEFAULT_POINTS);
        assert_eq!(request.max_selections, DEFAULT_MAX_SELECTIONS);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_choice_defaults_to_incorrect_when_deserializing() {
        let request: AddChoiceRequest = serde_json::from_str(r#"{ "text": "a" }"#).unwrap();

        assert_eq!(request.text, "a");
        assert!(!request.is_correct);
        assert!(request.validate().is_ok());

        let request: AddChoiceRequest =
            serde_json::from_str(r#"{ "text": "", "is_correct": true }"#).unwrap();
        assert!(request.is_correct);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_choice_text_bounds() {
        let choice = |text: &str| AddChoiceRequest {
            text: text.to_string(),
            is_correct: false,
        };

        assert!(choice("a").validate().is_ok());
        assert!(choice(&"a".repeat(100)).validate().is_ok());
        assert!(choice("").validate().is_err());
        assert!(choice(&"a".repeat(101)).validate().is_err());
        assert!(choice(&"a".repeat(120)).validate().is_err());
    }
}
