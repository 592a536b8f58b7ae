#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Question;

    /// A question with default points and no choices
    pub fn simple_question() -> Question {
        Question::new("Test Question").expect("fixture question should be valid")
    }

    /// Four choices, B and C correct, up to two selections
    pub fn question_with_multiple_choices() -> Question {
        let mut question = Question::with_options("Multiple Choice Test", 1, 2)
            .expect("fixture question should be valid");
        for (text, is_correct) in [
            ("Option A", false),
            ("Option B", true),
            ("Option C", true),
            ("Option D", false),
        ] {
            question
                .add_choice(text, is_correct)
                .expect("fixture choice should be valid");
        }
        question
    }

    /// 75 points, up to three selections, no choices
    pub fn high_value_question() -> Question {
        Question::with_options("Important Question", 75, 3)
            .expect("fixture question should be valid")
    }
}

#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_simple_question() {
        let question = simple_question();
        assert_eq!(question.title(), "Test Question");
        assert!(question.choices().is_empty());
    }

    #[test]
    fn test_fixtures_question_with_multiple_choices() {
        let question = question_with_multiple_choices();
        assert_eq!(question.choices().len(), 4);
        assert_eq!(question.correct_choice_ids().len(), 2);
    }

    #[test]
    fn test_fixtures_high_value_question() {
        let question = high_value_question();
        assert_eq!(question.points(), 75);
        assert_eq!(question.max_selections(), 3);
    }
}
