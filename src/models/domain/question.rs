use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::choice::Choice;
use crate::models::domain::ids::{ChoiceId, IdGenerator, QuestionId};
use crate::models::dto::request::{AddChoiceRequest, CreateQuestionRequest};

/// A quiz question and the choices it owns.
///
/// Title, points and max selections are validated once in the constructor
/// and cannot change afterwards. Choices keep their insertion order.
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: i16,
    max_selections: i16,
    choices: Vec<Choice>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    #[serde(skip)]
    ids: Arc<IdGenerator>,
}

impl Question {
    /// Creates a question with default points and max selections, taking ids
    /// from the shared generator.
    pub fn new(title: &str) -> AppResult<Self> {
        Self::create(CreateQuestionRequest::new(title), IdGenerator::global())
    }

    pub fn with_options(title: &str, points: i16, max_selections: i16) -> AppResult<Self> {
        let request = CreateQuestionRequest {
            title: title.to_string(),
            points,
            max_selections,
        };
        Self::create(request, IdGenerator::global())
    }

    /// Validates the request and builds the question. The generator supplies
    /// the question id and every choice id added later.
    pub fn create(request: CreateQuestionRequest, ids: Arc<IdGenerator>) -> AppResult<Self> {
        if let Err(err) = request.validate() {
            log::debug!("Rejected question '{}': {}", request.title, err);
            return Err(err.into());
        }

        let id = ids.next_id()?;
        let now = Utc::now();
        let question = Question {
            id,
            title: request.title,
            points: request.points,
            max_selections: request.max_selections,
            choices: Vec::new(),
            created_at: now,
            modified_at: now,
            ids,
        };

        log::debug!(
            "Created question {} ({} points, max {} selections)",
            question.id,
            question.points,
            question.max_selections
        );
        Ok(question)
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> i16 {
        self.points
    }

    pub fn max_selections(&self) -> i16 {
        self.max_selections
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Appends a new choice and returns it so the caller can keep its id.
    pub fn add_choice(&mut self, text: &str, is_correct: bool) -> AppResult<&Choice> {
        let request = AddChoiceRequest {
            text: text.to_string(),
            is_correct,
        };
        if let Err(err) = request.validate() {
            log::debug!("Rejected choice for question {}: {}", self.id, err);
            return Err(err.into());
        }

        let choice = Choice::new(self.ids.next_id()?, request.text, request.is_correct);
        log::debug!("Added choice {} to question {}", choice.id(), self.id);

        self.choices.push(choice);
        self.touch();
        Ok(&self.choices[self.choices.len() - 1])
    }

    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> AppResult<()> {
        let position = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or_else(|| self.choice_not_found(choice_id))?;

        self.choices.remove(position);
        self.touch();
        log::debug!("Removed choice {} from question {}", choice_id, self.id);
        Ok(())
    }

    pub fn remove_all_choices(&mut self) {
        let removed = self.choices.len();
        self.choices.clear();
        self.touch();
        log::debug!("Removed {} choices from question {}", removed, self.id);
    }

    /// Marks exactly the listed choices as correct and every other choice as
    /// incorrect. Nothing changes if any id is unknown.
    pub fn set_correct_choices(&mut self, choice_ids: &[ChoiceId]) -> AppResult<()> {
        if let Some(&missing) = choice_ids.iter().find(|&&id| self.choice(id).is_none()) {
            return Err(self.choice_not_found(missing));
        }

        let correct: HashSet<ChoiceId> = choice_ids.iter().copied().collect();
        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }
        self.touch();

        log::debug!(
            "Set {} correct choices on question {}",
            correct.len(),
            self.id
        );
        Ok(())
    }

    /// Returns the submitted ids that name a correct choice, in the order
    /// they were submitted. Unknown and incorrect ids are dropped.
    pub fn correct_selected_choices(&self, choice_ids: &[ChoiceId]) -> AppResult<Vec<ChoiceId>> {
        self.check_selection_count(choice_ids)?;

        let mut seen = HashSet::new();
        let correct = choice_ids
            .iter()
            .copied()
            .filter(|&id| self.choice(id).is_some_and(Choice::is_correct))
            .filter(|&id| seen.insert(id))
            .collect();

        Ok(correct)
    }

    fn check_selection_count(&self, choice_ids: &[ChoiceId]) -> AppResult<()> {
        if choice_ids.len() > self.max_selections as usize {
            log::debug!(
                "Rejected {} selections on question {} (max {})",
                choice_ids.len(),
                self.id,
                self.max_selections
            );
            return Err(AppError::ValidationError(format!(
                "Cannot select more than {} choices",
                self.max_selections
            )));
        }
        Ok(())
    }

    fn choice_not_found(&self, choice_id: ChoiceId) -> AppError {
        AppError::NotFound(format!(
            "Choice with id '{}' not found on question {}",
            choice_id, self.id
        ))
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
