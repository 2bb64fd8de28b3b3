//! Additional Information Step
//!
//! Collects the extra forms each participant needs. The same person can be
//! booked onto several lessons, so participants are de-duplicated by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::CheckoutStep;
use crate::basket::{unique_participants, BasketContext, Participant};
use crate::error::BookingResult;
use crate::validation::ValidationErrors;

/// Answers gathered for one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantAnswers {
    pub participant: Participant,
    /// British swimming questions were read and answered (required)
    pub questions_answered: bool,
    /// Free-text previous coach experience (optional)
    pub coach_experience: String,
}

impl ParticipantAnswers {
    fn new(participant: Participant) -> Self {
        Self { participant, questions_answered: false, coach_experience: String::new() }
    }
}

type ValidationListener = Box<dyn Fn(bool)>;

pub struct AdditionalInfoStep<B: BasketContext> {
    basket: B,
    answers: Vec<ParticipantAnswers>,
    submitted: bool,
    on_validation: Option<ValidationListener>,
}

impl<B: BasketContext> AdditionalInfoStep<B> {
    pub fn new(basket: B) -> Self {
        let mut step = Self { basket, answers: Vec::new(), submitted: false, on_validation: None };
        step.refresh();
        step
    }

    pub fn with_validation_listener(mut self, listener: impl Fn(bool) + 'static) -> Self {
        self.on_validation = Some(Box::new(listener));
        self
    }

    /// Rebuild the participant list from the basket, keeping answers
    /// already given by people still in it
    pub fn refresh(&mut self) {
        let participants = unique_participants(&self.basket.basket_items());
        let mut previous = std::mem::take(&mut self.answers);
        self.answers = participants
            .into_iter()
            .map(|participant| {
                match previous.iter().position(|a| a.participant.id == participant.id) {
                    Some(index) => previous.swap_remove(index),
                    None => ParticipantAnswers::new(participant),
                }
            })
            .collect();
    }

    pub fn answers(&self) -> &[ParticipantAnswers] {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_questions_answered(&mut self, participant_id: u32, answered: bool) {
        if let Some(answers) = self.answers_mut(participant_id) {
            answers.questions_answered = answered;
        }
    }

    pub fn set_coach_experience(&mut self, participant_id: u32, text: impl Into<String>) {
        if let Some(answers) = self.answers_mut(participant_id) {
            answers.coach_experience = text.into();
        }
    }

    fn answers_mut(&mut self, participant_id: u32) -> Option<&mut ParticipantAnswers> {
        self.answers.iter_mut().find(|a| a.participant.id == participant_id)
    }
}

/// Field name used for a participant's required questions
pub fn questions_field(participant_id: u32) -> String {
    format!("participant_{}_questions", participant_id)
}

#[async_trait(?Send)]
impl<B: BasketContext> CheckoutStep for AdditionalInfoStep<B> {
    fn title(&self) -> &str {
        "Additional information"
    }

    fn validate(&self) -> BookingResult<()> {
        let mut errors = ValidationErrors::default();
        for answers in self.answers.iter().filter(|a| !a.questions_answered) {
            errors.push(
                questions_field(answers.participant.id),
                format!(
                    "Please complete the British swimming questions for {}",
                    answers.participant.full_name()
                ),
            );
        }
        errors.into_result()?;
        Ok(())
    }

    fn commit(&mut self) {
        self.submitted = true;
        info!(participants = self.answers.len(), "additional information submitted");
    }

    fn report_validation(&self, valid: bool) {
        if let Some(listener) = &self.on_validation {
            listener(valid);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::basket::{BasketItem, InMemoryBasket};
    use crate::error::BookingError;

    fn person(id: u32, first: &str) -> Participant {
        Participant { id, first_name: first.into(), last_name: "Toone".into() }
    }

    fn basket() -> Rc<InMemoryBasket> {
        Rc::new(InMemoryBasket::new(vec![
            BasketItem::new("a", "Stage 1").with_participant(person(1, "Jacob")),
            BasketItem::new("b", "Stage 2")
                .with_participant(person(1, "Jacob"))
                .with_participant(person(2, "Ella")),
        ]))
    }

    #[test]
    fn test_participants_are_unique() {
        let step = AdditionalInfoStep::new(basket());
        assert_eq!(step.answers().len(), 2);
    }

    #[test]
    fn test_validation_lists_missing_participants() {
        let mut step = AdditionalInfoStep::new(basket());
        step.set_questions_answered(1, true);
        match step.validate() {
            Err(BookingError::Validation(errors)) => {
                assert_eq!(errors.0.len(), 1);
                assert!(errors.message_for(&questions_field(2)).unwrap().contains("Ella Toone"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(!step.submit_now());
        assert!(!step.is_submitted());

        step.set_questions_answered(2, true);
        assert!(step.submit_now());
        assert!(step.is_submitted());
    }

    #[test]
    fn test_refresh_keeps_existing_answers() {
        let basket = basket();
        let mut step = AdditionalInfoStep::new(Rc::clone(&basket));
        step.set_coach_experience(2, "Level 1 coach");
        basket.remove_item("a");
        basket.add_item(BasketItem::new("c", "Adult Beginner").with_participant(person(3, "Sam")));
        step.refresh();
        let ids: Vec<u32> = step.answers().iter().map(|a| a.participant.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(step.answers()[1].coach_experience, "Level 1 coach");
    }
}
