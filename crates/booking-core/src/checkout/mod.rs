//! Checkout
//!
//! The contract every checkout step offers its orchestrator, and the
//! orchestrator itself. A step is only left behind once it validates and
//! commits.

mod additional_info;

pub use additional_info::{questions_field, AdditionalInfoStep, ParticipantAnswers};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{BookingError, BookingResult};

/// One screen of the checkout flow
#[async_trait(?Send)]
pub trait CheckoutStep {
    fn title(&self) -> &str;

    /// Check the step's inputs without side effects
    fn validate(&self) -> BookingResult<()>;

    /// Apply the step's result to shared state
    fn commit(&mut self);

    /// Told whether the last submit passed
    fn report_validation(&self, _valid: bool) {}

    /// Validate then commit, synchronously
    fn submit_now(&mut self) -> bool {
        match self.validate() {
            Ok(()) => {
                self.commit();
                self.report_validation(true);
                true
            }
            Err(err) => {
                warn!(step = self.title(), error = %err, "checkout step did not validate");
                self.report_validation(false);
                false
            }
        }
    }

    /// Validate and commit. Never waits on I/O; async so every step can be
    /// driven the same way.
    async fn submit_form(&mut self) -> bool {
        self.submit_now()
    }
}

/// Where the shopper is in the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFlow {
    titles: Vec<String>,
    current: usize,
    valid: Vec<bool>,
}

impl CheckoutFlow {
    pub fn new(titles: Vec<String>) -> Self {
        let valid = vec![false; titles.len()];
        Self { titles, current: 0, valid }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_title(&self) -> Option<&str> {
        self.titles.get(self.current).map(String::as_str)
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.valid.get(index).copied().unwrap_or(false)
    }

    /// Every step has been submitted successfully
    pub fn is_complete(&self) -> bool {
        self.current >= self.titles.len()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.titles.len()
    }

    /// Record the outcome of the current step; move on when it passed
    pub fn advance(&mut self, passed: bool) -> BookingResult<()> {
        let slot = self
            .valid
            .get_mut(self.current)
            .ok_or(BookingError::UnknownStep(self.current))?;
        *slot = passed;
        if passed {
            self.current += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to an earlier step; later steps are never skipped to
    pub fn go_to(&mut self, index: usize) -> BookingResult<()> {
        if index > self.current || index >= self.titles.len() {
            return Err(BookingError::UnknownStep(index));
        }
        self.current = index;
        Ok(())
    }
}

/// Orchestrator owning its steps
pub struct Checkout {
    steps: Vec<Box<dyn CheckoutStep>>,
    flow: CheckoutFlow,
}

impl Checkout {
    pub fn new(steps: Vec<Box<dyn CheckoutStep>>) -> Self {
        let titles = steps.iter().map(|s| s.title().to_string()).collect();
        Self { steps, flow: CheckoutFlow::new(titles) }
    }

    pub fn flow(&self) -> &CheckoutFlow {
        &self.flow
    }

    pub fn step(&self, index: usize) -> Option<&dyn CheckoutStep> {
        self.steps.get(index).map(|s| s.as_ref())
    }

    /// Submit the current step and advance when it passes
    pub async fn next(&mut self) -> BookingResult<bool> {
        let index = self.flow.current();
        let step = self.steps.get_mut(index).ok_or(BookingError::UnknownStep(index))?;
        let passed = step.submit_form().await;
        self.flow.advance(passed)?;
        if passed {
            info!(step = index, "checkout step submitted");
        }
        Ok(passed)
    }

    pub fn back(&mut self) {
        self.flow.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_advances_only_on_success() {
        let mut flow = CheckoutFlow::new(vec!["Donation".into(), "Additional information".into()]);
        flow.advance(false).unwrap();
        assert_eq!(flow.current(), 0);
        assert!(!flow.is_valid(0));

        flow.advance(true).unwrap();
        assert_eq!(flow.current(), 1);
        assert!(flow.is_valid(0));
        assert!(flow.is_last());

        flow.advance(true).unwrap();
        assert!(flow.is_complete());
        assert!(matches!(flow.advance(true), Err(BookingError::UnknownStep(2))));
    }

    #[test]
    fn test_flow_navigation() {
        let mut flow = CheckoutFlow::new(vec!["A".into(), "B".into(), "C".into()]);
        flow.back();
        assert_eq!(flow.current(), 0);
        assert!(flow.go_to(1).is_err());
        flow.advance(true).unwrap();
        flow.advance(true).unwrap();
        flow.go_to(0).unwrap();
        assert_eq!(flow.current_title(), Some("A"));
    }
}
