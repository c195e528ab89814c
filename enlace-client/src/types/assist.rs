//! AI-assist trigger state

use std::collections::HashSet;

/// A control that starts an AI-assist call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistTrigger {
    /// "Generate description" button on the vacancy request form
    VacancyDescription,
}

/// Tracks which triggers have a call in flight
///
/// A trigger with a call in flight is disabled and shows a loading label.
#[derive(Debug, Clone, Default)]
pub struct AssistState {
    in_flight: HashSet<AssistTrigger>,
}

impl AssistState {
    /// Mark `trigger` busy
    ///
    /// Returns false if it already had a call in flight.
    pub fn begin(&mut self, trigger: AssistTrigger) -> bool {
        self.in_flight.insert(trigger)
    }

    /// Re-enable `trigger` after its call finished (success or failure)
    pub fn finish(&mut self, trigger: AssistTrigger) {
        self.in_flight.remove(&trigger);
    }

    pub fn is_loading(&self, trigger: AssistTrigger) -> bool {
        self.in_flight.contains(&trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_call_per_trigger() {
        let mut state = AssistState::default();
        assert!(state.begin(AssistTrigger::VacancyDescription));
        assert!(state.is_loading(AssistTrigger::VacancyDescription));
        assert!(!state.begin(AssistTrigger::VacancyDescription));
    }

    #[test]
    fn test_finish_reenables() {
        let mut state = AssistState::default();
        state.begin(AssistTrigger::VacancyDescription);
        state.finish(AssistTrigger::VacancyDescription);
        assert!(!state.is_loading(AssistTrigger::VacancyDescription));
        assert!(state.begin(AssistTrigger::VacancyDescription));
    }
}
