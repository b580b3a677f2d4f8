// game/answer.rs

use bevy::prelude::Resource;

/// The two ways to answer the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// The stationary button
    Confirm,
    /// The button that runs away
    Evasive,
}

/// Which answer message is on screen. At most one at a time.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct AnswerState {
    shown: Option<Answer>,
}

impl AnswerState {
    pub fn shown(&self) -> Option<Answer> {
        self.shown
    }

    pub fn is_shown(&self, answer: Answer) -> bool {
        self.shown == Some(answer)
    }

    /// Show the message for `answer`, hiding any other. Returns true if anything changed.
    pub fn choose(&mut self, answer: Answer) -> bool {
        if self.is_shown(answer) {
            return false;
        }
        self.shown = Some(answer);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_shown_initially() {
        let state = AnswerState::default();
        assert_eq!(state.shown(), None);
        assert!(!state.is_shown(Answer::Confirm));
        assert!(!state.is_shown(Answer::Evasive));
    }

    #[test]
    fn test_choices_are_exclusive() {
        let mut state = AnswerState::default();

        assert!(state.choose(Answer::Confirm));
        assert!(state.is_shown(Answer::Confirm));
        assert!(!state.is_shown(Answer::Evasive));

        assert!(state.choose(Answer::Evasive));
        assert!(state.is_shown(Answer::Evasive));
        assert!(!state.is_shown(Answer::Confirm));
    }

    #[test]
    fn test_repeat_choice_is_not_a_change() {
        let mut state = AnswerState::default();
        assert!(state.choose(Answer::Confirm));
        assert!(!state.choose(Answer::Confirm));
        assert_eq!(state.shown(), Some(Answer::Confirm));
    }
}
