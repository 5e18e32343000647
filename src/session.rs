//! Quiz session state management
//!
//! This module contains the mutable state of one quiz run: the current
//! position in the question list, the answers recorded so far, and whether
//! the quiz has been submitted. Every transition is a synchronous reaction
//! to a single user action; the rendering shell keeps invalid actions
//! unreachable by disabling their controls, so the session treats violating
//! calls as contract breaches and ignores them rather than surfacing errors.

use std::{collections::HashMap, time::Duration};

use log::{debug, warn};
use serde::Serialize;

use crate::{constants::transition::QUESTION_SWITCH, quiz::Quiz, screen::Screen};

/// The phase of a quiz session
///
/// A session is either working through the questions or showing the result
/// screen. `Completed` is terminal until [`QuizSession::restart`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Phase {
    /// The user is answering questions
    #[default]
    #[display("in progress")]
    InProgress,
    /// The final answer has been submitted; the result screen is shown
    #[display("completed")]
    Completed,
}

/// Transition notices emitted by session mutations
///
/// Each successful mutation reports what happened so the rendering shell can
/// react (repaint, animate a question switch, swap to the result screen).
/// Mutations that were guarded no-ops emit nothing. The `transition` field on
/// navigation events is the fixed cosmetic deferral shells apply while
/// switching questions; it has no effect on session state.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    /// An option was recorded for a question
    Selected {
        /// Position of the question the selection applies to
        index: usize,
        /// The selected option text
        option: String,
    },
    /// The session moved forward to another question
    Advanced {
        /// The new current position
        index: usize,
        /// Suggested visual deferral for the question switch
        #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
        transition: Duration,
    },
    /// The session moved back to a previous question
    Retreated {
        /// The new current position
        index: usize,
        /// Suggested visual deferral for the question switch
        #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
        transition: Duration,
    },
    /// The final answer was submitted; the session is now completed
    Submitted,
    /// The session was reset to its initial state
    Restarted,
}

impl Event {
    /// Converts the event to a JSON string for the rendering shell
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// One run of a quiz
///
/// Owns the immutable [`Quiz`] configuration together with the progress
/// through it: the current question position, the answers recorded per
/// position, and the phase. The whole progress is replaced atomically by
/// [`QuizSession::restart`]; nothing survives a process restart.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// The quiz configuration being played
    quiz: Quiz,
    /// Position of the currently displayed question, always in `[0, N-1]`
    current_index: usize,
    /// Recorded selections keyed by question position
    answers: HashMap<usize, String>,
    /// Whether the quiz is still being answered or has been submitted
    phase: Phase,
}

impl QuizSession {
    /// Creates a session at the first question with no recorded answers
    pub fn new(quiz: Quiz) -> Self {
        debug_assert!(!quiz.is_empty(), "a quiz needs at least one question");
        Self {
            quiz,
            current_index: 0,
            answers: HashMap::new(),
            phase: Phase::InProgress,
        }
    }

    /// Records `option` as the answer for the question at `index`
    ///
    /// Overwrites any prior selection at that position and leaves the
    /// current position and phase untouched. The index must be in range and
    /// the option must be one of that question's options; a correctly wired
    /// shell cannot violate this, so a violating call asserts in development
    /// and is ignored otherwise. Selections are likewise ignored once the
    /// session is completed, since the result screen offers no options.
    pub fn select_option(&mut self, index: usize, option: impl Into<String>) -> Option<Event> {
        let option = option.into();
        let known = self
            .quiz
            .question(index)
            .is_some_and(|question| question.has_option(&option));
        debug_assert!(
            known,
            "selected option {option:?} is not an option of question {index}"
        );
        if !known || self.phase == Phase::Completed {
            warn!("ignoring selection of {option:?} for question {index}");
            return None;
        }

        self.answers.insert(index, option.clone());
        Some(Event::Selected { index, option })
    }

    /// Moves to the next question, or submits from the last one
    ///
    /// Requires a recorded answer for the current question; the shell keeps
    /// the control disabled otherwise, so an unanswered or already-completed
    /// call is a no-op. From the last question this transitions the session
    /// to [`Phase::Completed`] and freezes the position.
    pub fn advance(&mut self) -> Option<Event> {
        if self.phase == Phase::Completed || !self.has_answered_current() {
            return None;
        }

        if self.current_index + 1 < self.quiz.len() {
            self.current_index += 1;
            debug!("advanced to question {}", self.current_index);
            Some(Event::Advanced {
                index: self.current_index,
                transition: QUESTION_SWITCH,
            })
        } else {
            self.phase = Phase::Completed;
            debug!("final answer submitted, session is {}", self.phase);
            Some(Event::Submitted)
        }
    }

    /// Moves back to the previous question
    ///
    /// A no-op at the first question or once the session is completed; the
    /// shell disables the control in both cases.
    pub fn retreat(&mut self) -> Option<Event> {
        if self.phase == Phase::Completed || self.current_index == 0 {
            return None;
        }

        self.current_index -= 1;
        debug!("retreated to question {}", self.current_index);
        Some(Event::Retreated {
            index: self.current_index,
            transition: QUESTION_SWITCH,
        })
    }

    /// Counts the questions whose recorded answer is the correct one
    ///
    /// Pure over the configuration and the answer map, callable at any time;
    /// meaningful once the session is completed.
    pub fn score(&self) -> usize {
        self.quiz
            .questions()
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answers
                    .get(index)
                    .is_some_and(|answer| answer == question.correct_answer())
            })
            .count()
    }

    /// The score as a percentage of the question count
    ///
    /// Rounded to the nearest integer with ties rounding up, always in
    /// `[0, 100]`.
    pub fn percentage(&self) -> u8 {
        if self.quiz.is_empty() {
            return 0;
        }
        (self.score() as f64 * 100.0 / self.quiz.len() as f64).round() as u8
    }

    /// Resets the session to the first question with no recorded answers
    pub fn restart(&mut self) -> Event {
        self.current_index = 0;
        self.answers.clear();
        self.phase = Phase::InProgress;
        debug!("session restarted");
        Event::Restarted
    }

    /// Returns the quiz configuration being played
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Returns the number of questions
    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    /// Checks if the quiz contains any questions
    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    /// Position of the currently displayed question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question at the current position
    pub fn current_question(&self) -> Option<&crate::quiz::Question> {
        self.quiz.question(self.current_index)
    }

    /// The current phase of the session
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the final answer has been submitted
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The recorded answer at `index`, if any
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Whether the currently displayed question has a recorded answer
    pub fn has_answered_current(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    /// Whether the current question is the last one
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.quiz.len()
    }

    /// Whether the advance control should be enabled
    pub fn can_advance(&self) -> bool {
        self.phase == Phase::InProgress && self.has_answered_current()
    }

    /// Whether the retreat control should be enabled
    pub fn can_retreat(&self) -> bool {
        self.phase == Phase::InProgress && self.current_index > 0
    }

    /// Derives the screen the shell should render for the current state
    pub fn screen(&self) -> Screen {
        Screen::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_session() -> QuizSession {
        QuizSession::new(Quiz::demo())
    }

    fn answer_current_correctly(session: &mut QuizSession) {
        let correct = session
            .current_question()
            .map(|q| q.correct_answer().to_string())
            .unwrap();
        session.select_option(session.current_index(), correct);
    }

    #[test]
    fn test_initial_state() {
        let session = demo_session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(!session.is_completed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.percentage(), 0);
        assert!(!session.has_answered_current());
        assert!(!session.can_advance());
        assert!(!session.can_retreat());
    }

    #[test]
    fn test_select_option_records_answer() {
        let mut session = demo_session();
        let event = session.select_option(0, "Meow-Meow");
        assert_eq!(
            event,
            Some(Event::Selected {
                index: 0,
                option: "Meow-Meow".to_string(),
            })
        );
        assert_eq!(session.answer(0), Some("Meow-Meow"));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_select_option_overwrites_prior_answer() {
        let mut session = demo_session();
        session.select_option(0, "Bhau-Bhau");
        assert_eq!(session.score(), 0);

        session.select_option(0, "Meow-Meow");
        assert_eq!(session.answer(0), Some("Meow-Meow"));
        assert_eq!(session.score(), 1);
    }

    #[test]
    #[should_panic(expected = "is not an option of question")]
    fn test_select_option_unknown_option_is_contract_breach() {
        let mut session = demo_session();
        session.select_option(0, "Quack-Quack");
    }

    #[test]
    #[should_panic(expected = "is not an option of question")]
    fn test_select_option_out_of_range_is_contract_breach() {
        let mut session = demo_session();
        session.select_option(99, "Meow-Meow");
    }

    #[test]
    fn test_advance_without_answer_is_noop() {
        let mut session = demo_session();
        assert_eq!(session.advance(), None);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        assert!(session.can_advance());

        let event = session.advance();
        assert!(matches!(event, Some(Event::Advanced { index: 1, .. })));
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_completed());
    }

    #[test]
    fn test_advance_emits_transition_hint() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        let Some(Event::Advanced { transition, .. }) = session.advance() else {
            panic!("expected an Advanced event");
        };
        assert_eq!(transition, QUESTION_SWITCH);
    }

    #[test]
    fn test_advance_from_last_question_submits() {
        let mut session = demo_session();
        for _ in 0..3 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        assert!(session.is_last_question());
        answer_current_correctly(&mut session);

        assert_eq!(session.advance(), Some(Event::Submitted));
        assert!(session.is_completed());
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn test_completed_freezes_navigation() {
        let mut session = demo_session();
        for _ in 0..4 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        assert!(session.is_completed());

        assert_eq!(session.advance(), None);
        assert_eq!(session.retreat(), None);
        assert_eq!(session.current_index(), 3);
        assert!(!session.can_advance());
        assert!(!session.can_retreat());
    }

    #[test]
    fn test_completed_ignores_selection() {
        let mut session = demo_session();
        for _ in 0..4 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        let score_before = session.score();

        assert_eq!(session.select_option(0, "Bhau-Bhau"), None);
        assert_eq!(session.score(), score_before);
    }

    #[test]
    fn test_retreat_at_first_question_is_noop() {
        let mut session = demo_session();
        assert_eq!(session.retreat(), None);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_retreat_moves_back() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        session.advance();
        assert!(session.can_retreat());

        let event = session.retreat();
        assert!(matches!(event, Some(Event::Retreated { index: 0, .. })));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_retreat_preserves_answers() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        session.advance();
        session.retreat();
        assert_eq!(session.answer(0), Some("Meow-Meow"));
        assert!(session.has_answered_current());
    }

    #[test]
    fn test_score_bounds() {
        let mut session = demo_session();
        assert_eq!(session.score(), 0);

        for _ in 0..4 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        assert_eq!(session.score(), 4);
        assert_eq!(session.percentage(), 100);
    }

    #[test]
    fn test_all_incorrect_gives_zero_percent() {
        let mut session = demo_session();
        session.select_option(0, "Oink-Oink");
        session.advance();
        session.select_option(1, "Shoes");
        session.advance();
        session.select_option(2, "Two");
        session.advance();
        session.select_option(3, "Venus");
        session.advance();

        assert!(session.is_completed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.percentage(), 0);
    }

    #[test]
    fn test_three_of_four_gives_seventy_five_percent() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        session.advance();
        session.select_option(1, "Shoes");
        session.advance();
        session.select_option(2, "Infinite");
        session.advance();
        session.select_option(3, "Mars");
        session.advance();

        assert!(session.is_completed());
        assert_eq!(session.score(), 3);
        assert_eq!(session.percentage(), 75);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let quiz = Quiz::new(
            "Eighths",
            (0..8)
                .map(|i| crate::quiz::Question::new(i, format!("Q{i}"), ["Yes", "No"], "Yes"))
                .collect(),
        );
        let mut session = QuizSession::new(quiz);
        session.select_option(0, "Yes");
        // 1/8 = 12.5%, ties round up
        assert_eq!(session.percentage(), 13);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = demo_session();
        for _ in 0..4 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        assert!(session.is_completed());

        assert_eq!(session.restart(), Event::Restarted);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answer(0), None);
        assert!(!session.has_answered_current());
    }

    #[test]
    fn test_restart_midway_resets_everything() {
        let mut session = demo_session();
        session.select_option(0, "Meow-Meow");
        session.advance();
        session.select_option(1, "Ice Cream");

        session.restart();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answer(0), None);
        assert_eq!(session.answer(1), None);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_last_question_flag() {
        let mut session = demo_session();
        assert!(!session.is_last_question());
        for _ in 0..3 {
            answer_current_correctly(&mut session);
            session.advance();
        }
        assert!(session.is_last_question());
    }

    #[test]
    fn test_event_to_message() {
        let event = Event::Advanced {
            index: 2,
            transition: QUESTION_SWITCH,
        };
        let json = event.to_message();
        assert!(json.contains("Advanced"));
        assert!(json.contains("300"));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::InProgress.to_string(), "in progress");
        assert_eq!(Phase::Completed.to_string(), "completed");
    }
}
