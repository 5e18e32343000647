//! View-model derivation for rendering shells
//!
//! The widget's visual parts (progress bar, option buttons, navigation
//! controls, result screen) carry no logic of their own: everything they
//! display is a pure projection of [`QuizSession`] state. This module
//! derives those projections as a serializable [`Screen`] so a shell can
//! render without recomputing any quiz rules.

use itertools::Itertools;
use serde::Serialize;

use crate::session::QuizSession;

/// One option button of the question screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    /// The option text shown on the button
    pub label: String,
    /// Whether this option is the recorded answer for the question
    pub selected: bool,
}

/// The screen a shell should render for the current session state
///
/// A session is always on exactly one of two screens, selected by its phase:
/// the question screen while in progress, the result screen once completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Screen {
    /// The question card with its options and navigation controls
    Question {
        /// Position of the displayed question (0-based, drives the progress bar)
        index: usize,
        /// Total number of questions (drives the progress bar)
        count: usize,
        /// Display identifier shown next to the prompt
        id: u32,
        /// The question text
        prompt: String,
        /// The option buttons with their selection highlight
        options: Vec<OptionView>,
        /// Whether the back control is enabled
        can_retreat: bool,
        /// Whether the next/submit control is enabled
        can_advance: bool,
        /// Whether the forward control reads Submit instead of Next
        last: bool,
    },
    /// The result card with the final score and a restart control
    Result {
        /// Number of correctly answered questions
        score: usize,
        /// Total number of questions
        total: usize,
        /// Rounded score percentage in `[0, 100]`
        percentage: u8,
    },
}

impl Screen {
    /// Derives the screen for the current state of `session`
    pub fn of(session: &QuizSession) -> Self {
        if session.is_completed() {
            return Self::Result {
                score: session.score(),
                total: session.len(),
                percentage: session.percentage(),
            };
        }

        let index = session.current_index();
        let selected = session.answer(index);
        let question = session
            .current_question()
            .expect("current index stays within the question list");

        Self::Question {
            index,
            count: session.len(),
            id: question.id(),
            prompt: question.prompt().to_string(),
            options: question
                .options()
                .iter()
                .map(|label| OptionView {
                    label: label.clone(),
                    selected: selected == Some(label.as_str()),
                })
                .collect_vec(),
            can_retreat: session.can_retreat(),
            can_advance: session.can_advance(),
            last: session.is_last_question(),
        }
    }

    /// Converts the screen to a JSON string for the rendering shell
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}
