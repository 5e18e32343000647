//! Configuration constants for the quiz widget
//!
//! This module contains the configuration limits and presentation timing
//! constants used throughout the crate to ensure data integrity and
//! provide consistent boundaries for quiz content.

/// Quiz-level configuration constants
pub mod quiz {
    /// Maximum number of questions allowed in a single quiz
    pub const MAX_QUESTION_COUNT: usize = 100;
    /// Maximum length of a quiz title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
}

/// Question-level configuration constants
pub mod question {
    /// Minimum length of a question prompt
    pub const MIN_PROMPT_LENGTH: usize = 1;
    /// Maximum length of a question prompt
    pub const MAX_PROMPT_LENGTH: usize = 200;
    /// Minimum number of answer options for a question
    pub const MIN_OPTION_COUNT: usize = 2;
    /// Maximum number of answer options for a question
    pub const MAX_OPTION_COUNT: usize = 8;
    /// Maximum length of a single answer option in characters
    pub const MAX_OPTION_LENGTH: usize = 200;
}

/// Presentation timing constants
///
/// These affect only how a rendering shell paces its transitions; they have
/// no effect on session state.
pub mod transition {
    use std::time::Duration;

    /// Cosmetic deferral applied by shells when switching between questions
    pub const QUESTION_SWITCH: Duration = Duration::from_millis(300);
}
