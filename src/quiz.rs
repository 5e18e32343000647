//! Quiz configuration and question management
//!
//! This module defines the immutable configuration of a quiz: the ordered
//! question list, its validation rules, and loading from JSON. A [`Quiz`] is
//! fixed at startup and never mutated; all progress lives in
//! [`crate::session::QuizSession`].

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single multiple-choice question
///
/// Each question carries a display id, the prompt text, an ordered list of
/// answer options, and the text of the correct option. The correct answer
/// must be one of the options; this cross-field rule is enforced by
/// [`Quiz::validate_content`] since it spans two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Display identifier shown next to the prompt (not a position)
    #[garde(skip)]
    pub(crate) id: u32,
    /// The question text presented to the user
    #[garde(length(min = crate::constants::question::MIN_PROMPT_LENGTH, max = crate::constants::question::MAX_PROMPT_LENGTH))]
    pub(crate) prompt: String,
    /// The ordered answer options for this question
    #[garde(
        length(min = crate::constants::question::MIN_OPTION_COUNT, max = crate::constants::question::MAX_OPTION_COUNT),
        inner(length(min = 1, max = crate::constants::question::MAX_OPTION_LENGTH))
    )]
    pub(crate) options: Vec<String>,
    /// The text of the correct option
    #[garde(length(min = 1, max = crate::constants::question::MAX_OPTION_LENGTH))]
    pub(crate) correct_answer: String,
}

impl Question {
    /// Creates a question from its parts
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map_into().collect_vec(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Returns the display identifier of this question
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered answer options
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the text of the correct option
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Checks whether `option` is one of this question's options
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// A complete quiz configuration containing the title and all questions
///
/// This is the static configuration supplied at startup. It is validated
/// once, handed to a session, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Quiz {
    /// The title of the quiz shown above the question card
    #[garde(length(max = crate::constants::quiz::MAX_TITLE_LENGTH))]
    pub(crate) title: String,

    /// The ordered questions of the quiz
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_QUESTION_COUNT), dive)]
    pub(crate) questions: Vec<Question>,
}

/// Errors that can occur while loading or validating a quiz configuration
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration was not valid JSON
    #[error("malformed quiz configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// One or more fields violated the configured bounds
    #[error("invalid quiz configuration: {0}")]
    Invalid(#[from] garde::Report),
    /// A question's correct answer is not among its options
    #[error("question {id}: correct answer {answer:?} is not one of the options")]
    UnknownCorrectAnswer {
        /// Display id of the offending question
        id: u32,
        /// The correct answer text that matched no option
        answer: String,
    },
    /// A question lists the same option more than once
    #[error("question {id}: duplicate option {option:?}")]
    DuplicateOption {
        /// Display id of the offending question
        id: u32,
        /// The repeated option text
        option: String,
    },
}

impl Quiz {
    /// Creates a quiz from a title and its questions
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Loads and fully validates a quiz from its JSON representation
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not valid JSON,
    /// [`Error::Invalid`] if a bound is violated, or one of the consistency
    /// errors from [`Quiz::validate_content`].
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let quiz: Self = serde_json::from_str(input)?;
        quiz.validate_content()?;
        Ok(quiz)
    }

    /// Validates bounds and cross-field consistency of the configuration
    ///
    /// Beyond the derived field bounds, every question must list each option
    /// at most once and its correct answer must be one of its options.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate_content(&self) -> Result<(), Error> {
        self.validate()?;

        for question in &self.questions {
            if let Some(option) = question.options.iter().duplicates().next() {
                return Err(Error::DuplicateOption {
                    id: question.id,
                    option: option.clone(),
                });
            }
            if !question.has_option(&question.correct_answer) {
                return Err(Error::UnknownCorrectAnswer {
                    id: question.id,
                    answer: question.correct_answer.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns the quiz title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered questions
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at `index`, if any
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns the number of questions in this quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if this quiz contains any questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The built-in demonstration quiz
    ///
    /// A four-question general-knowledge deck, handy for shells that want
    /// content without wiring up configuration loading.
    pub fn demo() -> Self {
        Self::new(
            "Test Your Knowledge",
            vec![
                Question::new(
                    1,
                    "What sound does a cat make?",
                    ["Bhau-Bhau", "Meow-Meow", "Oink-Oink"],
                    "Meow-Meow",
                ),
                Question::new(
                    2,
                    "What would you probably find in your fridge?",
                    ["Shoes", "Ice Cream", "Books"],
                    "Ice Cream",
                ),
                Question::new(
                    3,
                    "How many stars are in the sky?",
                    ["Two", "Infinite", "One Hundred"],
                    "Infinite",
                ),
                Question::new(
                    4,
                    "Which planet is known as the Red Planet?",
                    ["Venus", "Mars", "Jupiter"],
                    "Mars",
                ),
            ],
        )
    }
}
