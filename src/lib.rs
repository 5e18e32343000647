//! # Stepquiz
//!
//! This library provides the state core of a single-page multiple-choice
//! quiz widget. It holds the fixed question sequence, tracks the user's
//! selections while they step back and forth through the questions, computes
//! the final percentage score, and derives the screens a rendering shell
//! should display, including the result screen with its restart control.
//!
//! The crate is purely reactive: every transition is a synchronous response
//! to one user action, there is no background work and nothing is persisted.
//!
//! ```
//! use stepquiz::{Quiz, QuizSession, Screen};
//!
//! let mut session = QuizSession::new(Quiz::demo());
//! session.select_option(0, "Meow-Meow");
//! session.advance();
//! assert!(matches!(session.screen(), Screen::Question { index: 1, .. }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_panics_doc)]

pub mod constants;
pub mod quiz;
pub mod screen;
pub mod session;

pub use quiz::{Question, Quiz};
pub use screen::{OptionView, Screen};
pub use session::{Event, Phase, QuizSession};
