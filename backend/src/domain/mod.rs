//! Trivia domain: entities, errors, ports, and the service implementing the
//! driving ports.
//!
//! Public surface:
//! - [`Question`], [`NewQuestion`], [`Category`] and their id newtypes.
//! - [`QuizRequest`], [`QuizCategory`], [`QuizOutcome`] for quiz rounds.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`TriviaService`]: use cases over a [`ports::QuestionRepository`].

pub mod error;
pub mod ports;
mod quiz;
mod trace_id;
mod trivia;
mod trivia_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::quiz::{EXHAUSTED_QUESTION_MARKER, QuizCategory, QuizOutcome, QuizRequest};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trivia::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use self::trivia_service::TriviaService;
