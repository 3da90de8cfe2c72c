//! Error mapping and query helpers shared by the Diesel adapter.

use tracing::debug;

use crate::domain::ports::QuestionRepositoryError;

use super::pool::PoolError;

/// Escape character used in `ILIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Map pool failures to repository connection errors.
pub fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    QuestionRepositoryError::connection(error.into_message())
}

/// Map Diesel failures to repository errors.
///
/// Closed connections are reported as connection failures; everything else,
/// including constraint violations, is a query failure.
pub fn map_diesel_error(error: diesel::result::Error, operation: &str) -> QuestionRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(error = %error, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            QuestionRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            QuestionRepositoryError::query(format!("{operation}: foreign key violation"))
        }
        DieselError::NotFound => QuestionRepositoryError::query(format!("{operation}: not found")),
        _ => QuestionRepositoryError::query(format!("{operation}: database error")),
    }
}

/// Build a `%term%` pattern that matches `term` literally.
///
/// `%`, `_` and the escape character itself are prefixed with
/// [`LIKE_ESCAPE`].
///
/// # Examples
///
/// ```
/// use trivia_backend::outbound::persistence::contains_pattern;
///
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
