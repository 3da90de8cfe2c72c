//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; the repository converts them into
//! domain types before returning.

use diesel::prelude::*;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::schema::{categories, questions};

/// Row read from the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub label: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self::new(CategoryId::new(row.id), row.label)
    }
}

/// Row read from the `questions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: QuestionId::new(row.id),
            question: row.question,
            answer: row.answer,
            difficulty: row.difficulty,
            category: CategoryId::new(row.category),
        }
    }
}

/// Insertable question; the id comes from the table's sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
    pub category: i32,
}

impl<'a> From<&'a NewQuestion> for NewQuestionRow<'a> {
    fn from(draft: &'a NewQuestion) -> Self {
        Self {
            question: &draft.question,
            answer: &draft.answer,
            difficulty: draft.difficulty,
            category: draft.category.get(),
        }
    }
}
