//! Diesel table definitions for the trivia schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Question categories. Seeded by the initial migration and never
    /// written by the service.
    categories (id) {
        id -> Int4,
        /// Display label. The column is called `type` in SQL.
        #[sql_name = "type"]
        label -> Text,
    }
}

diesel::table! {
    /// Trivia questions.
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        difficulty -> Int4,
        category -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));
diesel::allow_tables_to_appear_in_same_query!(categories, questions);
