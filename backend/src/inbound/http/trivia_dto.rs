//! Response payloads shared by the trivia endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, EXHAUSTED_QUESTION_MARKER, Question};

/// A question as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionBody {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    #[schema(example = 2)]
    pub difficulty: i32,
    #[schema(example = 4)]
    pub category: i32,
}

impl QuestionBody {
    /// Placeholder reported once a quiz round has no questions left.
    pub fn exhausted() -> Self {
        Self {
            id: 0,
            question: EXHAUSTED_QUESTION_MARKER.to_owned(),
            answer: String::new(),
            difficulty: 0,
            category: 0,
        }
    }
}

impl From<Question> for QuestionBody {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.get(),
            question: question.question,
            answer: question.answer,
            difficulty: question.difficulty,
            category: question.category.get(),
        }
    }
}

pub(crate) fn question_bodies(questions: Vec<Question>) -> Vec<QuestionBody> {
    questions.into_iter().map(QuestionBody::from).collect()
}

/// Category labels keyed by id. Serialises as a JSON object whose keys are
/// the stringified ids, in ascending id order.
pub type CategoryMap = BTreeMap<i32, String>;

pub(crate) fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id.get(), category.label))
        .collect()
}
