//! Quiz round types.
//!
//! A quiz round asks for one question at a time. The client remembers which
//! questions it has already shown and sends them back with every request;
//! the service keeps no per-quiz state.

use std::collections::BTreeSet;

use super::{CategoryId, Question, QuestionId};

/// Question text reported to clients once a quiz has run out of questions.
pub const EXHAUSTED_QUESTION_MARKER: &str = "none";

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Every category.
    All,
    /// A single category.
    Only(CategoryId),
}

impl QuizCategory {
    /// The category filter to apply, if any.
    #[must_use]
    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id),
        }
    }
}

/// Request for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    previous_questions: BTreeSet<QuestionId>,
    category: QuizCategory,
}

impl QuizRequest {
    /// Build a request; duplicate previous ids collapse.
    ///
    /// # Examples
    /// ```
    /// use trivia_backend::domain::{QuestionId, QuizCategory, QuizRequest};
    ///
    /// let request = QuizRequest::new(
    ///     [QuestionId::new(4), QuestionId::new(4), QuestionId::new(9)],
    ///     QuizCategory::All,
    /// );
    /// assert_eq!(request.previous_questions().len(), 2);
    /// ```
    pub fn new(
        previous_questions: impl IntoIterator<Item = QuestionId>,
        category: QuizCategory,
    ) -> Self {
        Self {
            previous_questions: previous_questions.into_iter().collect(),
            category,
        }
    }

    /// Questions already asked in this round.
    pub fn previous_questions(&self) -> &BTreeSet<QuestionId> {
        &self.previous_questions
    }

    /// Category scope of the round.
    pub fn category(&self) -> QuizCategory {
        self.category
    }

    /// Whether `question` is still eligible for this round.
    pub fn admits(&self, question: &Question) -> bool {
        !self.previous_questions.contains(&question.id)
            && self
                .category
                .category_id()
                .is_none_or(|category| question.category == category)
    }
}

/// Result of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question that has not been asked yet.
    Found(Question),
    /// Every eligible question has been asked.
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id: QuestionId::new(id),
            question: format!("question {id}"),
            answer: "answer".to_owned(),
            difficulty: 1,
            category: CategoryId::new(category),
        }
    }

    #[rstest]
    #[case(QuizCategory::All, 5, 1, true)]
    #[case(QuizCategory::All, 2, 1, false)]
    #[case(QuizCategory::Only(CategoryId::new(1)), 5, 1, true)]
    #[case(QuizCategory::Only(CategoryId::new(1)), 5, 4, false)]
    #[case(QuizCategory::Only(CategoryId::new(1)), 2, 1, false)]
    fn admits_respects_previous_set_and_category(
        #[case] category: QuizCategory,
        #[case] id: i32,
        #[case] question_category: i32,
        #[case] expected: bool,
    ) {
        let request = QuizRequest::new([QuestionId::new(2), QuestionId::new(3)], category);
        assert_eq!(request.admits(&question(id, question_category)), expected);
    }

    #[rstest]
    fn category_id_is_none_for_all() {
        assert_eq!(QuizCategory::All.category_id(), None);
        assert_eq!(
            QuizCategory::Only(CategoryId::new(6)).category_id(),
            Some(CategoryId::new(6))
        );
    }
}
