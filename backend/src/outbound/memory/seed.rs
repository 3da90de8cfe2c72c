//! Sample trivia used by the in-memory store.
//!
//! Mirrors the rows inserted by the database seed migrations.

use crate::domain::{Category, CategoryId, NewQuestion};

const CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

const QUESTIONS: [(&str, &str, i32, i32); 19] = [
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        4,
        1,
    ),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        1,
        2,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    (
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        4,
        2,
    ),
    (
        "Which American artist was a pioneer of Abstract Expressionism and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        2,
        4,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    (
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        5,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        4,
        5,
    ),
    (
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        3,
        5,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        3,
        6,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        4,
        6,
    ),
];

/// The six seeded categories, ordered by id.
pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, label)| Category::new(CategoryId::new(id), label))
        .collect()
}

/// The seeded questions in insertion order.
pub(super) fn questions() -> Vec<NewQuestion> {
    QUESTIONS
        .iter()
        .map(|&(question, answer, difficulty, category)| NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            difficulty,
            category: CategoryId::new(category),
        })
        .collect()
}
