//! Learning categories shown on the dashboard.

use serde::Serialize;

/// A dashboard category. The id doubles as the route segment; the title is
/// the display name fed into greetings and reply synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed category catalog.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "hindi",
        title: "Hindi",
        description:
            "Explore classic literature, grammar, and linguistic heritage of Northern India.",
    },
    Category {
        id: "english",
        title: "English",
        description:
            "Master global communication with literature analysis and writing proficiency.",
    },
    Category {
        id: "maths",
        title: "Maths",
        description: "Solve complex problems using advanced calculus, algebra, and geometry.",
    },
    Category {
        id: "science",
        title: "Science",
        description: "Uncover the laws of physics, chemical reactions, and biological wonders.",
    },
    Category {
        id: "history",
        title: "History",
        description:
            "Journey through time and understand the civilizations that shaped our world.",
    },
    Category {
        id: "other",
        title: "Other",
        description: "Access miscellaneous learning resources and interdisciplinary studies.",
    },
];

/// Look up a category by id.
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Display name for a category id, falling back to the raw id for unknown
/// categories so the greeting still reads sensibly.
pub fn display_name(id: &str) -> String {
    match find(id) {
        Some(category) => category.title.to_string(),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_category() {
        let maths = find("maths").unwrap();
        assert_eq!(maths.title, "Maths");
    }

    #[test]
    fn find_unknown_returns_none() {
        assert!(find("philosophy").is_none());
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        assert_eq!(display_name("science"), "Science");
        assert_eq!(display_name("philosophy"), "philosophy");
    }
}
