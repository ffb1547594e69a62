use serde::Serialize;

use crate::card::Card;

pub const FALLBACK_CATEGORY: &str = "Other";

const SEPARATORS: [&str; 3] = [" - ", " | ", ": "];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category<'a> {
    pub name: String,
    pub cards: Vec<&'a Card>,
}

/// Category of a title: the text before its earliest separator.
pub fn category_of(title: &str) -> &str {
    SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .map(|at| title[..at].trim())
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Partitions cards by title prefix. Categories appear in order of first
/// use and keep deck order inside.
pub fn group_by_category(cards: &[Card]) -> Vec<Category<'_>> {
    let mut categories: Vec<Category<'_>> = Vec::new();
    for card in cards {
        let name = category_of(&card.title);
        match categories.iter_mut().find(|c| c.name == name) {
            Some(category) => category.cards.push(card),
            None => categories.push(Category {
                name: name.to_string(),
                cards: vec![card],
            }),
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> Card {
        Card::new(title, "https://example.com", "thumb.png", false)
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("Trailers - OG Teaser"), "Trailers");
        assert_eq!(category_of("Songs | Firestorm"), "Songs");
        assert_eq!(category_of("Interviews: Director"), "Interviews");
        assert_eq!(category_of("Songs | Live - Part 2"), "Songs");
        assert_eq!(category_of("Standalone"), FALLBACK_CATEGORY);
        assert_eq!(category_of(" - leading separator"), FALLBACK_CATEGORY);
        assert_eq!(category_of("Spider-Man"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_grouping_keeps_first_appearance_order() {
        let cards = vec![
            card("Songs - One"),
            card("Trailers - Teaser"),
            card("Loose"),
            card("Songs - Two"),
        ];
        let groups = group_by_category(&cards);
        let names: Vec<&str> = groups.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Songs", "Trailers", "Other"]);

        let songs: Vec<&str> = groups[0].cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(songs, vec!["Songs - One", "Songs - Two"]);
    }

    #[test]
    fn test_empty_deck_has_no_categories() {
        assert!(group_by_category(&[]).is_empty());
    }
}
