//! Deterministic keyword rules mapping free text to a spending Category.
//!
//! Keywords are plain substring tests on the lower-cased text, so "food"
//! also fires inside "foodie". The table order is the tie-break order.

use smartpocket_core::Category;
use tracing::trace;

/// Keyword table, in tie-break order. `Other` has no keywords and is only
/// ever chosen as the fallback.
pub static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["food", "snacks", "lunch", "dinner", "restaurant", "cafe", "pizza", "burger"],
    ),
    (
        Category::Entertainment,
        &["movie", "game", "cinema", "music", "concert", "entertainment"],
    ),
    (
        Category::Transport,
        &["bus", "train", "taxi", "uber", "transport", "fuel", "parking"],
    ),
    (
        Category::Shopping,
        &["clothes", "shoes", "shopping", "mall", "store", "purchase"],
    ),
    (
        Category::Education,
        &["books", "school", "course", "education", "tuition", "supplies"],
    ),
    (
        Category::Health,
        &["medicine", "doctor", "hospital", "health", "pharmacy"],
    ),
];

/// Result of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// Number of the winning category's keywords found in the text
    pub match_count: usize,
}

/// Pick the category with the most keyword hits.
/// Ties keep the earlier category; no hits at all yields `Other`.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();
    let mut best = Classification {
        category: Category::Other,
        match_count: 0,
    };

    for (category, keywords) in CATEGORY_KEYWORDS {
        let hits = keywords.iter().filter(|k| lower.contains(*k)).count();
        if hits > best.match_count {
            best = Classification {
                category: *category,
                match_count: hits,
            };
        }
    }

    trace!(category = %best.category, matches = best.match_count, "classified");
    best
}

pub fn glyph_for(category: Category) -> &'static str {
    category.glyph()
}

/// Glyph for a category given by name; unknown names get the `other` glyph.
pub fn glyph_for_key(key: &str) -> &'static str {
    key.parse::<Category>()
        .unwrap_or(Category::Other)
        .glyph()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunch_is_food() {
        let c = classify("I spent 100 on LUNCH");
        assert_eq!(c.category, Category::Food);
        assert_eq!(c.match_count, 1);
    }

    #[test]
    fn test_no_keywords_is_other() {
        for text in ["", "hello there", "500 rupees", "sent it to my friend"] {
            assert_eq!(
                classify(text),
                Classification { category: Category::Other, match_count: 0 },
                "text: {text:?}"
            );
        }
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        // "food" inside "foodie"
        assert_eq!(classify("foodie meetup").category, Category::Food);
        // "bus" inside "business"
        assert_eq!(classify("business card").category, Category::Transport);
    }

    #[test]
    fn test_highest_count_wins() {
        // shopping: mall + shoes (2) beats food: snacks (1)
        let c = classify("snacks and shoes at the mall");
        assert_eq!(c.category, Category::Shopping);
        assert_eq!(c.match_count, 2);
    }

    #[test]
    fn test_tie_keeps_first_category() {
        // food: pizza (1), entertainment: movie (1)
        let c = classify("pizza and a movie");
        assert_eq!(c.category, Category::Food);
        assert_eq!(c.match_count, 1);

        // transport: taxi (1), health: doctor (1)
        assert_eq!(classify("taxi to the doctor").category, Category::Transport);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Bought books and course supplies for school";
        let first = classify(text);
        for _ in 0..5 {
            assert_eq!(classify(text), first);
        }
        assert_eq!(first.category, Category::Education);
        assert_eq!(first.match_count, 4);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph_for(Category::Transport), "🚌");
        assert_eq!(glyph_for(Category::Other), "💰");
        assert_eq!(glyph_for_key("health"), "🏥");
        assert_eq!(glyph_for_key("crypto"), "💰");
    }

    #[test]
    fn test_other_has_no_keywords() {
        assert!(CATEGORY_KEYWORDS.iter().all(|(c, _)| *c != Category::Other));
    }
}
