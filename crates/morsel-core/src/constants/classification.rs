// ABOUTME: Keyword classifiers for nutrient bucketing and cuisine affinity scoring
// ABOUTME: Immutable tables consumed by the bucketizer and the pattern miner

//! Keyword classification tables.
//!
//! Nutrient bucketing checks the vitamin list before the mineral list;
//! some names would otherwise double-match. Cuisine scoring iterates the
//! taxonomy in declaration order, which is also the tie-break order for
//! equal scores.

/// Substring keywords identifying vitamins (checked before minerals)
pub const VITAMIN_KEYWORDS: &[&str] = &[
    "vitamin",
    "thiamine",
    "riboflavin",
    "niacin",
    "folate",
    "biotin",
];

/// Substring keywords identifying minerals
pub const MINERAL_KEYWORDS: &[&str] = &[
    "calcium",
    "iron",
    "zinc",
    "magnesium",
    "potassium",
    "phosphorus",
    "selenium",
    "copper",
    "manganese",
];

/// Substring keywords identifying nutrients that should be limited rather
/// than maximized
pub const LIMIT_NUTRIENT_KEYWORDS: &[&str] = &[
    "sodium",
    "saturated fat",
    "trans fat",
    "cholesterol",
    "added sugar",
    "sugar",
];

/// A cuisine with its identifying ingredient keywords
#[derive(Debug, Clone, Copy)]
pub struct CuisineKeywords {
    /// Display name of the cuisine
    pub name: &'static str,
    /// Ingredient substrings that count toward this cuisine's score
    pub keywords: &'static [&'static str],
}

/// Fixed five-cuisine taxonomy, in declaration (tie-break) order
pub const CUISINE_TAXONOMY: &[CuisineKeywords] = &[
    CuisineKeywords {
        name: "Italian",
        keywords: &["pasta", "pizza", "tomato", "basil", "mozzarella", "parmesan"],
    },
    CuisineKeywords {
        name: "Asian",
        keywords: &["rice", "soy", "ginger", "sesame", "noodles", "tofu"],
    },
    CuisineKeywords {
        name: "Mexican",
        keywords: &["beans", "avocado", "cilantro", "lime", "peppers", "salsa"],
    },
    CuisineKeywords {
        name: "Mediterranean",
        keywords: &["olive oil", "feta", "olives", "hummus", "quinoa", "chickpeas"],
    },
    CuisineKeywords {
        name: "American",
        keywords: &["burger", "fries", "chicken", "beef", "cheese", "bacon"],
    },
];
