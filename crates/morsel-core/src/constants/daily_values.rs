// ABOUTME: FDA reference daily values used as the generic %DV fallback
// ABOUTME: Looked up by lowercased nutrient name when no supplied %DV exists

//! FDA reference daily values.
//!
//! Used only as a fallback: a nutrient's supplied `percentDailyValue`
//! always wins when present and positive. The table stores the adult
//! reference amount and its unit; the ratio is only taken when the
//! analyzed nutrient reports the same unit.

/// A reference daily value entry
#[derive(Debug, Clone, Copy)]
pub struct DailyValue {
    /// Lowercased nutrient name this entry matches
    pub name: &'static str,
    /// Reference daily amount
    pub amount: f64,
    /// Unit of the reference amount
    pub unit: &'static str,
    /// Whether intake of this nutrient should be limited, not maximized
    pub is_limit: bool,
}

const fn dv(name: &'static str, amount: f64, unit: &'static str) -> DailyValue {
    DailyValue {
        name,
        amount,
        unit,
        is_limit: false,
    }
}

const fn dv_limit(name: &'static str, amount: f64, unit: &'static str) -> DailyValue {
    DailyValue {
        name,
        amount,
        unit,
        is_limit: true,
    }
}

/// FDA reference daily values, including common aliases
pub const FDA_DAILY_VALUES: &[DailyValue] = &[
    // Macronutrients
    dv("protein", 50.0, "g"),
    dv("carbohydrates", 275.0, "g"),
    dv("carbs", 275.0, "g"),
    dv("total carbohydrate", 275.0, "g"),
    dv("fat", 78.0, "g"),
    dv("total fat", 78.0, "g"),
    dv_limit("saturated fat", 20.0, "g"),
    dv("dietary fiber", 28.0, "g"),
    dv("fiber", 28.0, "g"),
    dv_limit("sugar", 50.0, "g"),
    dv_limit("total sugar", 50.0, "g"),
    dv_limit("added sugar", 50.0, "g"),
    dv_limit("cholesterol", 300.0, "mg"),
    // Minerals
    dv_limit("sodium", 2300.0, "mg"),
    dv("potassium", 4700.0, "mg"),
    dv("calcium", 1300.0, "mg"),
    dv("iron", 18.0, "mg"),
    dv("phosphorus", 1250.0, "mg"),
    dv("magnesium", 420.0, "mg"),
    dv("zinc", 11.0, "mg"),
    dv("copper", 0.9, "mg"),
    dv("manganese", 2.3, "mg"),
    dv("selenium", 55.0, "mcg"),
    dv("chromium", 35.0, "mcg"),
    dv("molybdenum", 45.0, "mcg"),
    dv("chloride", 2300.0, "mg"),
    dv("iodine", 150.0, "mcg"),
    // Vitamins
    dv("vitamin a", 900.0, "mcg"),
    dv("vitamin c", 90.0, "mg"),
    dv("vitamin d", 20.0, "mcg"),
    dv("vitamin e", 15.0, "mg"),
    dv("vitamin k", 120.0, "mcg"),
    dv("thiamin", 1.2, "mg"),
    dv("riboflavin", 1.3, "mg"),
    dv("niacin", 16.0, "mg"),
    dv("vitamin b6", 1.7, "mg"),
    dv("folate", 400.0, "mcg"),
    dv("folic acid", 400.0, "mcg"),
    dv("vitamin b12", 2.4, "mcg"),
    dv("biotin", 30.0, "mcg"),
    dv("pantothenic acid", 5.0, "mg"),
    dv("choline", 550.0, "mg"),
    // Common aliases
    dv("vit a", 900.0, "mcg"),
    dv("vit c", 90.0, "mg"),
    dv("vit d", 20.0, "mcg"),
    dv("vit e", 15.0, "mg"),
    dv("vit k", 120.0, "mcg"),
    dv("vitamin b1", 1.2, "mg"),
    dv("vitamin b2", 1.3, "mg"),
    dv("vitamin b3", 16.0, "mg"),
    dv("vit b6", 1.7, "mg"),
    dv("vit b12", 2.4, "mcg"),
];

/// Look up the reference daily value for a nutrient name.
///
/// Matching is by exact lowercased, trimmed name.
#[must_use]
pub fn reference_daily_value(name: &str) -> Option<&'static DailyValue> {
    let needle = name.trim().to_lowercase();
    FDA_DAILY_VALUES.iter().find(|entry| entry.name == needle)
}
