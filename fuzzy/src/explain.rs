use crate::variables::{GreenCategory, Registry};
use serde::{Deserialize, Serialize};

/// Membership degree of a duration in each green-time category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDegrees {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl CategoryDegrees {
    #[must_use]
    pub const fn get(self, category: GreenCategory) -> f64 {
        match category {
            GreenCategory::Short => self.short,
            GreenCategory::Medium => self.medium,
            GreenCategory::Long => self.long,
        }
    }

    /// Category with the highest degree. Ties go to the first category in
    /// Short -> Medium -> Long order.
    #[must_use]
    pub fn dominant(self) -> GreenCategory {
        let mut best = GreenCategory::Short;
        for category in GreenCategory::ALL {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub degrees: CategoryDegrees,
    pub dominant: GreenCategory,
    pub text: String,
}

/// Re-evaluates the green-time membership of a computed duration and names
/// the dominant category.
#[must_use]
pub fn explain(registry: &Registry, duration: f64) -> Explanation {
    let d = registry.green_time.degrees(duration);
    let degrees = CategoryDegrees { short: d[0], medium: d[1], long: d[2] };
    let dominant = degrees.dominant();
    let text = format!(
        "Dominant category: {} -> result driven by the highest membership in this category.",
        dominant.to_string().to_uppercase()
    );
    Explanation { degrees, dominant, text }
}
