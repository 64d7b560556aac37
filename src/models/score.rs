//! Groove Score models.
//!
//! These types describe a staff member's weekly performance: the raw
//! per-location category scores going in, the category weights, and the
//! blended [`WeeklyScore`] coming out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the four scored performance categories.
///
/// # Example
///
/// ```
/// use groove_engine::models::ScoreCategory;
///
/// assert_eq!(ScoreCategory::ALL.len(), 4);
/// assert_eq!(ScoreCategory::TaskEfficiency.to_string(), "task_efficiency");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// Shifts attended versus scheduled.
    Attendance,
    /// Clock-ins on time versus total clock-ins.
    Punctuality,
    /// Tasks completed within their estimate.
    TaskEfficiency,
    /// Average customer review rating, as a percentage.
    CustomerReviews,
}

impl ScoreCategory {
    /// Every category, in display order.
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Attendance,
        ScoreCategory::Punctuality,
        ScoreCategory::TaskEfficiency,
        ScoreCategory::CustomerReviews,
    ];
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreCategory::Attendance => write!(f, "attendance"),
            ScoreCategory::Punctuality => write!(f, "punctuality"),
            ScoreCategory::TaskEfficiency => write!(f, "task_efficiency"),
            ScoreCategory::CustomerReviews => write!(f, "customer_reviews"),
        }
    }
}

/// Raw category percentages observed for one week.
///
/// Each value must lie in `[0, 100]`; values may be fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Attendance percentage.
    pub attendance: Decimal,
    /// Punctuality percentage.
    pub punctuality: Decimal,
    /// Task efficiency percentage.
    pub task_efficiency: Decimal,
    /// Customer review percentage.
    pub customer_reviews: Decimal,
}

impl CategoryScores {
    /// Returns the value recorded for `category`.
    pub fn get(&self, category: ScoreCategory) -> Decimal {
        match category {
            ScoreCategory::Attendance => self.attendance,
            ScoreCategory::Punctuality => self.punctuality,
            ScoreCategory::TaskEfficiency => self.task_efficiency,
            ScoreCategory::CustomerReviews => self.customer_reviews,
        }
    }
}

/// A staff member's category scores at a single location for one week.
///
/// # Example
///
/// ```
/// use groove_engine::models::{CategoryScores, LocationScoreBreakdown, ScoreCategory};
/// use rust_decimal::Decimal;
///
/// let breakdown = LocationScoreBreakdown {
///     location_id: "loc_north".to_string(),
///     days_worked: 3,
///     scores: CategoryScores {
///         attendance: Decimal::from(100),
///         punctuality: Decimal::from(75),
///         task_efficiency: Decimal::from(80),
///         customer_reviews: Decimal::from(90),
///     },
/// };
/// assert_eq!(breakdown.scores.get(ScoreCategory::Punctuality), Decimal::from(75));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationScoreBreakdown {
    /// The location these scores were observed at.
    pub location_id: String,
    /// Days worked at this location; the weight of this breakdown.
    pub days_worked: u32,
    /// The category values observed at this location.
    pub scores: CategoryScores,
}

/// Integer percentage weight per category. Must sum to exactly 100.
///
/// The default is the stock weighting shown on the settings screen:
/// attendance 30, punctuality 30, task efficiency 20, customer reviews 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the attendance category.
    pub attendance: u32,
    /// Weight of the punctuality category.
    pub punctuality: u32,
    /// Weight of the task efficiency category.
    pub task_efficiency: u32,
    /// Weight of the customer reviews category.
    pub customer_reviews: u32,
}

impl ScoreWeights {
    /// Returns the weight for `category`.
    pub fn get(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Attendance => self.attendance,
            ScoreCategory::Punctuality => self.punctuality,
            ScoreCategory::TaskEfficiency => self.task_efficiency,
            ScoreCategory::CustomerReviews => self.customer_reviews,
        }
    }

    /// Returns the sum of all four weights.
    pub fn total(&self) -> u64 {
        ScoreCategory::ALL
            .iter()
            .map(|c| u64::from(self.get(*c)))
            .sum()
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            attendance: 30,
            punctuality: 30,
            task_efficiency: 20,
            customer_reviews: 20,
        }
    }
}

/// The blended weekly Groove Score for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScore {
    /// Blended attendance percentage.
    pub attendance: u32,
    /// Blended punctuality percentage.
    pub punctuality: u32,
    /// Blended task efficiency percentage.
    pub task_efficiency: u32,
    /// Blended customer review percentage.
    pub customer_reviews: u32,
    /// The weighted total across all categories.
    pub total_score: u32,
    /// Days worked across all locations.
    pub total_days_worked: u32,
    /// Number of location breakdowns blended.
    pub location_count: usize,
}

impl WeeklyScore {
    /// Returns the blended value for `category`.
    pub fn category(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Attendance => self.attendance,
            ScoreCategory::Punctuality => self.punctuality,
            ScoreCategory::TaskEfficiency => self.task_efficiency,
            ScoreCategory::CustomerReviews => self.customer_reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(ScoreWeights::default().total(), 100);
    }

    #[test]
    fn test_weights_total_does_not_overflow() {
        let weights = ScoreWeights {
            attendance: u32::MAX,
            punctuality: u32::MAX,
            task_efficiency: 0,
            customer_reviews: 0,
        };
        assert_eq!(weights.total(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ScoreCategory::CustomerReviews).unwrap();
        assert_eq!(json, "\"customer_reviews\"");
    }

    #[test]
    fn test_breakdown_deserializes_string_and_number_scores() {
        let json = r#"{
            "location_id": "loc_south",
            "days_worked": 2,
            "scores": {
                "attendance": "80",
                "punctuality": 85,
                "task_efficiency": "70.5",
                "customer_reviews": 100
            }
        }"#;

        let breakdown: LocationScoreBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.days_worked, 2);
        assert_eq!(breakdown.scores.attendance, Decimal::from(80));
        assert_eq!(breakdown.scores.task_efficiency, Decimal::new(705, 1));
    }

    #[test]
    fn test_weekly_score_category_lookup() {
        let score = WeeklyScore {
            attendance: 92,
            punctuality: 79,
            task_efficiency: 76,
            customer_reviews: 94,
            total_score: 85,
            total_days_worked: 5,
            location_count: 2,
        };

        let values: Vec<u32> = ScoreCategory::ALL.iter().map(|c| score.category(*c)).collect();
        assert_eq!(values, vec![92, 79, 76, 94]);
    }
}
