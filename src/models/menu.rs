use serde::{Deserialize, Serialize};

use super::{CuisineOrigin, Dish};

/// Target share of the menu per cuisine origin.
///
/// For a non-empty attendee mix the three fractions sum to 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CuisineProportions {
    pub south_indian: f64,
    pub north_indian: f64,
    pub universal: f64,
}

impl CuisineProportions {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, origin: CuisineOrigin) -> f64 {
        match origin {
            CuisineOrigin::SouthIndian => self.south_indian,
            CuisineOrigin::NorthIndian => self.north_indian,
            CuisineOrigin::Universal => self.universal,
        }
    }

    pub fn sum(&self) -> f64 {
        self.south_indian + self.north_indian + self.universal
    }
}

/// A selected dish together with how much of it to prepare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecommendation {
    pub dish: Dish,
    pub quantity: f64,
    pub quantity_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_tip: Option<String>,
}

/// Output of one engine run. Dishes are kept in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecommendation {
    pub dishes: Vec<DishRecommendation>,
    pub cuisine_proportions: CuisineProportions,
}

impl MenuRecommendation {
    pub fn empty() -> Self {
        Self {
            dishes: Vec::new(),
            cuisine_proportions: CuisineProportions::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
