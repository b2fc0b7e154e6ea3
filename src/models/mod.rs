use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod event;
mod menu;

pub use event::{AttendeeMix, DietaryRestriction, EventParameters, EventType, MealType};
pub use menu::{CuisineProportions, DishRecommendation, MenuRecommendation};

/// Stable identifier of a catalog dish (e.g. "dal-makhani")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl DishId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DishType {
    Veg,
    NonVeg,
}

impl DishType {
    pub fn label(&self) -> &'static str {
        match self {
            DishType::Veg => "Vegetarian",
            DishType::NonVeg => "Non-Vegetarian",
        }
    }
}

/// Regional cuisine tag carried by every dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CuisineOrigin {
    SouthIndian,
    NorthIndian,
    Universal,
}

impl CuisineOrigin {
    /// All origins, in the order the selector fills its per-origin quotas
    pub const ALL: [CuisineOrigin; 3] = [
        CuisineOrigin::SouthIndian,
        CuisineOrigin::NorthIndian,
        CuisineOrigin::Universal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CuisineOrigin::SouthIndian => "South Indian",
            CuisineOrigin::NorthIndian => "North Indian",
            CuisineOrigin::Universal => "Universal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DishCategory {
    Main,
    Side,
    Dessert,
    Bread,
    Rice,
    Starter,
}

impl DishCategory {
    /// Order in which categories are listed on a rendered menu
    pub const DISPLAY_ORDER: [DishCategory; 6] = [
        DishCategory::Main,
        DishCategory::Side,
        DishCategory::Rice,
        DishCategory::Bread,
        DishCategory::Starter,
        DishCategory::Dessert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DishCategory::Main => "Main",
            DishCategory::Side => "Side",
            DishCategory::Dessert => "Dessert",
            DishCategory::Bread => "Bread",
            DishCategory::Rice => "Rice",
            DishCategory::Starter => "Starter",
        }
    }
}

/// A static catalog entry. Field names follow the dataset file (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    #[serde(rename = "type")]
    pub dish_type: DishType,
    pub origin: CuisineOrigin,
    /// 1 (mild) to 5 (very hot)
    pub spice_level: u8,
    /// 1 to 5
    pub popularity: u8,
    pub meal_types: Vec<MealType>,
    pub event_types: Vec<EventType>,
    pub is_jain_friendly: bool,
    pub is_gluten_free: bool,
    pub serving_unit: String,
    /// Quantity per attendee, in `serving_unit`
    pub serving_size: f64,
    pub description: String,
    pub category: DishCategory,
}

impl Dish {
    pub fn is_served_at(&self, meal_type: MealType) -> bool {
        self.meal_types.contains(&meal_type)
    }

    pub fn suits_event(&self, event_type: EventType) -> bool {
        self.event_types.contains(&event_type)
    }
}
