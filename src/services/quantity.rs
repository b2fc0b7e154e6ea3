use crate::models::{CuisineOrigin, Dish, DishRecommendation, DishType, EventParameters, EventType, MealType};

/// Extra portion of a veg dish eaten per non-veg attendee
const NON_VEG_SAMPLING_SHARE: f64 = 0.3;
const BREAKFAST_FACTOR: f64 = 0.8;
const WEDDING_FACTOR: f64 = 1.2;

/// Serving unit that is rounded to whole items
const PIECES: &str = "pieces";

/// Total amount of a dish to prepare, in its serving unit.
///
/// Veg dishes are sized for everyone plus a share for non-veg eaters who
/// also take some veg. Non-veg dishes are sized for non-veg eaters only.
pub fn estimate_quantity(dish: &Dish, params: &EventParameters) -> f64 {
    let total = params.total_attendees() as f64;
    let non_veg_share = 1.0 - params.veg_non_veg_ratio;

    let mut quantity = match dish.dish_type {
        DishType::Veg => {
            total * dish.serving_size + total * non_veg_share * NON_VEG_SAMPLING_SHARE
        }
        DishType::NonVeg => total * non_veg_share * dish.serving_size,
    };

    if params.meal_type == MealType::Breakfast {
        quantity *= BREAKFAST_FACTOR;
    }
    if params.event_type == EventType::Wedding {
        quantity *= WEDDING_FACTOR;
    }

    if dish.serving_unit == PIECES {
        quantity.round()
    } else {
        (quantity * 10.0).round() / 10.0
    }
}

/// Kitchen hint for a dish given the crowd; the first matching rule wins
pub fn preparation_tip(dish: &Dish, params: &EventParameters) -> Option<String> {
    let mix = &params.attendee_mix;
    let foreigner_ratio = mix.foreigner_ratio();

    if foreigner_ratio > 0.1 && dish.spice_level > 3 {
        return Some(format!(
            "Reduce spice level for a mixed audience with {}% foreigners",
            (foreigner_ratio * 100.0).round()
        ));
    }

    match dish.origin {
        CuisineOrigin::SouthIndian if mix.north_indian > mix.south_indian => {
            return Some(
                "Consider a moderate spice level to accommodate North Indian palates".to_string(),
            );
        }
        CuisineOrigin::NorthIndian if mix.south_indian > mix.north_indian => {
            return Some("South Indians might prefer this slightly spicier".to_string());
        }
        _ => {}
    }

    if params.event_type == EventType::Corporate && dish.spice_level > 3 {
        return Some("Keep spice moderate for a professional setting".to_string());
    }

    None
}

/// Attaches quantity, unit and tip to a selected dish
pub fn recommend_dish(dish: &Dish, params: &EventParameters) -> DishRecommendation {
    DishRecommendation {
        dish: dish.clone(),
        quantity: estimate_quantity(dish, params),
        quantity_unit: dish.serving_unit.clone(),
        preparation_tip: preparation_tip(dish, params),
    }
}
