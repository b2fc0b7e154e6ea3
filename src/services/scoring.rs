use crate::models::{CuisineOrigin, Dish, DishCategory, EventParameters, EventType, MealType};

/// Heuristic desirability of a dish for this event.
///
/// Only meaningful relative to other dishes scored with the same parameters.
pub fn score_dish(dish: &Dish, params: &EventParameters) -> f64 {
    let mix = &params.attendee_mix;
    let spice = f64::from(dish.spice_level);
    let mut score = f64::from(dish.popularity) * 10.0;

    // Very spicy dishes lose ground when many foreigners attend
    let foreigner_ratio = mix.foreigner_ratio();
    if foreigner_ratio > 0.2 && dish.spice_level > 3 {
        score -= (spice - 3.0) * 5.0 * foreigner_ratio * 10.0;
    }

    let south_ratio = mix.south_ratio();
    let north_ratio = mix.north_ratio();
    match dish.origin {
        CuisineOrigin::SouthIndian if south_ratio > 0.4 => score += 10.0 * south_ratio,
        CuisineOrigin::NorthIndian if north_ratio > 0.4 => score += 10.0 * north_ratio,
        CuisineOrigin::Universal => score += 5.0,
        _ => {}
    }

    score += match (params.meal_type, dish.category) {
        (MealType::Breakfast, DishCategory::Main) => 10.0,
        (MealType::Lunch | MealType::Dinner, DishCategory::Main | DishCategory::Rice) => 8.0,
        _ => 0.0,
    };

    score += match params.event_type {
        EventType::Wedding if dish.popularity >= 4 => 10.0,
        EventType::Corporate if dish.spice_level <= 3 => 8.0,
        _ => 0.0,
    };

    score
}

/// Orders dishes by descending score.
///
/// The sort is stable, so equal scores keep their incoming (catalog) order.
pub fn rank_dishes<'a>(dishes: Vec<&'a Dish>, params: &EventParameters) -> Vec<&'a Dish> {
    let mut scored: Vec<(&Dish, f64)> = dishes
        .into_iter()
        .map(|dish| (dish, score_dish(dish, params)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored.into_iter().map(|(dish, _)| dish).collect()
}
