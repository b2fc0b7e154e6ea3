use std::time::Instant;

use crate::{
    catalog::Catalog,
    models::{DishType, EventParameters, MenuRecommendation},
    services::{
        filter::{filter_dishes, TypeFilter},
        proportions::calculate_cuisine_proportions,
        quantity::recommend_dish,
        scoring::rank_dishes,
        selector::select_dishes,
    },
};

/// Builds a complete menu recommendation for one event.
///
/// Runs the whole pipeline: cuisine proportions, eligibility filtering,
/// ranking, category-balanced selection and quantity estimation. The call
/// is pure; the same catalog and parameters always produce the same menu.
///
/// An event with no attendees yields an empty menu with zero proportions.
pub fn generate_menu_recommendation(
    catalog: &Catalog,
    params: &EventParameters,
) -> MenuRecommendation {
    let start = Instant::now();
    let total_attendees = params.total_attendees();

    // Stops before the coverage floor, which would otherwise add dishes
    // sized for nobody
    if total_attendees == 0 {
        tracing::info!("No attendees, returning an empty menu");
        return MenuRecommendation::empty();
    }

    let cuisine_proportions = calculate_cuisine_proportions(&params.attendee_mix);
    tracing::debug!(
        south_indian = cuisine_proportions.south_indian,
        north_indian = cuisine_proportions.north_indian,
        universal = cuisine_proportions.universal,
        "Cuisine proportions calculated"
    );

    let veg = rank_dishes(
        filter_dishes(catalog.dishes(), params, TypeFilter::Only(DishType::Veg)),
        params,
    );
    let non_veg = rank_dishes(
        filter_dishes(catalog.dishes(), params, TypeFilter::Only(DishType::NonVeg)),
        params,
    );
    tracing::debug!(
        veg = veg.len(),
        non_veg = non_veg.len(),
        "Eligible dishes ranked"
    );

    let dishes = select_dishes(&veg, &non_veg, &cuisine_proportions, params)
        .into_iter()
        .map(|dish| recommend_dish(dish, params))
        .collect::<Vec<_>>();

    tracing::info!(
        total_attendees,
        dishes = dishes.len(),
        meal_type = ?params.meal_type,
        event_type = ?params.event_type,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Menu recommendation generated"
    );

    MenuRecommendation {
        dishes,
        cuisine_proportions,
    }
}
