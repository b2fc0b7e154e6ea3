use crate::models::{DietaryRestriction, Dish, DishType, EventParameters};

/// Which dish types a filter pass admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    Only(DishType),
    Both,
}

impl TypeFilter {
    fn admits(&self, dish_type: DishType) -> bool {
        match self {
            TypeFilter::Only(wanted) => *wanted == dish_type,
            TypeFilter::Both => true,
        }
    }
}

/// Whether a dish may be served at the event at all.
///
/// Every criterion must hold; a single miss excludes the dish.
pub fn is_eligible(dish: &Dish, params: &EventParameters, type_filter: TypeFilter) -> bool {
    dish.is_served_at(params.meal_type)
        && dish.suits_event(params.event_type)
        && type_filter.admits(dish.dish_type)
        && (!params.has_restriction(DietaryRestriction::Jain) || dish.is_jain_friendly)
        && (!params.has_restriction(DietaryRestriction::GlutenFree) || dish.is_gluten_free)
}

/// Narrows the catalog to eligible dishes, keeping catalog order
pub fn filter_dishes<'a>(
    catalog: &'a [Dish],
    params: &EventParameters,
    type_filter: TypeFilter,
) -> Vec<&'a Dish> {
    catalog
        .iter()
        .filter(|dish| is_eligible(dish, params, type_filter))
        .collect()
}
