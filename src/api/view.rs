use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    CuisineOrigin, DishCategory, DishRecommendation, DishType, MenuRecommendation,
};

/// Everything a results page needs to render one recommendation
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub total_attendees: u64,
    /// Dishes grouped by category, in menu display order
    pub categories: Vec<CategoryGroup>,
    pub cuisine_breakdown: Vec<CuisineShare>,
    /// Flat quantity table in selection order
    pub quantities: Vec<QuantityRow>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: DishCategory,
    pub label: &'static str,
    pub dishes: Vec<MenuItem>,
}

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub origin: CuisineOrigin,
    pub origin_label: &'static str,
    pub dish_type: DishType,
    pub dish_type_label: &'static str,
    pub spice_level: u8,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_tip: Option<String>,
}

impl From<&DishRecommendation> for MenuItem {
    fn from(rec: &DishRecommendation) -> Self {
        Self {
            id: rec.dish.id.to_string(),
            name: rec.dish.name.clone(),
            description: rec.dish.description.clone(),
            origin: rec.dish.origin,
            origin_label: rec.dish.origin.label(),
            dish_type: rec.dish.dish_type,
            dish_type_label: rec.dish.dish_type.label(),
            spice_level: rec.dish.spice_level,
            quantity: rec.quantity,
            unit: rec.quantity_unit.clone(),
            preparation_tip: rec.preparation_tip.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CuisineShare {
    pub origin: CuisineOrigin,
    pub label: &'static str,
    pub proportion: f64,
    /// Proportion as a whole percentage, for progress bars
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct QuantityRow {
    pub dish: String,
    pub category: DishCategory,
    pub quantity: f64,
    pub unit: String,
}

impl MenuResponse {
    pub fn new(
        menu: &MenuRecommendation,
        total_attendees: u64,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let categories = DishCategory::DISPLAY_ORDER
            .iter()
            .filter_map(|&category| {
                let dishes: Vec<MenuItem> = menu
                    .dishes
                    .iter()
                    .filter(|r| r.dish.category == category)
                    .map(MenuItem::from)
                    .collect();

                (!dishes.is_empty()).then(|| CategoryGroup {
                    category,
                    label: category.label(),
                    dishes,
                })
            })
            .collect();

        let cuisine_breakdown = CuisineOrigin::ALL
            .iter()
            .map(|&origin| {
                let proportion = menu.cuisine_proportions.get(origin);
                CuisineShare {
                    origin,
                    label: origin.label(),
                    proportion,
                    percent: (proportion * 100.0).round().max(0.0) as u32,
                }
            })
            .collect();

        let quantities = menu
            .dishes
            .iter()
            .map(|r| QuantityRow {
                dish: r.dish.name.clone(),
                category: r.dish.category,
                quantity: r.quantity,
                unit: r.quantity_unit.clone(),
            })
            .collect();

        Self {
            total_attendees,
            categories,
            cuisine_breakdown,
            quantities,
            generated_at,
        }
    }
}
