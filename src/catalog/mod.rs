use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::{Dish, DishId};

/// Dataset shipped with the service
const BUILTIN_DISHES: &str = include_str!("../../data/dishes.json");

/// Error types for loading a dish catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no dishes")]
    Empty,

    #[error("Duplicate dish id: {0}")]
    DuplicateId(DishId),

    #[error("Dish {id}: {reason}")]
    InvalidDish { id: DishId, reason: String },
}

/// Read-only dish catalog, loaded once at startup.
///
/// Dataset order is preserved; it breaks score ties during ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Builds a catalog from already parsed dishes, validating every entry
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        if dishes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for dish in &dishes {
            if !seen.insert(&dish.id) {
                return Err(CatalogError::DuplicateId(dish.id.clone()));
            }
            validate_dish(dish)?;
        }

        Ok(Self { dishes })
    }

    /// Parses the dataset embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DISHES)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let dishes: Vec<Dish> = serde_json::from_str(json)?;
        Self::new(dishes)
    }

    /// Loads a replacement dataset from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            dishes = catalog.len(),
            "Loaded dish catalog from file"
        );

        Ok(catalog)
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

fn validate_dish(dish: &Dish) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidDish {
        id: dish.id.clone(),
        reason,
    };

    if !(1..=5).contains(&dish.spice_level) {
        return Err(invalid(format!("spice level {} outside 1-5", dish.spice_level)));
    }
    if !(1..=5).contains(&dish.popularity) {
        return Err(invalid(format!("popularity {} outside 1-5", dish.popularity)));
    }
    if !dish.serving_size.is_finite() || dish.serving_size < 0.0 {
        return Err(invalid(format!("serving size {} is not a quantity", dish.serving_size)));
    }
    if dish.meal_types.is_empty() {
        return Err(invalid("no meal types".to_string()));
    }
    if dish.event_types.is_empty() {
        return Err(invalid("no event types".to_string()));
    }

    Ok(())
}
