use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    AttendeeMix, DietaryRestriction, Dish, EventParameters, EventType, MealType,
};
use crate::services::generate_menu_recommendation;

use super::view::MenuResponse;
use super::AppState;

// Request types

/// Event details as collected by the input form.
///
/// Head counts are non-negative by type; the vegetarian share arrives as a
/// 0-100 slider value and the dietary restrictions as two checkboxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRequest {
    pub south_indian: u32,
    pub north_indian: u32,
    pub foreigners: u32,
    pub others: u32,
    pub veg_percent: f64,
    #[serde(default)]
    pub jain: bool,
    #[serde(default)]
    pub gluten_free: bool,
    pub meal_type: MealType,
    pub event_type: EventType,
}

impl Default for MenuRequest {
    fn default() -> Self {
        Self {
            south_indian: 60,
            north_indian: 30,
            foreigners: 10,
            others: 0,
            veg_percent: 80.0,
            jain: false,
            gluten_free: false,
            meal_type: MealType::Dinner,
            event_type: EventType::Casual,
        }
    }
}

impl MenuRequest {
    /// Validates the form values and assembles engine parameters
    pub fn into_parameters(self) -> AppResult<EventParameters> {
        if !self.veg_percent.is_finite() || !(0.0..=100.0).contains(&self.veg_percent) {
            return Err(AppError::InvalidInput(format!(
                "veg_percent must be between 0 and 100, got {}",
                self.veg_percent
            )));
        }

        let mut restrictions = Vec::new();
        if self.jain {
            restrictions.push(DietaryRestriction::Jain);
        }
        if self.gluten_free {
            restrictions.push(DietaryRestriction::GlutenFree);
        }
        if restrictions.is_empty() {
            restrictions.push(DietaryRestriction::None);
        }

        let mix = AttendeeMix::new(
            self.south_indian,
            self.north_indian,
            self.foreigners,
            self.others,
        );

        Ok(
            EventParameters::new(mix, self.veg_percent / 100.0, self.meal_type, self.event_type)
                .with_restrictions(restrictions),
        )
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List the whole dish catalog
pub async fn list_dishes(State(state): State<AppState>) -> Json<Vec<Dish>> {
    Json(state.catalog.dishes().to_vec())
}

/// Get a single dish by id
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("dish '{}'", id)))
}

/// Default values for the input form
pub async fn menu_defaults() -> Json<MenuRequest> {
    Json(MenuRequest::default())
}

/// Run the recommendation engine for one event
pub async fn recommend_menu(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<MenuRequest>,
) -> AppResult<Json<MenuResponse>> {
    tracing::info!(
        request_id = %request_id,
        meal_type = ?request.meal_type,
        event_type = ?request.event_type,
        "Processing menu recommendation request"
    );

    let params = request.into_parameters().map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejected menu request");
        e
    })?;

    let menu = generate_menu_recommendation(&state.catalog, &params);
    let response = MenuResponse::new(&menu, params.total_attendees(), Utc::now());

    tracing::info!(
        request_id = %request_id,
        dishes = menu.dishes.len(),
        "Menu recommendation completed"
    );

    Ok(Json(response))
}
