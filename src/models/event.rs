use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn is_breakfast(&self) -> bool {
        matches!(self, MealType::Breakfast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Casual,
    Wedding,
    Corporate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    /// Sentinel used when no restriction was requested
    None,
    Jain,
    GlutenFree,
}

/// Head counts of the expected attendees by background
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeMix {
    pub south_indian: u32,
    pub north_indian: u32,
    pub foreigners: u32,
    pub others: u32,
}

impl AttendeeMix {
    pub fn new(south_indian: u32, north_indian: u32, foreigners: u32, others: u32) -> Self {
        Self {
            south_indian,
            north_indian,
            foreigners,
            others,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.south_indian)
            + u64::from(self.north_indian)
            + u64::from(self.foreigners)
            + u64::from(self.others)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of `count` in the whole mix; 0.0 for an empty mix
    fn share(&self, count: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(count) / total as f64,
        }
    }

    pub fn south_ratio(&self) -> f64 {
        self.share(self.south_indian)
    }

    pub fn north_ratio(&self) -> f64 {
        self.share(self.north_indian)
    }

    pub fn foreigner_ratio(&self) -> f64 {
        self.share(self.foreigners)
    }

    pub fn others_ratio(&self) -> f64 {
        self.share(self.others)
    }
}

/// Everything the engine needs to know about one event.
///
/// Built once per request by the input boundary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParameters {
    pub attendee_mix: AttendeeMix,
    /// Fraction of vegetarian attendees, in [0, 1]
    pub veg_non_veg_ratio: f64,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub meal_type: MealType,
    pub event_type: EventType,
}

impl EventParameters {
    pub fn new(
        attendee_mix: AttendeeMix,
        veg_non_veg_ratio: f64,
        meal_type: MealType,
        event_type: EventType,
    ) -> Self {
        Self {
            attendee_mix,
            veg_non_veg_ratio,
            dietary_restrictions: vec![DietaryRestriction::None],
            meal_type,
            event_type,
        }
    }

    pub fn with_restrictions(mut self, restrictions: Vec<DietaryRestriction>) -> Self {
        self.dietary_restrictions = restrictions;
        self
    }

    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }

    pub fn total_attendees(&self) -> u64 {
        self.attendee_mix.total()
    }

    /// Attendees expected to eat non-veg: total minus the rounded veg head count
    pub fn non_veg_attendees(&self) -> u64 {
        let total = self.total_attendees();
        let veg = (self.veg_non_veg_ratio * total as f64).round() as u64;
        total.saturating_sub(veg)
    }
}
