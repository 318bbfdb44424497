use serde::{Deserialize, Serialize};

use super::period::PeriodValues;

/// Usage pattern of one appliance line (possibly several identical units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceUsage {
    pub name: String,
    /// Free-form tag, matched case-insensitively by the recommendation rules
    pub category: String,
    pub power_watts: f64,
    pub quantity: u32,
    pub hours_per_day: PeriodValues,
    /// Conceptually 0-7; clamped when scaling to a month
    pub days_active_per_week: i32,
}

impl ApplianceUsage {
    pub fn new(name: impl Into<String>, category: impl Into<String>, power_watts: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            power_watts,
            quantity: 1,
            hours_per_day: PeriodValues::default(),
            days_active_per_week: 7,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_hours(mut self, hours_per_day: PeriodValues) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    pub fn with_days_per_week(mut self, days: i32) -> Self {
        self.days_active_per_week = days;
        self
    }

    pub fn kind(&self) -> ApplianceCategory {
        ApplianceCategory::classify(&self.category)
    }
}

/// Coarse appliance classes the recommendation rules care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceCategory {
    Lighting,
    AirConditioning,
    Other,
}

const LIGHTING_TAGS: &[&str] = &["lamp", "lighting", "lamps"];
const AIR_CONDITIONING_TAGS: &[&str] = &["ac", "air_conditioner", "climatiseur"];

impl ApplianceCategory {
    pub fn classify(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if LIGHTING_TAGS.contains(&tag.as_str()) {
            ApplianceCategory::Lighting
        } else if AIR_CONDITIONING_TAGS.contains(&tag.as_str()) {
            ApplianceCategory::AirConditioning
        } else {
            ApplianceCategory::Other
        }
    }
}
