use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tariff::TariffSchedule;

/// A household being estimated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    /// Free-form label, usually one of `city`, `village`, `countryside`
    pub location_type: String,
    pub region: Option<String>,
    pub currency: String,
    pub tariff: TariffSchedule,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn location(&self) -> LocationType {
        LocationType::classify(&self.location_type)
    }
}

/// Where the household sits; drives some of the recommendation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    City,
    Village,
    Countryside,
    Other,
}

impl LocationType {
    pub fn classify(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "city" => LocationType::City,
            "village" => LocationType::Village,
            "countryside" => LocationType::Countryside,
            _ => LocationType::Other,
        }
    }

    pub fn is_rural(&self) -> bool {
        matches!(self, LocationType::Village | LocationType::Countryside)
    }
}
