//! Request bodies and response views. Validation happens here so stored
//! records are always within range; the analysis core itself stays permissive.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::ProfileDefaults;
use crate::domain::{ApplianceUsage, PeriodValues, Profile, SolarUpdate, TariffSchedule};
use crate::repo::{ApplianceRecord, NewProfile};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub location_type: Option<String>,
    #[validate(length(max = 120))]
    pub region: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub currency: Option<String>,
    #[validate(range(min = 0.0))]
    pub price_morning: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_midday: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_evening: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_night: Option<f64>,
}

impl CreateProfileRequest {
    pub fn into_new_profile(self, defaults: &ProfileDefaults) -> NewProfile {
        let base = defaults.tariff();
        NewProfile {
            name: self.name.unwrap_or_else(|| defaults.profile_name.clone()),
            location_type: self
                .location_type
                .unwrap_or_else(|| defaults.location_type.clone()),
            region: self.region,
            currency: self.currency.unwrap_or_else(|| defaults.currency.clone()),
            tariff: TariffSchedule::new(
                self.price_morning.unwrap_or(base.morning),
                self.price_midday.unwrap_or(base.midday),
                self.price_evening.unwrap_or(base.evening),
                self.price_night.unwrap_or(base.night),
            ),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddApplianceRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub power_watts: f64,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 0, max = 10_000))]
    pub quantity: i64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub h_morning: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub h_midday: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub h_evening: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub h_night: f64,
    #[serde(default = "default_days_per_week")]
    #[validate(range(min = 0, max = 7))]
    pub days_per_week: i32,
}

fn default_quantity() -> i64 {
    1
}

fn default_days_per_week() -> i32 {
    7
}

impl AddApplianceRequest {
    /// Call after `validate()`; quantity is then known to fit
    pub fn into_usage(self) -> ApplianceUsage {
        ApplianceUsage::new(self.name, self.category, self.power_watts)
            .with_quantity(u32::try_from(self.quantity).unwrap_or(0))
            .with_hours(PeriodValues::new(
                self.h_morning,
                self.h_midday,
                self.h_evening,
                self.h_night,
            ))
            .with_days_per_week(self.days_per_week)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SetSolarRequest {
    #[validate(range(min = 0.0))]
    pub system_size_kwp: Option<f64>,
    #[validate(range(min = 0.0))]
    pub install_cost: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub performance_ratio: Option<f64>,
    #[validate(range(min = 0.0, max = 24.0))]
    pub peak_sun_hours_midday: Option<f64>,
}

impl From<SetSolarRequest> for SolarUpdate {
    fn from(req: SetSolarRequest) -> Self {
        SolarUpdate {
            system_size_kwp: req.system_size_kwp,
            install_cost: req.install_cost,
            performance_ratio: req.performance_ratio,
            peak_sun_hours_midday: req.peak_sun_hours_midday,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub name: String,
    pub location_type: String,
    pub region: Option<String>,
    pub currency: String,
    pub prices: TariffSchedule,
}

impl From<Profile> for ProfileView {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            location_type: p.location_type,
            region: p.region,
            currency: p.currency,
            prices: p.tariff,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplianceView {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub power_watts: f64,
    pub quantity: u32,
    pub h_morning: f64,
    pub h_midday: f64,
    pub h_evening: f64,
    pub h_night: f64,
    pub days_per_week: i32,
}

impl From<ApplianceRecord> for ApplianceView {
    fn from(record: ApplianceRecord) -> Self {
        let usage = record.usage;
        Self {
            id: record.id,
            name: usage.name,
            category: usage.category,
            power_watts: usage.power_watts,
            quantity: usage.quantity,
            h_morning: usage.hours_per_day.morning,
            h_midday: usage.hours_per_day.midday,
            h_evening: usage.hours_per_day.evening,
            h_night: usage.hours_per_day.night,
            days_per_week: usage.days_active_per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_request_defaults() {
        let defaults = ProfileDefaults::default();
        let req = CreateProfileRequest {
            price_night: Some(0.1),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let profile = req.into_new_profile(&defaults);
        assert_eq!(profile.name, "My Home");
        assert_eq!(profile.location_type, "city");
        assert_eq!(profile.currency, "EUR");
        assert_eq!(profile.tariff, TariffSchedule::new(0.2, 0.2, 0.2, 0.1));
    }

    #[test]
    fn test_profile_request_uses_configured_price() {
        let defaults = ProfileDefaults {
            price_per_kwh: 0.3,
            ..Default::default()
        };
        let req = CreateProfileRequest {
            price_morning: Some(0.15),
            ..Default::default()
        };
        let profile = req.into_new_profile(&defaults);
        assert_eq!(profile.tariff, TariffSchedule::new(0.15, 0.3, 0.3, 0.3));
    }

    #[test]
    fn test_negative_price_rejected() {
        let req = CreateProfileRequest {
            price_midday: Some(-0.5),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_appliance_request_defaults() {
        let req: AddApplianceRequest = serde_json::from_value(serde_json::json!({
            "name": "Fridge",
            "category": "fridge",
            "power_watts": 150.0,
            "h_night": 6
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        let usage = req.into_usage();
        assert_eq!(usage.quantity, 1);
        assert_eq!(usage.days_active_per_week, 7);
        assert_eq!(usage.hours_per_day, PeriodValues::new(0.0, 0.0, 0.0, 6.0));
    }

    #[test]
    fn test_appliance_request_ranges() {
        let req: AddApplianceRequest = serde_json::from_value(serde_json::json!({
            "name": "Heater",
            "category": "heater",
            "power_watts": 2000.0,
            "h_evening": 30,
            "days_per_week": 9
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("h_evening"));
        assert!(fields.contains_key("days_per_week"));
    }

    #[test]
    fn test_solar_ratio_bounds() {
        let req = SetSolarRequest {
            performance_ratio: Some(1.2),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
