use serde::{Deserialize, Serialize};

use super::period::{Period, PeriodValues};

/// Price per kWh for each period. Currency is a display label held by the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub morning: f64,
    pub midday: f64,
    pub evening: f64,
    pub night: f64,
}

impl TariffSchedule {
    pub fn new(morning: f64, midday: f64, evening: f64, night: f64) -> Self {
        Self {
            morning,
            midday,
            evening,
            night,
        }
    }

    pub fn flat(price_per_kwh: f64) -> Self {
        Self::new(price_per_kwh, price_per_kwh, price_per_kwh, price_per_kwh)
    }

    pub fn price(&self, period: Period) -> f64 {
        match period {
            Period::Morning => self.morning,
            Period::Midday => self.midday,
            Period::Evening => self.evening,
            Period::Night => self.night,
        }
    }

    /// Cost of the given per-period energy: sum of kWh x price
    pub fn cost_of(&self, kwh: &PeriodValues) -> f64 {
        kwh.iter().map(|(period, e)| e * self.price(period)).sum()
    }
}
