use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Fixed daily time-of-day bucket used for tariffs and solar interaction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Period {
    Morning,
    Midday,
    Evening,
    Night,
}

impl Period {
    /// All periods in canonical order
    pub fn all() -> impl Iterator<Item = Period> {
        Period::iter()
    }
}

/// One value per period (hours per day, kWh per month, ...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodValues {
    pub morning: f64,
    pub midday: f64,
    pub evening: f64,
    pub night: f64,
}

impl PeriodValues {
    pub fn new(morning: f64, midday: f64, evening: f64, night: f64) -> Self {
        Self {
            morning,
            midday,
            evening,
            night,
        }
    }

    /// Same value in every period
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        Period::all().map(move |p| (p, self[p]))
    }

    /// Sum over all periods
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Apply `f` to every period value
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.morning), f(self.midday), f(self.evening), f(self.night))
    }
}

impl Index<Period> for PeriodValues {
    type Output = f64;

    fn index(&self, period: Period) -> &f64 {
        match period {
            Period::Morning => &self.morning,
            Period::Midday => &self.midday,
            Period::Evening => &self.evening,
            Period::Night => &self.night,
        }
    }
}

impl IndexMut<Period> for PeriodValues {
    fn index_mut(&mut self, period: Period) -> &mut f64 {
        match period {
            Period::Morning => &mut self.morning,
            Period::Midday => &mut self.midday,
            Period::Evening => &mut self.evening,
            Period::Night => &mut self.night,
        }
    }
}
