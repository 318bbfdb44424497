//! Solar production and its offset of the midday load.
//!
//! All usable production is attributed to the midday period; morning, evening
//! and night loads are never touched.

use crate::domain::{PeriodValues, SolarSpec};

/// Days per month used for production
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Monthly production in kWh: kWp x PSH x PR x 30
pub fn production_month(system_kwp: f64, peak_sun_hours_midday: f64, performance_ratio: f64) -> f64 {
    system_kwp.max(0.0)
        * peak_sun_hours_midday.max(0.0)
        * performance_ratio.clamp(0.0, 1.0)
        * DAYS_PER_MONTH
}

/// Capacity whose monthly production equals the midday load.
///
/// Returns 0 when PSH or PR is not strictly positive.
pub fn recommended_kwp(midday_load: f64, peak_sun_hours_midday: f64, performance_ratio: f64) -> f64 {
    if peak_sun_hours_midday > 0.0 && performance_ratio > 0.0 {
        midday_load / (peak_sun_hours_midday * performance_ratio * DAYS_PER_MONTH)
    } else {
        0.0
    }
}

/// Outcome of laying solar production over the baseline loads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarOffset {
    pub production_kwh_month: f64,
    pub self_consumed_kwh_month: f64,
    pub excess_kwh_month: f64,
    pub recommended_system_kwp: f64,
    /// Baseline loads with the midday bucket reduced by production
    pub loads_after: PeriodValues,
}

pub fn apply_solar(baseline: &PeriodValues, spec: &SolarSpec) -> SolarOffset {
    let production = production_month(
        spec.system_size_kwp,
        spec.peak_sun_hours_midday,
        spec.performance_ratio,
    );
    let midday = baseline.midday;

    let mut loads_after = *baseline;
    loads_after.midday = (midday - production).max(0.0);

    SolarOffset {
        production_kwh_month: production,
        self_consumed_kwh_month: midday.min(production),
        excess_kwh_month: (production - midday).max(0.0),
        recommended_system_kwp: recommended_kwp(
            midday,
            spec.peak_sun_hours_midday,
            spec.performance_ratio,
        ),
        loads_after,
    }
}
