//! # Household energy analysis
//!
//! Closed-form pipeline over one representative week repeated across a month:
//!
//! 1. appliance usage -> monthly kWh per period ([`load`])
//! 2. solar production offsets the midday bucket ([`solar`])
//! 3. baseline / after costs, savings and payback ([`financial`])
//!
//! Pure and synchronous; every numeric output is rounded to 2 decimals when the
//! [`AnalysisResult`] is assembled.

pub mod financial;
pub mod load;
pub mod solar;

use serde::Serialize;
use tracing::debug;

use crate::domain::{ApplianceUsage, PeriodValues, SolarSpec, TariffSchedule};

pub use financial::Financials;
pub use solar::SolarOffset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub baseline: LoadSummary,
    pub solar: SolarSummary,
    pub after: LoadSummary,
    pub savings: SavingsSummary,
    pub formulas: Formulas,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    pub kwh_month: f64,
    pub cost_month: f64,
    pub kwh_by_period_month: PeriodValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarSummary {
    pub system_kwp: f64,
    pub install_cost: f64,
    pub peak_sun_hours_midday: f64,
    pub performance_ratio: f64,
    pub production_kwh_month: f64,
    pub self_consumed_kwh_month: f64,
    pub excess_kwh_month: f64,
    pub recommended_system_kwp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub cost_savings_month: f64,
    pub cost_savings_year: f64,
    /// `null` unless install cost and annual savings are both positive
    pub payback_years: Option<f64>,
    pub net_savings_3y: f64,
    pub net_savings_5y: f64,
}

/// Human-readable formulas shown next to the figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formulas {
    pub kwh_appliance: &'static str,
    pub month_factor: &'static str,
    pub solar_month: &'static str,
    pub payback: &'static str,
}

impl Default for Formulas {
    fn default() -> Self {
        Self {
            kwh_appliance: "kWh = (Power(W) × Hours × Quantity) / 1000",
            month_factor: "kWh_month ≈ kWh_day × (4.345 × days_per_week)",
            solar_month: "Solar_month ≈ kWp × PSH × PR × 30",
            payback: "Payback (years) = Install_cost / Annual_savings",
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the full estimate for one household.
///
/// Never fails: divisions are guarded and out-of-range inputs other than
/// days-per-week and performance ratio flow through arithmetically.
pub fn analyze(
    appliances: &[ApplianceUsage],
    tariff: &TariffSchedule,
    solar: &SolarSpec,
) -> AnalysisResult {
    let baseline = load::load_by_period_month(appliances);
    let offset = solar::apply_solar(&baseline, solar);
    let money = financial::evaluate(&baseline, &offset.loads_after, tariff, solar.install_cost);

    debug!(
        appliances = appliances.len(),
        baseline_kwh_month = baseline.total(),
        production_kwh_month = offset.production_kwh_month,
        "analysis computed"
    );

    AnalysisResult {
        baseline: LoadSummary {
            kwh_month: round2(baseline.total()),
            cost_month: round2(money.baseline_cost_month),
            kwh_by_period_month: baseline.map(round2),
        },
        solar: SolarSummary {
            system_kwp: solar.system_size_kwp,
            install_cost: solar.install_cost,
            peak_sun_hours_midday: solar.peak_sun_hours_midday,
            performance_ratio: solar.performance_ratio,
            production_kwh_month: round2(offset.production_kwh_month),
            self_consumed_kwh_month: round2(offset.self_consumed_kwh_month),
            excess_kwh_month: round2(offset.excess_kwh_month),
            recommended_system_kwp: round2(offset.recommended_system_kwp),
        },
        after: LoadSummary {
            kwh_month: round2(offset.loads_after.total()),
            cost_month: round2(money.after_cost_month),
            kwh_by_period_month: offset.loads_after.map(round2),
        },
        savings: SavingsSummary {
            cost_savings_month: round2(money.savings_month),
            cost_savings_year: round2(money.savings_year),
            payback_years: money.payback_years.map(round2),
            net_savings_3y: round2(money.net_savings_3y),
            net_savings_5y: round2(money.net_savings_5y),
        },
        formulas: Formulas::default(),
    }
}
