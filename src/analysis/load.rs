//! Appliance usage to monthly energy per period.

use crate::domain::{ApplianceUsage, Period, PeriodValues};

/// Average weeks per calendar month
pub const WEEKS_PER_MONTH: f64 = 4.345;

/// Daily energy of `quantity` units drawing `power_watts` for `hours`
pub fn kwh(power_watts: f64, hours: f64, quantity: u32) -> f64 {
    power_watts * hours * f64::from(quantity) / 1000.0
}

/// Active days in a month, from days active per week clamped to 0..=7
pub fn month_factor(days_active_per_week: i32) -> f64 {
    WEEKS_PER_MONTH * f64::from(days_active_per_week.clamp(0, 7))
}

/// Monthly kWh for a single appliance line
pub fn appliance_month_kwh(appliance: &ApplianceUsage) -> PeriodValues {
    let factor = month_factor(appliance.days_active_per_week);
    appliance.hours_per_day.map(|hours| {
        kwh(appliance.power_watts, hours, appliance.quantity) * factor
    })
}

/// Monthly kWh per period summed over every appliance.
///
/// Negative power or hours are not clamped here and flow through as-is.
pub fn load_by_period_month(appliances: &[ApplianceUsage]) -> PeriodValues {
    let mut loads = PeriodValues::default();
    for appliance in appliances {
        let month = appliance_month_kwh(appliance);
        for period in Period::all() {
            loads[period] += month[period];
        }
    }
    loads
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ac() -> ApplianceUsage {
        ApplianceUsage::new("AC", "ac", 1200.0).with_hours(PeriodValues::new(2.0, 4.0, 2.0, 0.0))
    }

    #[test]
    fn test_kwh_formula() {
        assert!((kwh(60.0, 5.0, 8) - 2.4).abs() < 1e-12);
        assert_eq!(kwh(1500.0, 0.0, 3), 0.0);
        assert_eq!(kwh(1500.0, 2.0, 0), 0.0);
    }

    #[rstest]
    #[case(7, 30.415)]
    #[case(5, 21.725)]
    #[case(0, 0.0)]
    #[case(-3, 0.0)]
    #[case(9, 30.415)]
    fn test_month_factor_clamps_days(#[case] days: i32, #[case] expected: f64) {
        assert!((month_factor(days) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_appliance_per_period() {
        let loads = load_by_period_month(&[ac()]);
        assert!((loads.morning - 2.4 * 30.415).abs() < 1e-9);
        assert!((loads.midday - 4.8 * 30.415).abs() < 1e-9);
        assert!((loads.evening - 2.4 * 30.415).abs() < 1e-9);
        assert_eq!(loads.night, 0.0);
    }

    #[test]
    fn test_appliances_sum_per_period() {
        let fridge = ApplianceUsage::new("Fridge", "fridge", 150.0)
            .with_hours(PeriodValues::uniform(6.0));
        let loads = load_by_period_month(&[ac(), fridge.clone()]);
        let fridge_only = load_by_period_month(&[fridge]);
        assert!((loads.night - fridge_only.night).abs() < 1e-9);
        assert!((loads.midday - (4.8 + 0.9) * 30.415).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(load_by_period_month(&[]), PeriodValues::default());
    }

    #[test]
    fn test_inactive_appliance_contributes_nothing() {
        let idle = ac().with_days_per_week(0);
        assert_eq!(load_by_period_month(&[idle]).total(), 0.0);
    }

    #[test]
    fn test_negative_power_propagates() {
        let odd = ApplianceUsage::new("odd", "other", -100.0)
            .with_hours(PeriodValues::new(1.0, 0.0, 0.0, 0.0));
        assert!(load_by_period_month(&[odd]).morning < 0.0);
    }
}
