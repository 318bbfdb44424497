//! Costs, savings and payback. No maintenance, degradation or inflation terms.

use crate::domain::{PeriodValues, TariffSchedule};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Horizons reported as net savings, in years
pub const NET_SAVINGS_HORIZONS: [u32; 2] = [3, 5];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Financials {
    pub baseline_cost_month: f64,
    pub after_cost_month: f64,
    pub savings_month: f64,
    pub savings_year: f64,
    /// Only set when install cost and annual savings are both positive
    pub payback_years: Option<f64>,
    pub net_savings_3y: f64,
    pub net_savings_5y: f64,
}

/// Years until cumulative savings cover the installation
pub fn payback_years(install_cost: f64, savings_year: f64) -> Option<f64> {
    (install_cost > 0.0 && savings_year > 0.0).then(|| install_cost / savings_year)
}

/// Savings over `years` minus the installation cost; may be negative
pub fn net_savings(savings_year: f64, years: u32, install_cost: f64) -> f64 {
    savings_year * f64::from(years) - install_cost
}

pub fn evaluate(
    baseline: &PeriodValues,
    after: &PeriodValues,
    tariff: &TariffSchedule,
    install_cost: f64,
) -> Financials {
    let baseline_cost_month = tariff.cost_of(baseline);
    let after_cost_month = tariff.cost_of(after);
    let savings_month = baseline_cost_month - after_cost_month;
    let savings_year = savings_month * MONTHS_PER_YEAR;
    let [short, long] = NET_SAVINGS_HORIZONS;

    Financials {
        baseline_cost_month,
        after_cost_month,
        savings_month,
        savings_year,
        payback_years: payback_years(install_cost, savings_year),
        net_savings_3y: net_savings(savings_year, short, install_cost),
        net_savings_5y: net_savings(savings_year, long, install_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4500.0, 900.0, Some(5.0))]
    #[case(0.0, 900.0, None)]
    #[case(4500.0, 0.0, None)]
    #[case(4500.0, -10.0, None)]
    #[case(-1.0, 900.0, None)]
    fn test_payback_guard(#[case] cost: f64, #[case] yearly: f64, #[case] expected: Option<f64>) {
        assert_eq!(payback_years(cost, yearly), expected);
    }

    #[test]
    fn test_net_savings_can_be_negative() {
        assert_eq!(net_savings(100.0, 3, 4500.0), -4200.0);
        assert_eq!(net_savings(1000.0, 5, 4500.0), 500.0);
    }

    #[test]
    fn test_evaluate() {
        let tariff = TariffSchedule::flat(0.2);
        let baseline = PeriodValues::new(50.0, 150.0, 50.0, 0.0);
        let after = PeriodValues::new(50.0, 0.0, 50.0, 0.0);
        let f = evaluate(&baseline, &after, &tariff, 3600.0);

        assert!((f.baseline_cost_month - 50.0).abs() < 1e-9);
        assert!((f.after_cost_month - 20.0).abs() < 1e-9);
        assert!((f.savings_month - 30.0).abs() < 1e-9);
        assert!((f.savings_year - 360.0).abs() < 1e-9);
        assert!((f.payback_years.unwrap() - 10.0).abs() < 1e-9);
        assert!((f.net_savings_3y + 2520.0).abs() < 1e-9);
        assert!((f.net_savings_5y + 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_reduction_no_payback() {
        let tariff = TariffSchedule::flat(0.2);
        let loads = PeriodValues::uniform(10.0);
        let f = evaluate(&loads, &loads, &tariff, 3000.0);
        assert_eq!(f.savings_month, 0.0);
        assert!(f.payback_years.is_none());
        assert_eq!(f.net_savings_5y, -3000.0);
    }
}
