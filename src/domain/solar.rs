use serde::{Deserialize, Serialize};

/// Rooftop PV installation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarSpec {
    /// Nameplate capacity (kWp)
    pub system_size_kwp: f64,
    /// Installation cost in profile currency
    pub install_cost: f64,
    /// System losses derating, conceptually 0.0-1.0
    pub performance_ratio: f64,
    /// Effective full-sun hours per day, all attributed to the midday period
    pub peak_sun_hours_midday: f64,
}

impl SolarSpec {
    /// Stand-in for a household without an installation: zero capacity and cost.
    /// PSH and PR are still needed to size a recommended system.
    pub fn absent(peak_sun_hours_midday: f64, performance_ratio: f64) -> Self {
        Self {
            system_size_kwp: 0.0,
            install_cost: 0.0,
            performance_ratio,
            peak_sun_hours_midday,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.system_size_kwp > 0.0
    }
}

/// Partial update; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolarUpdate {
    pub system_size_kwp: Option<f64>,
    pub install_cost: Option<f64>,
    pub performance_ratio: Option<f64>,
    pub peak_sun_hours_midday: Option<f64>,
}

impl SolarUpdate {
    pub fn apply_to(&self, current: SolarSpec) -> SolarSpec {
        SolarSpec {
            system_size_kwp: self.system_size_kwp.unwrap_or(current.system_size_kwp),
            install_cost: self.install_cost.unwrap_or(current.install_cost),
            performance_ratio: self.performance_ratio.unwrap_or(current.performance_ratio),
            peak_sun_hours_midday: self
                .peak_sun_hours_midday
                .unwrap_or(current.peak_sun_hours_midday),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_unset_fields() {
        let current = SolarSpec {
            system_size_kwp: 3.0,
            install_cost: 4500.0,
            performance_ratio: 0.8,
            peak_sun_hours_midday: 4.5,
        };
        let update = SolarUpdate {
            install_cost: Some(5000.0),
            ..Default::default()
        };
        let next = update.apply_to(current);
        assert_eq!(next.install_cost, 5000.0);
        assert_eq!(next.system_size_kwp, 3.0);
        assert_eq!(next.performance_ratio, 0.8);
    }

    #[test]
    fn test_absent_has_no_capacity() {
        let spec = SolarSpec::absent(4.0, 0.75);
        assert!(!spec.is_installed());
        assert_eq!(spec.install_cost, 0.0);
        assert_eq!(spec.peak_sun_hours_midday, 4.0);
    }
}
