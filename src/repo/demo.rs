use tracing::info;

use super::{NewProfile, ProfileStore, RepoResult};
use crate::domain::{ApplianceUsage, PeriodValues, Profile, SolarSpec, SolarUpdate, TariffSchedule};

/// Insert a sample village household with lamps, an air conditioner, a fridge and 3 kWp of solar
pub async fn seed(store: &dyn ProfileStore) -> RepoResult<Profile> {
    let profile = store
        .create_profile(NewProfile {
            name: "Demo House".to_string(),
            location_type: "village".to_string(),
            region: Some("Example Region".to_string()),
            currency: "EUR".to_string(),
            tariff: TariffSchedule::new(0.22, 0.22, 0.25, 0.18),
        })
        .await?;

    let appliances = [
        ApplianceUsage::new("House lamps", "lamp", 60.0)
            .with_quantity(8)
            .with_hours(PeriodValues::new(0.0, 0.0, 5.0, 0.0)),
        ApplianceUsage::new("Air conditioner", "ac", 1200.0)
            .with_hours(PeriodValues::new(2.0, 4.0, 2.0, 0.0)),
        ApplianceUsage::new("Refrigerator", "fridge", 150.0).with_hours(PeriodValues::uniform(6.0)),
    ];
    for appliance in appliances {
        store.add_appliance(profile.id, appliance).await?;
    }

    let spec = SolarSpec {
        system_size_kwp: 3.0,
        install_cost: 4500.0,
        performance_ratio: 0.75,
        peak_sun_hours_midday: 4.5,
    };
    store
        .upsert_solar(
            profile.id,
            SolarUpdate {
                system_size_kwp: Some(spec.system_size_kwp),
                install_cost: Some(spec.install_cost),
                performance_ratio: Some(spec.performance_ratio),
                peak_sun_hours_midday: Some(spec.peak_sun_hours_midday),
            },
            spec,
        )
        .await?;

    info!(profile_id = %profile.id, "demo profile created");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::InMemoryStore;

    #[tokio::test]
    async fn test_seed_creates_full_household() {
        let store = InMemoryStore::new();
        let profile = seed(&store).await.unwrap();

        assert_eq!(profile.location_type, "village");
        assert_eq!(store.list_appliances(profile.id).await.unwrap().len(), 3);
        let solar = store.get_solar(profile.id).await.unwrap().unwrap();
        assert_eq!(solar.spec.system_size_kwp, 3.0);
        assert_eq!(solar.spec.install_cost, 4500.0);
    }
}
