use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{
    ApplianceRecord, NewProfile, ProfileStore, RepoError, RepoResult, SolarConfigRecord,
};
use crate::domain::{ApplianceUsage, Profile, SolarSpec, SolarUpdate};

#[derive(Default)]
struct Tables {
    profiles: HashMap<Uuid, Profile>,
    /// Profile ids in creation order
    order: Vec<Uuid>,
    appliances: HashMap<Uuid, Vec<ApplianceRecord>>,
    solar: HashMap<Uuid, SolarConfigRecord>,
}

impl Tables {
    fn ensure_profile(&self, id: Uuid) -> RepoResult<()> {
        if self.profiles.contains_key(&id) {
            Ok(())
        } else {
            Err(RepoError::NotFound {
                entity: "Profile",
                id,
            })
        }
    }
}

/// Process-local store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn create_profile(&self, profile: NewProfile) -> RepoResult<Profile> {
        let profile = Profile {
            id: Uuid::new_v4(),
            name: profile.name,
            location_type: profile.location_type,
            region: profile.region,
            currency: profile.currency,
            tariff: profile.tariff,
            created_at: Utc::now(),
        };

        let mut tables = self.tables.write().await;
        tables.order.push(profile.id);
        tables.profiles.insert(profile.id, profile.clone());
        debug!(profile_id = %profile.id, "profile stored");
        Ok(profile)
    }

    async fn list_profiles(&self) -> RepoResult<Vec<Profile>> {
        let tables = self.tables.read().await;
        Ok(tables
            .order
            .iter()
            .rev()
            .filter_map(|id| tables.profiles.get(id).cloned())
            .collect())
    }

    async fn get_profile(&self, id: Uuid) -> RepoResult<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound {
                entity: "Profile",
                id,
            })
    }

    async fn add_appliance(&self, profile_id: Uuid, usage: ApplianceUsage) -> RepoResult<ApplianceRecord> {
        let mut tables = self.tables.write().await;
        tables.ensure_profile(profile_id)?;

        let record = ApplianceRecord {
            id: Uuid::new_v4(),
            profile_id,
            usage,
            created_at: Utc::now(),
        };
        tables
            .appliances
            .entry(profile_id)
            .or_default()
            .push(record.clone());
        debug!(%profile_id, appliance_id = %record.id, "appliance stored");
        Ok(record)
    }

    async fn list_appliances(&self, profile_id: Uuid) -> RepoResult<Vec<ApplianceRecord>> {
        let tables = self.tables.read().await;
        tables.ensure_profile(profile_id)?;
        Ok(tables.appliances.get(&profile_id).cloned().unwrap_or_default())
    }

    async fn get_solar(&self, profile_id: Uuid) -> RepoResult<Option<SolarConfigRecord>> {
        let tables = self.tables.read().await;
        tables.ensure_profile(profile_id)?;
        Ok(tables.solar.get(&profile_id).cloned())
    }

    async fn upsert_solar(
        &self,
        profile_id: Uuid,
        update: SolarUpdate,
        defaults: SolarSpec,
    ) -> RepoResult<SolarConfigRecord> {
        let mut tables = self.tables.write().await;
        tables.ensure_profile(profile_id)?;

        let record = tables
            .solar
            .entry(profile_id)
            .or_insert_with(|| SolarConfigRecord {
                profile_id,
                spec: defaults,
                created_at: Utc::now(),
            });
        record.spec = update.apply_to(record.spec);
        Ok(record.clone())
    }
}
