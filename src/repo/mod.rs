//! Persistence of profiles, appliances and solar configurations.
//!
//! The analysis core never touches this module; handlers load records here and
//! hand plain values to [`crate::analysis::analyze`].

pub mod demo;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{ApplianceUsage, Profile, SolarSpec, SolarUpdate, TariffSchedule};

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Fields of a profile before it is stored
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub location_type: String,
    pub region: Option<String>,
    pub currency: String,
    pub tariff: TariffSchedule,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplianceRecord {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub usage: ApplianceUsage,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolarConfigRecord {
    pub profile_id: Uuid,
    pub spec: SolarSpec,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, profile: NewProfile) -> RepoResult<Profile>;

    /// Newest first
    async fn list_profiles(&self) -> RepoResult<Vec<Profile>>;

    async fn get_profile(&self, id: Uuid) -> RepoResult<Profile>;

    async fn add_appliance(&self, profile_id: Uuid, usage: ApplianceUsage) -> RepoResult<ApplianceRecord>;

    /// Insertion order
    async fn list_appliances(&self, profile_id: Uuid) -> RepoResult<Vec<ApplianceRecord>>;

    async fn get_solar(&self, profile_id: Uuid) -> RepoResult<Option<SolarConfigRecord>>;

    /// Apply `update` to the stored config, or to `defaults` if there is none yet
    async fn upsert_solar(
        &self,
        profile_id: Uuid,
        update: SolarUpdate,
        defaults: SolarSpec,
    ) -> RepoResult<SolarConfigRecord>;
}
