use anyhow::Result;
use figment::{
    providers::{Data, Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::domain::{SolarSpec, TariffSchedule};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub defaults: ProfileDefaults,
    pub solar_defaults: SolarDefaults,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub cors_origin: String,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
            cors_origin: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Values applied when a create-profile request leaves fields out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaults {
    pub profile_name: String,
    pub location_type: String,
    pub currency: String,
    pub price_per_kwh: f64,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            profile_name: "My Home".to_string(),
            location_type: "city".to_string(),
            currency: "EUR".to_string(),
            price_per_kwh: 0.20,
        }
    }
}

impl ProfileDefaults {
    pub fn tariff(&self) -> TariffSchedule {
        TariffSchedule::flat(self.price_per_kwh)
    }
}

/// Assumed installation parameters when a profile has none stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarDefaults {
    pub performance_ratio: f64,
    pub peak_sun_hours_midday: f64,
}

impl Default for SolarDefaults {
    fn default() -> Self {
        Self {
            performance_ratio: 0.75,
            peak_sun_hours_midday: 4.0,
        }
    }
}

impl SolarDefaults {
    pub fn absent_spec(&self) -> SolarSpec {
        SolarSpec::absent(self.peak_sun_hours_midday, self.performance_ratio)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub seed: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::figment(Toml::file("config/default.toml"))
    }

    fn figment(file: Data<Toml>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(file)
            .merge(Env::prefixed("HEE__").split("__"));
        Ok(figment.extract()?)
    }
}
