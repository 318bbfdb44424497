pub mod appliance;
pub mod period;
pub mod profile;
pub mod solar;
pub mod tariff;

pub use appliance::*;
pub use period::*;
pub use profile::*;
pub use solar::*;
pub use tariff::*;
