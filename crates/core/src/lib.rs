pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AttributionError, AttributionResult};
pub use types::{ChannelType, VisitSignals, CROSS_NETWORK_CAMPAIGN, DIRECT_REFERRER};
