#![doc(test(attr(deny(warnings))))]

//! homefin bundles the calculation core of a household finance tracker:
//! amortization schedules for loans, day-by-day liquid balance forecasts,
//! and JSON document persistence for the whole financial profile.

pub mod utils;

pub use homefin_config::{Config, ConfigError, ConfigManager};
pub use homefin_core::{
    convert_to_eur, profile_warnings, AmortizationEngine, CoreError, ForecastEngine,
    ProfileBackupInfo, ProfileStorage, ScheduleService, SummaryService, UpcomingOccurrence,
};
pub use homefin_domain::*;
pub use homefin_storage_json::JsonProfileStorage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("homefin tracing initialized.");
    });
}
