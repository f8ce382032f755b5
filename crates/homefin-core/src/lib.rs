//! homefin-core
//!
//! Calculation engines and services for the household finance tracker.
//! Depends on homefin-domain. No terminal I/O, no direct storage
//! interactions; persistence backends implement the `ProfileStorage` trait.

pub mod amortization;
pub mod error;
pub mod forecast;
pub mod schedule;
pub mod storage;
pub mod summary;

pub use amortization::AmortizationEngine;
pub use error::CoreError;
pub use forecast::ForecastEngine;
pub use schedule::{ScheduleService, UpcomingOccurrence};
pub use storage::{profile_warnings, ProfileBackupInfo, ProfileStorage};
pub use summary::{convert_to_eur, SummaryService};
