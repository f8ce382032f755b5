//! homefin-domain
//!
//! Pure domain models for the household finance tracker (accounts,
//! transactions, recurring templates, goals, bills, schedules, forecasts).
//! No I/O, no storage. Only data types, calendar arithmetic, and the static
//! currency table.

pub mod account;
pub mod bill;
pub mod common;
pub mod currency;
pub mod forecast;
pub mod goal;
pub mod loan;
pub mod profile;
pub mod recurring;
pub mod transaction;

pub use account::*;
pub use bill::*;
pub use common::*;
pub use currency::*;
pub use forecast::*;
pub use goal::*;
pub use loan::*;
pub use profile::*;
pub use recurring::*;
pub use transaction::*;
