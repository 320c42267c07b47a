//! Normalized view models.
//!
//! Every type here is produced by [`crate::normalize`] and is stable regardless
//! of which payload shape the API returned:
//! - [`Team`] and [`Driver`] are the catalogue entities
//! - [`DriverStandingItem`] and [`ConstructorStandingItem`] are championship rows
//!   carrying a minimal [`DriverRef`] / [`TeamRef`]
//! - [`DriversChampionship`] and [`ConstructorsChampionship`] wrap the rows of a
//!   season in the order the API ranked them
//!
//! Required string fields are never absent (they default to the empty string),
//! so rendering code never has to handle a missing id or name.

mod driver;
mod standings;
mod team;

pub use driver::{Driver, DriverRef};
pub use standings::{
    ConstructorStandingItem, ConstructorsChampionship, DriverStandingItem, DriversChampionship,
};
pub use team::{Team, TeamRef};
