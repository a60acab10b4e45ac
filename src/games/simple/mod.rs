//! A minimal card table for exercising drop zones.
//!
//! The local player holds a hand of cards and may either commit cards to
//! an open challenge or discard them. [`install_standard_zones`] registers
//! the two matching zones built from [`presets`](crate::rules::presets).

mod table;

pub use table::{
    install_standard_zones, standard_zones, Challenge, SimpleCard, SimpleTable, TableLayout,
};
