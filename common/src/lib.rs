//! Shared models and pure workflow logic for the addendum console.
//!
//! Everything in this crate is free of browser APIs so the frontend's
//! decisions (vehicle resolution, submission building, listing filters)
//! can be unit tested natively.

pub mod category;
pub mod error;
pub mod identifier;
pub mod listing;
pub mod model;
pub mod requests;
pub mod resolution;
pub mod submission;
