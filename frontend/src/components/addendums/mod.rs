//! The two addendum pages: creation form and per-category listing.

pub mod create;
pub mod list;
