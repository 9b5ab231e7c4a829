pub mod addendum;
pub mod api;
pub mod vehicle;
