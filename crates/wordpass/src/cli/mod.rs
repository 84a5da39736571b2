//! Command line entry points.
pub mod wordpass;
