// Aperture: creator analytics for exported Instagram data
//
// This is the library root. Each module corresponds to one stage of the
// analytics pipeline: raw data package in, derived report structures out.

pub mod achievements;
pub mod analysis;
pub mod config;
pub mod insights;
pub mod model;
pub mod output;
pub mod report;
pub mod weekly;
