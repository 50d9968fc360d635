// Input data model — the raw Instagram data package the pipeline consumes.
//
// These types are the core's only external boundary. Every optional field
// defaults to zero/empty at deserialization time so the analysis code never
// has to re-check optionality.

pub mod media;
pub mod package;
pub mod profile;

pub use media::{MediaPost, MediaType};
pub use package::{ProfileSnapshot, RawDataPackage};
pub use profile::{AccountType, Profile};
