//! Core domain logic: request/result types, payload normalization, departure pinning.
//!
//! - [`TravelMode`] / [`CommuteRequest`] / [`CommuteResult`] — the data model
//! - [`normalize`] — upstream payload text → clean [`CommuteResult`]
//! - [`departure`] — 13:00-local departure time computation

pub mod departure;
pub mod normalize;
pub mod types;

pub use types::{CommuteRequest, CommuteResult, TravelMode};
