//! Data models for the campus site.
//!
//! These types are serialized directly into the JSON API responses, so field
//! names follow the snake_case keys the frontend reads.

mod application;
mod course;
mod responses;

pub use application::*;
pub use course::*;
pub use responses::*;
