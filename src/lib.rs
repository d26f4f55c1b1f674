//! Mentor Match - skill-based mentor ranking and skill gap analysis
//!
//! The core ranks candidate mentors for a student by cosine similarity of
//! their skill term-frequency vectors, and computes which target skills a
//! student is missing. Both operations are pure and stateless; the `routes`
//! module wraps them in an HTTP service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{gap, score};
pub use error::MatchError;
pub use models::{Candidate, Recommendations, ScoredCandidate};
