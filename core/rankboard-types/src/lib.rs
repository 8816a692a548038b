//! Core type definitions for Rankboard.
//!
//! This crate defines the plain data types shared by the ranking store, the
//! update simulator and the HTTP layer:
//! - Entrant identifiers and validated ratings
//! - Ranked projections (ranked entrants, pages, aggregate statistics)
//! - Page request normalization
//!
//! Nothing here holds shared state; the registry lives in `rankboard-store`.

mod entrant;
mod ids;
mod page;
mod rating;

pub use entrant::{Entrant, RankedEntrant, Stats};
pub use ids::EntrantId;
pub use page::{Page, PageRequest, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use rating::{InvalidRating, Rating};
