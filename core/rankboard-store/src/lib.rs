//! In-memory ranking store for Rankboard.
//!
//! The store has two parts:
//!
//! - [`Registry`]: the identifier -> rating map behind a reader/writer lock.
//!   It is the single source of truth and is shared as `Arc<Registry>`.
//! - [`RankingView`]: an ordered, ranked snapshot derived from the registry on
//!   every read. It is never cached, so reads always reflect the registry at
//!   the moment the snapshot was copied.
//!
//! Ordering is rating descending, then identifier ascending. Ranks use
//! competition ranking: entrants with equal ratings share a rank and the next
//! distinct rating is ranked `1 + number of strictly higher entrants`, so the
//! sequence `1, 2, 2, 4` is expected.

mod error;
mod ranking;
mod registry;

pub use error::{StoreError, StoreResult};
pub use ranking::{RankingView, DEFAULT_SEARCH_LIMIT};
pub use registry::Registry;
