//! Bulk seeding of the registry.

use crate::config::SeedOptions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rankboard_store::{Registry, StoreResult};
use rankboard_types::{EntrantId, Rating};
use tracing::info;

/// Draws a rating uniformly from the full valid range.
pub fn random_rating_value<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(i64::from(Rating::MIN)..=i64::from(Rating::MAX))
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Seeds `count` entrants named `{prefix}1 ..= {prefix}count`.
///
/// Existing entrants with the same names are overwritten. Returns the number
/// of upserts performed.
pub fn seed(registry: &Registry, count: usize, options: &SeedOptions) -> StoreResult<usize> {
    let mut rng = make_rng(options.rng_seed);
    let prefix = options.prefix.as_str();
    seed_with(
        registry,
        count,
        |n| EntrantId::new(format!("{prefix}{n}")),
        &mut rng,
        options.progress_every,
    )
}

/// Seeds `count` entrants using a caller-chosen naming scheme.
///
/// `naming` receives the 1-based sequence number of each entrant.
pub fn seed_with<R, F>(
    registry: &Registry,
    count: usize,
    mut naming: F,
    rng: &mut R,
    progress_every: usize,
) -> StoreResult<usize>
where
    R: Rng + ?Sized,
    F: FnMut(usize) -> EntrantId,
{
    info!("Seeding {count} entrants...");

    for n in 1..=count {
        registry.upsert(naming(n), random_rating_value(rng))?;
        if progress_every > 0 && n % progress_every == 0 {
            info!("Seeded {n} entrants...");
        }
    }

    info!("Seeded {count} entrants ({} total)", registry.count());
    Ok(count)
}
