//! Concert Search - approximate name matching for artists, venues and events
//!
//! Given a search term and a collection of candidate entities, concert-search scores
//! every candidate by Levenshtein edit distance, drops those further away than the
//! caller's tolerance allows, and returns the rest closest first.
//!
//! # Quick Start
//!
//! ```rust
//! use concert_search::{Artist, LENIENT_TOLERANCE, NO_MAX_RESULTS, search_artists};
//!
//! let artists = vec![
//!     Artist::new("Pink Floyd", "Progressive Rock"),
//!     Artist::new("Floyd", "Hip Hop"),
//!     Artist::new("Flood", "Industrial"),
//! ];
//!
//! // threshold = floor(5 * 0.4) = 2 edits
//! let matches = search_artists("Floyd", artists, NO_MAX_RESULTS, LENIENT_TOLERANCE);
//! let names: Vec<_> = matches.iter().map(|a| a.name.as_str()).collect();
//! assert_eq!(names, ["Floyd", "Flood"]);
//! ```
//!
//! # Matching rules
//!
//! - The threshold is `floor(chars(term) * tolerance)`. Tolerance is used as given;
//!   only [`SearchConfigBuilder::custom_tolerance`] validates it.
//! - Ties keep their input order, so paging through results is reproducible.
//! - `max_results` of [`NO_MAX_RESULTS`] returns every match.
//! - Ranking never fails. Empty inputs give empty outputs.
//!
//! Any other entity type can be ranked with [`rank`] and a custom distance closure.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
mod distance;
pub mod error;
mod search;

pub use crate::core::{EntityCatalog, EntitySearcher, VecCatalog};

pub use concert_data as data;
pub use concert_data::{Artist, Event, EventDetails, EventType, Venue};
pub use config::{
    DEFAULT_PARALLEL_THRESHOLD, EXACT_TOLERANCE, LENIENT_TOLERANCE, MODERATE_TOLERANCE,
    NO_MAX_RESULTS, STRICT_TOLERANCE, SearchConfig, SearchConfigBuilder, Tolerance,
};
pub use distance::edit_distance;
pub use search::{
    adapters, rank, rank_with_config, search_artists, search_event_details_by_artist,
    search_event_details_by_venue, search_events_by_artists, search_events_by_venue,
    search_strings, search_venues,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the concert-search library.
///
/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`, falling back to
/// `level`. Later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use concert_search::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), concert_search::error::ConcertSearchError>(())
/// ```
pub fn init_logging(
    level: impl Into<LevelFilter>,
) -> Result<&'static (), error::ConcertSearchError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("rayon_core=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        setup_test_env();
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }

    #[test]
    fn test_catalog_search_round() {
        setup_test_env();

        let catalog = VecCatalog {
            artists: vec![Artist::new("U2", "Rock"), Artist::new("U3", "Rock")],
            ..Default::default()
        };
        let searcher = EntitySearcher::with_config(catalog, SearchConfigBuilder::exact().build());
        let found = searcher.find_fuzzy_artist_matches_by_name("U2");
        assert_eq!(found, vec![Artist::new("U2", "Rock")]);
    }
}
