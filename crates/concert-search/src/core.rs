//! Catalog backed searching.
//!
//! Screens that let a user pick an existing artist, venue or event hold an
//! [`EntitySearcher`] over whatever currently knows those entities (usually a
//! cache in front of the database). The searcher clones matches out of the
//! catalog; the catalog itself is never modified.
//!
//! ```rust
//! use concert_search::{Artist, EntitySearcher, SearchConfigBuilder, VecCatalog};
//!
//! let catalog = VecCatalog {
//!     artists: vec![
//!         Artist::new("Radiohead", "Alternative"),
//!         Artist::new("Portishead", "Trip Hop"),
//!     ],
//!     ..Default::default()
//! };
//! let searcher = EntitySearcher::with_config(catalog, SearchConfigBuilder::lenient().build());
//!
//! let matches = searcher.find_fuzzy_artist_matches_by_name("Radiohaed");
//! assert_eq!(matches[0].name, "Radiohead");
//! ```

use chrono::NaiveDate;
use concert_data::{Artist, Event, EventDetails, EventType, Venue};
use tracing::{debug, instrument, trace, warn};

use crate::{
    config::{NO_MAX_RESULTS, SearchConfig},
    error::Result,
    search::{
        adapters::{
            artist_distance, event_details_distance_by_artists, event_details_distance_by_venue,
            event_distance_by_artists, event_distance_by_venue, venue_distance,
        },
        rank_with_config,
    },
};

/// Source of the entities currently known to the application.
pub trait EntityCatalog {
    fn artists(&self) -> &[Artist];
    fn venues(&self) -> &[Venue];
    fn events(&self) -> &[Event];
    /// Listings from event discovery, which are not yet saved events
    fn event_details(&self) -> &[EventDetails];
}

/// Plain in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct VecCatalog {
    pub artists: Vec<Artist>,
    pub venues: Vec<Venue>,
    pub events: Vec<Event>,
    pub event_details: Vec<EventDetails>,
}

impl EntityCatalog for VecCatalog {
    fn artists(&self) -> &[Artist] {
        &self.artists
    }

    fn venues(&self) -> &[Venue] {
        &self.venues
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn event_details(&self) -> &[EventDetails] {
        &self.event_details
    }
}

/// Fuzzy name lookups against an [`EntityCatalog`].
#[derive(Debug, Clone)]
pub struct EntitySearcher<C> {
    catalog: C,
    config: SearchConfig,
}

impl<C: EntityCatalog> EntitySearcher<C> {
    /// Searcher using [`SearchConfig::default`].
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    pub fn with_config(catalog: C, config: SearchConfig) -> Self {
        debug!(?config, "Created EntitySearcher");
        Self { catalog, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn into_catalog(self) -> C {
        self.catalog
    }

    #[instrument(name = "Find Artist Matches", level = "debug", skip(self))]
    pub fn find_fuzzy_artist_matches_by_name(&self, name: &str) -> Vec<Artist> {
        let artists = self.catalog.artists();
        trace!(num_artists = artists.len(), "Searching known artists");
        rank_borrowed(name, artists, &self.config, artist_distance)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(name = "Find Venue Matches", level = "debug", skip(self))]
    pub fn find_fuzzy_venue_matches_by_name(&self, name: &str) -> Vec<Venue> {
        let venues = self.catalog.venues();
        trace!(num_venues = venues.len(), "Searching known venues");
        rank_borrowed(name, venues, &self.config, venue_distance)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(name = "Find Event Matches By Act", level = "debug", skip(self))]
    pub fn find_fuzzy_event_matches_by_act(&self, act: &str) -> Vec<Event> {
        let events = self.catalog.events();
        trace!(num_events = events.len(), "Searching known events by act");
        rank_borrowed(act, events, &self.config, event_distance_by_artists)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(name = "Find Event Matches By Venue", level = "debug", skip(self))]
    pub fn find_fuzzy_event_matches_by_venue(&self, venue: &str) -> Vec<Event> {
        let events = self.catalog.events();
        trace!(num_events = events.len(), "Searching known events by venue");
        rank_borrowed(venue, events, &self.config, event_distance_by_venue)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(name = "Find Listing Matches By Act", level = "debug", skip(self))]
    pub fn find_fuzzy_event_details_by_act(&self, act: &str) -> Vec<EventDetails> {
        let listings = self.catalog.event_details();
        trace!(num_listings = listings.len(), "Searching listings by act");
        rank_borrowed(act, listings, &self.config, event_details_distance_by_artists)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(name = "Find Listing Matches By Venue", level = "debug", skip(self))]
    pub fn find_fuzzy_event_details_by_venue(&self, venue: &str) -> Vec<EventDetails> {
        let listings = self.catalog.event_details();
        trace!(num_listings = listings.len(), "Searching listings by venue");
        rank_borrowed(venue, listings, &self.config, event_details_distance_by_venue)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Events matching `act` that happen on or after `today`, best match first.
    ///
    /// All act matches are ranked first and the result cap is applied to the
    /// upcoming ones, so past events never take up slots. Events whose date
    /// cannot be parsed are skipped. Fails only when there were matches and
    /// none of them had a usable date.
    #[instrument(name = "Find Upcoming Events By Act", level = "debug", skip(self))]
    pub fn find_upcoming_events_by_act(&self, act: &str, today: NaiveDate) -> Result<Vec<Event>> {
        let uncapped = SearchConfig {
            max_results: NO_MAX_RESULTS,
            ..self.config.clone()
        };
        let events = self.catalog.events();
        let matches = rank_borrowed(act, events, &uncapped, event_distance_by_artists);

        let mut upcoming = Vec::new();
        let mut num_dated = 0;
        let mut first_error = None;
        for event in matches {
            match event.event_type_on(today) {
                Ok(EventType::Future) => {
                    num_dated += 1;
                    upcoming.push(event);
                }
                Ok(EventType::Past) => num_dated += 1,
                Err(e) => {
                    warn!(
                        error = %e,
                        headliner = %event.main_act.name,
                        "Skipping event with no usable date"
                    );
                    first_error = first_error.or(Some(e));
                }
            }
        }
        if let (0, Some(e)) = (num_dated, first_error) {
            return Err(e.into());
        }

        if self.config.max_results != NO_MAX_RESULTS {
            upcoming.truncate(self.config.max_results);
        }
        debug!(num_upcoming = upcoming.len(), "Filtered matches to upcoming events");
        Ok(upcoming.into_iter().cloned().collect())
    }
}

/// Rank references into `items`, leaving the clone of each survivor to the caller.
fn rank_borrowed<'a, T, F>(
    term: &str,
    items: &'a [T],
    config: &SearchConfig,
    distance: F,
) -> Vec<&'a T>
where
    T: Sync,
    F: Fn(&str, &T) -> usize + Sync,
{
    rank_with_config(term, items.iter().collect(), config, |term, item: &&T| {
        distance(term, item)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SearchConfigBuilder, error::ConcertSearchError};

    fn event(headliner: &str, openers: &[&str], venue: &str, date: &str) -> Event {
        Event {
            main_act: Artist::new(headliner, "Rock"),
            openers: openers.iter().map(|name| Artist::new(*name, "Rock")).collect(),
            venue: Venue::new(venue, "Seattle", "WA"),
            date: date.to_string(),
            purchased: false,
        }
    }

    fn catalog() -> VecCatalog {
        VecCatalog {
            artists: vec![
                Artist::new("Pearl Jam", "Grunge"),
                Artist::new("Pearl Harbor", "Punk"),
                Artist::new("Soundgarden", "Grunge"),
            ],
            venues: vec![
                Venue::new("The Showbox", "Seattle", "WA"),
                Venue::new("Neumos", "Seattle", "WA"),
            ],
            events: vec![
                event("Pearl Jam", &["Mudhoney"], "Climate Pledge Arena", "2023-09-01"),
                event("Soundgarden", &[], "The Showbox", "2025-05-20"),
                event("Alice in Chains", &["Pearl Jam"], "The Showbox", "2025-06-01"),
            ],
            event_details: vec![EventDetails {
                name: "Mudhoney Homecoming".to_string(),
                event_genre: "Grunge".to_string(),
                price: "$30".to_string(),
                event: event("Mudhoney", &[], "Neumos", "2025-08-08"),
            }],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_find_artist_matches() {
        let searcher = EntitySearcher::new(catalog());
        let found = searcher.find_fuzzy_artist_matches_by_name("Pearl Jan");
        assert_eq!(found, vec![Artist::new("Pearl Jam", "Grunge")]);
        assert_eq!(searcher.catalog().artists.len(), 3, "Catalog is not modified");
    }

    #[test]
    fn test_find_venue_matches() {
        let searcher = EntitySearcher::new(catalog());
        let found = searcher.find_fuzzy_venue_matches_by_name("Showbox");
        assert!(found.is_empty(), "Missing article is 4 edits, above threshold 1");

        let found = searcher.find_fuzzy_venue_matches_by_name("The Shobox");
        assert_eq!(found[0].name, "The Showbox");
    }

    #[test]
    fn test_find_event_matches_by_act_and_venue() {
        let searcher = EntitySearcher::new(catalog());

        let by_act = searcher.find_fuzzy_event_matches_by_act("Pearl Jam");
        let headliners: Vec<&str> = by_act.iter().map(|e| e.main_act.name.as_str()).collect();
        assert_eq!(headliners, vec!["Pearl Jam", "Alice in Chains"]);

        let by_venue = searcher.find_fuzzy_event_matches_by_venue("The Showbox");
        assert_eq!(by_venue.len(), 2);
    }

    #[test]
    fn test_find_event_details() {
        let searcher = EntitySearcher::new(catalog());
        assert_eq!(searcher.find_fuzzy_event_details_by_act("Mudhoney").len(), 1);
        assert_eq!(searcher.find_fuzzy_event_details_by_venue("Neumos").len(), 1);
        assert!(searcher.find_fuzzy_event_details_by_venue("Showbox").is_empty());
    }

    #[test]
    fn test_config_is_applied() {
        let mut searcher =
            EntitySearcher::with_config(catalog(), SearchConfigBuilder::exact().build());
        assert!(searcher.find_fuzzy_artist_matches_by_name("Pearl Jan").is_empty());

        searcher.set_config(SearchConfigBuilder::lenient().max_results(1).build());
        // "Pearl Harb" is 2 edits from Pearl Harbor and 3 from Pearl Jam, threshold 4
        let found = searcher.find_fuzzy_artist_matches_by_name("Pearl Harb");
        assert_eq!(found, vec![Artist::new("Pearl Harbor", "Punk")]);
    }

    #[test]
    fn test_find_upcoming_events_by_act() {
        let searcher = EntitySearcher::new(catalog());
        let upcoming = searcher
            .find_upcoming_events_by_act("Pearl Jam", today())
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].main_act.name, "Alice in Chains");
    }

    #[test]
    fn test_find_upcoming_events_caps_after_date_filter() {
        let wilco = VecCatalog {
            events: vec![
                event("Wilco", &[], "Ryman Auditorium", "2020-01-01"),
                event("Wilco", &[], "Ryman Auditorium", "2030-01-01"),
                event("Wilco", &[], "Red Rocks", "2031-06-01"),
            ],
            ..Default::default()
        };
        let config = SearchConfigBuilder::exact().max_results(1).build();
        let searcher = EntitySearcher::with_config(wilco, config);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let upcoming = searcher.find_upcoming_events_by_act("Wilco", today).unwrap();
        assert_eq!(upcoming.len(), 1, "Past show must not use up the only slot");
        assert_eq!(upcoming[0].date, "2030-01-01");
    }

    #[test]
    fn test_find_upcoming_events_skips_undated_matches() {
        let wilco = VecCatalog {
            events: vec![
                event("Wilco", &[], "Ryman Auditorium", "2030-01-01"),
                event("Wilco", &[], "Red Rocks", "TBD"),
            ],
            ..Default::default()
        };
        let searcher = EntitySearcher::with_config(wilco, SearchConfigBuilder::exact().build());
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let upcoming = searcher.find_upcoming_events_by_act("Wilco", today).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue.name, "Ryman Auditorium");

        let mut broken = catalog();
        broken.events[0].date = "sometime".to_string();
        let searcher = EntitySearcher::new(broken);
        let upcoming = searcher.find_upcoming_events_by_act("Pearl Jam", self::today()).unwrap();
        assert_eq!(upcoming[0].main_act.name, "Alice in Chains");
    }

    #[test]
    fn test_find_upcoming_events_fails_when_no_match_has_a_date() {
        let mut broken = catalog();
        broken.events[0].date = "sometime".to_string();
        broken.events[2].date = "TBD".to_string();
        let searcher = EntitySearcher::new(broken);
        let err = searcher
            .find_upcoming_events_by_act("Pearl Jam", today())
            .unwrap_err();
        assert!(matches!(err, ConcertSearchError::DataError(_)));

        let searcher = EntitySearcher::new(catalog());
        let none = searcher.find_upcoming_events_by_act("Sleater-Kinney", today()).unwrap();
        assert!(none.is_empty(), "No matches is not an error");
    }

    #[test]
    fn test_rank_borrowed_points_into_catalog() {
        let catalog = catalog();
        let config = SearchConfigBuilder::moderate().build();
        let found = rank_borrowed("Pearl Jam", &catalog.events, &config, event_distance_by_artists);
        assert_eq!(found.len(), 2);
        assert!(std::ptr::eq(found[0], &catalog.events[0]));
        assert!(std::ptr::eq(found[1], &catalog.events[2]));
    }
}
