//! Typed search entry points.
//!
//! Each function binds [`rank`] to the distance adapter for one entity type and
//! shares its contract: results are the input entities whose edit distance to
//! `term` is at most `floor(chars(term) * tolerance)`, closest first, ties in
//! input order, capped at `max_results` ([`NO_MAX_RESULTS`](crate::NO_MAX_RESULTS)
//! for all).

pub mod adapters;
mod rank;

use concert_data::{Artist, Event, EventDetails, Venue};

use adapters::{
    artist_distance, event_details_distance_by_artists, event_details_distance_by_venue,
    event_distance_by_artists, event_distance_by_venue, string_distance, venue_distance,
};
pub use rank::{rank, rank_with_config};

pub fn search_artists(
    term: &str,
    artists: Vec<Artist>,
    max_results: usize,
    tolerance: f64,
) -> Vec<Artist> {
    rank(term, artists, max_results, tolerance, artist_distance)
}

pub fn search_venues(
    term: &str,
    venues: Vec<Venue>,
    max_results: usize,
    tolerance: f64,
) -> Vec<Venue> {
    rank(term, venues, max_results, tolerance, venue_distance)
}

/// Events where the headliner or any opener is close to `term`.
pub fn search_events_by_artists(
    term: &str,
    events: Vec<Event>,
    max_results: usize,
    tolerance: f64,
) -> Vec<Event> {
    rank(term, events, max_results, tolerance, event_distance_by_artists)
}

pub fn search_events_by_venue(
    term: &str,
    events: Vec<Event>,
    max_results: usize,
    tolerance: f64,
) -> Vec<Event> {
    rank(term, events, max_results, tolerance, event_distance_by_venue)
}

pub fn search_event_details_by_artist(
    term: &str,
    listings: Vec<EventDetails>,
    max_results: usize,
    tolerance: f64,
) -> Vec<EventDetails> {
    rank(
        term,
        listings,
        max_results,
        tolerance,
        event_details_distance_by_artists,
    )
}

pub fn search_event_details_by_venue(
    term: &str,
    listings: Vec<EventDetails>,
    max_results: usize,
    tolerance: f64,
) -> Vec<EventDetails> {
    rank(
        term,
        listings,
        max_results,
        tolerance,
        event_details_distance_by_venue,
    )
}

pub fn search_strings<S: AsRef<str>>(
    term: &str,
    options: Vec<S>,
    max_results: usize,
    tolerance: f64,
) -> Vec<S> {
    rank(term, options, max_results, tolerance, string_distance::<S>)
}
