//! Per-entity distance functions.
//!
//! Each reduces an entity to its probe string(s) and returns the smallest edit
//! distance between the term and any probe. All share the
//! `(term, candidate) -> distance` shape expected by [`rank`](super::rank).

use concert_data::{Artist, Event, EventDetails, Venue};

use crate::distance::edit_distance;

pub fn artist_distance(term: &str, artist: &Artist) -> usize {
    edit_distance(term, &artist.name)
}

pub fn venue_distance(term: &str, venue: &Venue) -> usize {
    edit_distance(term, &venue.name)
}

/// Closest match over the headliner and every opener.
pub fn event_distance_by_artists(term: &str, event: &Event) -> usize {
    event
        .openers
        .iter()
        .map(|opener| artist_distance(term, opener))
        .fold(artist_distance(term, &event.main_act), usize::min)
}

pub fn event_distance_by_venue(term: &str, event: &Event) -> usize {
    venue_distance(term, &event.venue)
}

pub fn event_details_distance_by_artists(term: &str, details: &EventDetails) -> usize {
    event_distance_by_artists(term, &details.event)
}

pub fn event_details_distance_by_venue(term: &str, details: &EventDetails) -> usize {
    event_distance_by_venue(term, &details.event)
}

/// Identity probe for plain strings.
pub fn string_distance<S: AsRef<str>>(term: &str, candidate: &S) -> usize {
    edit_distance(term, candidate.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(headliner: &str, openers: &[&str], venue: &str) -> Event {
        Event {
            main_act: Artist::new(headliner, "Rock"),
            openers: openers.iter().map(|name| Artist::new(*name, "Rock")).collect(),
            venue: Venue::new(venue, "Chicago", "IL"),
            date: "2024-07-04".to_string(),
            purchased: false,
        }
    }

    #[test]
    fn test_artist_and_venue_use_name_only() {
        let artist = Artist::new("Slowdive", "Shoegaze");
        assert_eq!(artist_distance("Slowdive", &artist), 0);
        assert_eq!(artist_distance("Shoegaze", &artist), edit_distance("Shoegaze", "Slowdive"));

        let venue = Venue::new("Metro", "Chicago", "IL");
        assert_eq!(venue_distance("Metro", &venue), 0);
        assert_eq!(venue_distance("Chicago", &venue), edit_distance("Chicago", "Metro"));
    }

    #[test]
    fn test_event_by_artists_takes_closest_act() {
        let e = event("Arcade Fire", &["Wolf Parade", "Spoon"], "Aragon Ballroom");
        assert_eq!(event_distance_by_artists("Spoon", &e), 0);
        assert_eq!(event_distance_by_artists("Spon", &e), 1);
        assert_eq!(event_distance_by_artists("Arcade Fire", &e), 0);
    }

    #[test]
    fn test_event_by_artists_without_openers() {
        let e = event("Spoon", &[], "Metro");
        assert_eq!(event_distance_by_artists("Spoon", &e), 0);
        assert_eq!(event_distance_by_artists("", &e), 5);
    }

    #[test]
    fn test_event_by_venue() {
        let e = event("Spoon", &[], "Metro");
        assert_eq!(event_distance_by_venue("Metro", &e), 0);
        assert_eq!(event_distance_by_venue("Spoon", &e), edit_distance("Spoon", "Metro"));
    }

    #[test]
    fn test_event_details_project_to_event() {
        let details = EventDetails {
            name: "Summer Tour 2024".to_string(),
            event_genre: "Indie".to_string(),
            price: "$45".to_string(),
            event: event("Spoon", &["Bully"], "Metro"),
        };
        assert_eq!(event_details_distance_by_artists("Bully", &details), 0);
        assert_eq!(event_details_distance_by_venue("Metro", &details), 0);
        assert_ne!(
            event_details_distance_by_artists("Summer Tour 2024", &details),
            0,
            "Listing title is not an act"
        );
    }

    #[test]
    fn test_string_distance_accepts_owned_and_borrowed() {
        assert_eq!(string_distance("Muse", &"Muse"), 0);
        assert_eq!(string_distance("Muse", &String::from("Mute")), 1);
    }
}
