//! Basic concert search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Ranking plain names with the free functions
//! - Searching events by any act on the bill
//! - Using an `EntitySearcher` with tolerance presets

use concert_search::{
    Artist, EntitySearcher, Event, LENIENT_TOLERANCE, NO_MAX_RESULTS, SearchConfigBuilder,
    VecCatalog, Venue, search_events_by_artists, search_strings,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    concert_search::init_logging(tracing::Level::INFO)?;

    println!("Searching names for 'Floyd':");
    let names = vec!["Pink Floyd", "Floyd", "Flood", "Lloyd Cole"];
    for name in search_strings("Floyd", names, NO_MAX_RESULTS, LENIENT_TOLERANCE) {
        println!("  {name}");
    }

    let catalog = sample_catalog();

    println!("\nEvents featuring 'Phoebe Bridgers':");
    let events = search_events_by_artists(
        "Phoebe Bridgers",
        catalog.events.clone(),
        NO_MAX_RESULTS,
        LENIENT_TOLERANCE,
    );
    print_events(&events);

    let searcher = EntitySearcher::with_config(catalog, SearchConfigBuilder::strict().build());
    println!("\nStrict artist lookup for 'Boygenius':");
    for artist in searcher.find_fuzzy_artist_matches_by_name("Boygenius") {
        println!("  {} ({})", artist.name, artist.genre);
    }

    println!("\nStrict venue lookup for 'Hollywood Bowl':");
    print_events(&searcher.find_fuzzy_event_matches_by_venue("Hollywood Bowl"));

    Ok(())
}

fn sample_catalog() -> VecCatalog {
    let bowl = Venue::new("Hollywood Bowl", "Los Angeles", "CA");
    VecCatalog {
        artists: vec![
            Artist::new("boygenius", "Indie Rock"),
            Artist::new("Phoebe Bridgers", "Indie Folk"),
        ],
        venues: vec![bowl.clone()],
        events: vec![
            Event {
                main_act: Artist::new("boygenius", "Indie Rock"),
                openers: vec![Artist::new("Muna", "Synth Pop")],
                venue: bowl,
                date: "2023-10-14".to_string(),
                purchased: true,
            },
            Event {
                main_act: Artist::new("Taylor Swift", "Pop"),
                openers: vec![Artist::new("Phoebe Bridgers", "Indie Folk")],
                venue: Venue::new("SoFi Stadium", "Inglewood", "CA"),
                date: "2023-08-05".to_string(),
                purchased: false,
            },
        ],
        event_details: Vec::new(),
    }
}

fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("  No events found");
    }
    for event in events {
        println!(
            "  {} at {} on {}",
            event.main_act.name, event.venue.name, event.date
        );
    }
}
