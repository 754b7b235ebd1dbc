//! Distance-ranked search
//!
//! This example shows how the ranking follows the position provider:
//! - no fix: alphabetical
//! - a fix arrives: nearest first, at 0.1 km resolution
//! - a finer precision through the search configuration

use std::sync::Arc;

use laavut::{LocationSearcher, SearchConfigBuilder, SharedPosition};
use laavut_data::{Coordinate, MemoryStore, test_data};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let position = Arc::new(SharedPosition::new());
    let searcher = LocationSearcher::builder()
        .store(MemoryStore::with_locations(test_data::sample_locations()))
        .shared_position_provider(position.clone())
        .build()?;

    println!("Before a fix:");
    print_ranked(&searcher, "laavu", None);

    // The platform's location callback would do this
    position.update(test_data::HELSINKI);
    println!("\nFrom Helsinki:");
    print_ranked(&searcher, "laavu", Some(test_data::HELSINKI));

    let hameenlinna = Coordinate::try_new(60.9959, 24.4643)?;
    position.update(hameenlinna);
    println!("\nFrom Hämeenlinna, metre precision:");
    let config = SearchConfigBuilder::new().distance_precision(3).build();
    for location in searcher.search_with_config("laavu", &config).locations() {
        println!(
            "  {:<20} {:>7.3} km",
            location.title().unwrap_or("Unknown"),
            hameenlinna.distance_km(&location.coordinate())
        );
    }

    Ok(())
}

fn print_ranked(searcher: &LocationSearcher, query: &str, from: Option<Coordinate>) {
    for location in searcher.search(query).locations() {
        match from {
            Some(from) => println!(
                "  {:<20} {:>6.1} km",
                location.title().unwrap_or("Unknown"),
                from.distance_km(&location.coordinate())
            ),
            None => println!("  {}", location.title().unwrap_or("Unknown")),
        }
    }
}
