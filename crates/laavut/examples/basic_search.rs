//! Basic location search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Creating a searcher over an in-memory snapshot
//! - Single and multi-word queries
//! - Rendering the three empty states

use laavut::{LocationSearcher, SearchOutcome};
use laavut_data::{MemoryStore, test_data};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // No position provider: results come back alphabetically
    let store = MemoryStore::with_locations(test_data::sample_locations());
    let searcher = LocationSearcher::new(store);

    println!("Searching for 'laavu':");
    print_outcome(&searcher.search("laavu"), 3);

    // Every word has to match
    println!("\nSearching for 'mäen laavu':");
    print_outcome(&searcher.search("mäen laavu"), 3);

    // Subtitles take part through their first word
    println!("\nSearching for 'kota':");
    print_outcome(&searcher.search("kota"), 3);

    println!("\nSearching for 'zzz':");
    print_outcome(&searcher.search("zzz"), 3);

    println!("\nSearching for '':");
    print_outcome(&searcher.search(""), 3);

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, limit: usize) {
    match outcome {
        SearchOutcome::Idle => println!("  (type to search)"),
        SearchOutcome::NoResults { .. } => {
            println!("  {}", outcome.message().unwrap_or_default());
        }
        SearchOutcome::Results(locations) => {
            for (i, location) in locations.iter().take(limit).enumerate() {
                println!(
                    "  {}. {} - {}",
                    i + 1,
                    location.title().unwrap_or("Unknown"),
                    location.subtitle().unwrap_or("")
                );
            }
            if locations.len() > limit {
                println!("  ... and {} more results", locations.len() - limit);
            }
        }
    }
}
