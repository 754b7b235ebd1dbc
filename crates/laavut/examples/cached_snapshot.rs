//! Searching a snapshot file
//!
//! This example converts decoded feed waypoints into locations, writes them the
//! way the fetch routine leaves them on disk, and searches the file-backed store.

use std::io::Write;

use laavut::LocationSearcher;
use laavut_data::{JsonFileStore, Location, Waypoint};

fn waypoint(name: &str, sym: &str, lat: &str, lon: &str) -> Waypoint {
    Waypoint {
        lat: Some(lat.to_string()),
        lon: Some(lon.to_string()),
        name: Some(name.to_string()),
        time: Some("2016-08-29T09:30:00Z".to_string()),
        sym: Some(sym.to_string()),
        cmt: None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let waypoints = [
        waypoint("Koukkujärven laavu", "Lodge", "60.3511", "24.5503"),
        waypoint("Kaitalammen kota", "Campground", "60.3102", "24.5211"),
        waypoint("Levähdyspaikka", "Picnic Area", "60.4001", "24.7002"),
        // Dropped: no coordinates
        Waypoint {
            name: Some("Nimetön".to_string()),
            ..Default::default()
        },
    ];
    let locations = waypoints
        .iter()
        .filter_map(Location::from_waypoint)
        .collect::<Vec<_>>();
    println!("Converted {} of {} waypoints", locations.len(), waypoints.len());

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_json::to_string_pretty(&locations)?.as_bytes())?;

    let searcher = LocationSearcher::new(JsonFileStore::open(file.path())?);
    println!("{}", searcher.info().summary());

    for query in ["laavu", "kota", "tien"] {
        println!("\n'{query}':");
        let outcome = searcher.search(query);
        match outcome.message() {
            Some(message) => println!("  {message}"),
            None => println!("{outcome}"),
        }
    }

    Ok(())
}
