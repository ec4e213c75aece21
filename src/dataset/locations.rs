/// A fixed seed location; the generator derives one risk record from each.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Built-in demo seed set: ten Bengaluru areas.
///
/// Order matters; record ids are assigned by position in this list.
pub fn seed_locations() -> Vec<Location> {
    vec![
        Location { name: "MG Road", lat: 12.9716, lng: 77.5946 },
        Location { name: "Koramangala", lat: 12.9352, lng: 77.6245 },
        Location { name: "Whitefield", lat: 12.9698, lng: 77.7500 },
        Location { name: "BTM Layout", lat: 12.9279, lng: 77.6271 },
        Location { name: "Jayanagar", lat: 12.9141, lng: 77.6097 },
        Location { name: "Cunningham Road", lat: 12.9762, lng: 77.6033 },
        Location { name: "Marathahalli", lat: 12.9591, lng: 77.7040 },
        Location { name: "JP Nagar", lat: 12.9343, lng: 77.6101 },
        Location { name: "Bannerghatta Road", lat: 12.9180, lng: 77.6298 },
        Location { name: "Indiranagar", lat: 12.9719, lng: 77.6412 },
    ]
}
