use super::{Gazetteer, Place};
use std::sync::OnceLock;

static GOA: OnceLock<Gazetteer> = OnceLock::new();

pub fn goa_places() -> Vec<Place> {
    serde_json::from_str(include_str!("goa.json")).expect("Failed to parse goa.json")
}

/// Built once and shared; cloning a `Gazetteer` only bumps reference counts.
pub fn goa() -> &'static Gazetteer {
    GOA.get_or_init(|| Gazetteer::new(goa_places()).expect("goa.json has invalid entries"))
}
