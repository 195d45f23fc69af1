//! Static campus information.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Building {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampusInfo {
    pub buildings: Vec<Building>,
    pub facilities: Vec<&'static str>,
}

const BUILDINGS: &[(&str, &str)] = &[
    ("Main Academic Building", "Houses lecture halls, classrooms, and administrative offices"),
    ("Central Library", "Modern library with digital resources and study spaces"),
    ("Science Laboratory", "State-of-the-art labs for research and practical learning"),
    ("Student Center", "Hub for student activities, dining, and recreation"),
    ("Sports Complex", "Comprehensive sports facilities and fitness center"),
];

const FACILITIES: &[&str] = &[
    "High-speed WiFi throughout campus",
    "24/7 Security and CCTV monitoring",
    "Modern dormitory accommodation",
    "Multiple dining options",
    "Medical center and counseling services",
    "Transportation services",
    "Parking facilities",
    "Green spaces and recreational areas",
];

pub fn campus_info() -> CampusInfo {
    CampusInfo {
        buildings: BUILDINGS
            .iter()
            .map(|&(name, description)| Building { name, description })
            .collect(),
        facilities: FACILITIES.to_vec(),
    }
}
