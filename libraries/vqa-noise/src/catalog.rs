//! Static registry of noise environments
//!
//! The table is a plain `static` slice: built at compile time, never mutated,
//! and safe to read from any number of threads.

use crate::profile::{
    Difficulty, FrequencyRange, GenerationParameters, NoiseCategory, NoiseProfile, SpectralShape,
    TemporalVariation,
};

use Difficulty::{Easy, Extreme, Hard, Medium, VeryHard};
use NoiseCategory::{Environmental, Industrial, Vehicle};
use SpectralShape::{Brown, Pink, SpeechShaped, White};
use TemporalVariation::{Impulsive, Modulated, SlowVariation, Stationary};

#[allow(clippy::too_many_arguments)]
const fn profile(
    key: &'static str,
    category: NoiseCategory,
    name: &'static str,
    description: &'static str,
    band: (f64, f64),
    dominant_frequency_hz: f64,
    typical_snr_db: f64,
    difficulty: Difficulty,
    spectral_shape: SpectralShape,
    temporal_variation: TemporalVariation,
) -> NoiseProfile {
    NoiseProfile {
        key,
        category,
        name,
        description,
        frequency_range: FrequencyRange::new(band.0, band.1),
        dominant_frequency_hz,
        typical_snr_db,
        difficulty,
        spectral_shape,
        temporal_variation,
    }
}

static PROFILES: [NoiseProfile; 19] = [
    // Vehicle
    profile(
        "car_cabin_highway",
        Vehicle,
        "Car Cabin (Highway)",
        "Closed-window passenger car at 110 km/h: tyre roar and engine drone",
        (50.0, 2000.0),
        120.0,
        10.0,
        Medium,
        Pink,
        SlowVariation,
    ),
    profile(
        "car_cabin_city",
        Vehicle,
        "Car Cabin (City)",
        "Passenger car in stop-and-go traffic with idling engine",
        (30.0, 1500.0),
        80.0,
        15.0,
        Easy,
        Pink,
        Stationary,
    ),
    profile(
        "car_window_open_highway",
        Vehicle,
        "Car, Window Open (Highway)",
        "Open window at highway speed: broadband wind buffeting",
        (50.0, 6000.0),
        200.0,
        0.0,
        VeryHard,
        Brown,
        SlowVariation,
    ),
    profile(
        "truck_cabin_idle",
        Vehicle,
        "Truck Cabin (Idle)",
        "Diesel truck idling with low-frequency engine rumble",
        (20.0, 800.0),
        60.0,
        15.0,
        Easy,
        Pink,
        Stationary,
    ),
    profile(
        "bus_interior",
        Vehicle,
        "Bus Interior",
        "City bus interior with engine, HVAC and door mechanics",
        (40.0, 3000.0),
        150.0,
        5.0,
        Hard,
        Pink,
        Stationary,
    ),
    profile(
        "train_interior",
        Vehicle,
        "Train Interior",
        "Commuter train carriage with rail rumble and ventilation",
        (30.0, 2500.0),
        100.0,
        8.0,
        Medium,
        Pink,
        Stationary,
    ),
    profile(
        "airplane_cabin",
        Vehicle,
        "Airplane Cabin",
        "Commercial jet cabin at cruise: engine and airflow noise",
        (50.0, 4000.0),
        200.0,
        5.0,
        Hard,
        Pink,
        Stationary,
    ),
    profile(
        "road_traffic_roadside",
        Vehicle,
        "Roadside Traffic",
        "Standing beside a busy arterial road with passing vehicles",
        (20.0, 4000.0),
        100.0,
        3.0,
        Hard,
        Brown,
        SlowVariation,
    ),
    // Environmental
    profile(
        "hvac_office",
        Environmental,
        "Office HVAC",
        "Open-plan office with steady air handling hum",
        (50.0, 1000.0),
        120.0,
        20.0,
        Easy,
        Pink,
        Stationary,
    ),
    profile(
        "hvac_server_room",
        Environmental,
        "Server Room HVAC",
        "Data centre aisle with server fans and CRAC units",
        (100.0, 4000.0),
        500.0,
        5.0,
        Hard,
        Pink,
        Stationary,
    ),
    profile(
        "crowd_restaurant",
        Environmental,
        "Restaurant Crowd",
        "Busy restaurant with overlapping conversations and cutlery",
        (100.0, 4000.0),
        500.0,
        5.0,
        Hard,
        SpeechShaped,
        Modulated,
    ),
    profile(
        "crowd_stadium",
        Environmental,
        "Stadium Crowd",
        "Cheering stadium crowd with announcer bleed",
        (100.0, 6000.0),
        800.0,
        -5.0,
        Extreme,
        SpeechShaped,
        Modulated,
    ),
    profile(
        "babble_cafeteria",
        Environmental,
        "Cafeteria Babble",
        "Multi-talker babble in a reverberant cafeteria",
        (200.0, 4000.0),
        1000.0,
        0.0,
        VeryHard,
        SpeechShaped,
        Stationary,
    ),
    profile(
        "street_urban",
        Environmental,
        "Urban Street",
        "Pedestrian street with distant traffic and footsteps",
        (50.0, 5000.0),
        300.0,
        5.0,
        Hard,
        Pink,
        Stationary,
    ),
    profile(
        "rain_heavy",
        Environmental,
        "Heavy Rain",
        "Heavy rainfall on hard surfaces",
        (500.0, 8000.0),
        2000.0,
        10.0,
        Medium,
        Pink,
        Stationary,
    ),
    profile(
        "wind_outdoor",
        Environmental,
        "Outdoor Wind",
        "Wind across an unshielded microphone",
        (20.0, 500.0),
        80.0,
        5.0,
        Hard,
        Pink,
        Stationary,
    ),
    // Industrial
    profile(
        "factory_floor",
        Industrial,
        "Factory Floor",
        "Assembly line with conveyors, pneumatics and alarms",
        (100.0, 8000.0),
        1000.0,
        0.0,
        VeryHard,
        White,
        Stationary,
    ),
    profile(
        "industrial_machinery",
        Industrial,
        "Heavy Machinery",
        "Presses and compressors in a heavy industrial hall",
        (50.0, 6000.0),
        400.0,
        -3.0,
        Extreme,
        White,
        Stationary,
    ),
    profile(
        "construction",
        Industrial,
        "Construction Site",
        "Jackhammers, grinders and reversing beepers",
        (20.0, 8000.0),
        500.0,
        -5.0,
        Extreme,
        Pink,
        Impulsive,
    ),
];

/// Returned by [`get`] for keys that are not in the registry
pub static UNKNOWN_PROFILE: NoiseProfile = NoiseProfile {
    key: "unknown",
    category: NoiseCategory::Unknown,
    name: "Unknown",
    description: "Unknown noise profile",
    frequency_range: FrequencyRange::new(0.0, 0.0),
    dominant_frequency_hz: 0.0,
    typical_snr_db: 0.0,
    difficulty: Difficulty::Unknown,
    spectral_shape: SpectralShape::Pink,
    temporal_variation: TemporalVariation::Stationary,
};

/// Every profile in registry order
pub fn all() -> &'static [NoiseProfile] {
    &PROFILES
}

/// Look up a profile by key
pub fn try_get(key: &str) -> Option<&'static NoiseProfile> {
    PROFILES.iter().find(|p| p.key == key)
}

/// Look up a profile, returning the sentinel on a miss
///
/// Callers must check [`NoiseProfile::is_unknown`].
pub fn get(key: &str) -> &'static NoiseProfile {
    try_get(key).unwrap_or(&UNKNOWN_PROFILE)
}

/// Keys of all profiles, optionally restricted to one category
pub fn list(category: Option<NoiseCategory>) -> Vec<&'static str> {
    PROFILES
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .map(|p| p.key)
        .collect()
}

/// Distinct categories in registry order
pub fn categories() -> Vec<NoiseCategory> {
    let mut seen = Vec::new();
    for p in &PROFILES {
        if !seen.contains(&p.category) {
            seen.push(p.category);
        }
    }
    seen
}

/// Generation parameters for `key`
///
/// Misses fall back to the sentinel's numbers with shape and variation taken
/// from the key's naming rule.
pub fn parameters(key: &str) -> GenerationParameters {
    match try_get(key) {
        Some(profile) => profile.generation_parameters(),
        None => GenerationParameters {
            spectral_shape: SpectralShape::from_key(key),
            temporal_variation: TemporalVariation::from_key(key),
            ..UNKNOWN_PROFILE.generation_parameters()
        },
    }
}
