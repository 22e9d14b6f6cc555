//! Simulation constants and tuning parameters.

// --- Geoscape ---

/// Seconds in one simulated hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Maximum number of hostile contacts that can exist on the geoscape at once.
/// Also the capacity of every radar's sensored set.
pub const MAX_UFO_ON_GEOSCAPE: usize = 8;

/// Tolerance used when comparing positions (degrees) and unit vectors.
pub const GEO_EPSILON: f64 = 1e-6;

// --- Radar ranges (great-circle degrees) ---

/// Detection range of a level-1 base radar.
pub const RADAR_BASE_RANGE: f64 = 24.0;

/// Tracking range of a level-1 base radar.
pub const RADAR_BASE_TRACKING_RANGE: f64 = 34.0;

/// Detection range of an aircraft-mounted radar.
pub const RADAR_AIRCRAFT_RANGE: f64 = 10.0;

/// Tracking range of an aircraft-mounted radar.
pub const RADAR_AIRCRAFT_TRACKING_RANGE: f64 = 14.0;

/// Installations always run their radar at this level.
pub const RADAR_INSTALLATION_LEVEL: u32 = 1;

/// Relative range gained per radar level above 1.
pub const RADAR_UPGRADE_FACTOR: f64 = 0.4;

// --- Detection ---

/// Simulated seconds between two detection passes (30 minutes).
pub const DETECTION_INTERVAL_SECS: f64 = SECONDS_PER_HOUR / 2.0;

/// First-contact probability per simulated second spent inside detection range.
/// The per-pass probability is `DETECTION_RATE_PER_SEC * interval`, so changing
/// the interval keeps the expected time to first contact unchanged.
pub const DETECTION_RATE_PER_SEC: f64 = 0.000125;

// --- Routes ---

/// Number of great-circle segments per half circle when building a route.
pub const LINE_MAXSEG: usize = 20;

/// Upper bound on waypoints in a single route.
pub const LINE_MAXPTS: usize = LINE_MAXSEG + 2;

// --- Coverage raster ---

/// Default coverage raster width (cells along longitude).
pub const COVERAGE_WIDTH: u32 = 360;

/// Default coverage raster height (cells along latitude).
pub const COVERAGE_HEIGHT: u32 = 180;
