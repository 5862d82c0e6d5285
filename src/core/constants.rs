// Shared data and animation tuning constants used by the web frontend.

// Feed
pub const USGS_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
pub const REFRESH_INTERVAL_MS: i32 = 300_000; // 5 minutes

// Magnitude threshold slider
pub const DEFAULT_MIN_MAGNITUDE: f64 = 2.5;
pub const MIN_MAGNITUDE_FLOOR: f64 = 1.0;
pub const MIN_MAGNITUDE_CEIL: f64 = 7.0;
pub const MIN_MAGNITUDE_SLIDER_STEP: f64 = 0.1;

// Globe size slider (CSS px)
pub const DEFAULT_GLOBE_SIZE: f32 = 300.0;
pub const GLOBE_SIZE_MIN: f32 = 200.0;
pub const GLOBE_SIZE_MAX: f32 = 400.0;

// Depth buckets (km)
pub const SHALLOW_DEPTH_LIMIT_KM: f64 = 70.0;
pub const DEEP_DEPTH_LIMIT_KM: f64 = 300.0;

// Depth palette
pub const SHALLOW_HEX: &str = "#ef4444"; // red
pub const MID_HEX: &str = "#f59e0b"; // amber
pub const DEEP_HEX: &str = "#3b82f6"; // blue

// Marker size (angular radius in degrees)
pub const SIZE_PER_MAGNITUDE: f64 = 0.3;
pub const MARKER_SIZE_MIN: f64 = 0.1;
pub const MARKER_SIZE_MAX: f64 = 2.0;

// Aurora response to strong quakes
pub const AURORA_STRONG_MAGNITUDE: f64 = 5.0;
pub const AURORA_SATURATION_COUNT: f64 = 10.0;

// All per-frame animation constants are tuned against this rate
pub const REFERENCE_FPS: f32 = 60.0;

// Seismic ripple rings
pub const RIPPLE_SPAWN_INTERVAL_MS: i32 = 2_000;
pub const RIPPLE_RADIUS_PER_MAGNITUDE: f32 = 50.0;
pub const RIPPLE_GROWTH_PER_FRAME: f32 = 2.0;
pub const RIPPLE_FADE_PER_FRAME: f32 = 0.01;
pub const RIPPLE_RGB: [u8; 3] = [239, 68, 68];
pub const RIPPLE_LINE_WIDTH: f64 = 2.0;

// Solar wind
pub const SOLAR_MAX_PARTICLES: usize = 150;
pub const SOLAR_TRAIL_LEN: usize = 8;
pub const SOLAR_SPAWN_MARGIN: f32 = 10.0; // spawn just outside the edge
pub const SOLAR_CULL_MARGIN: f32 = 50.0;
pub const SOLAR_SPEED_MIN: f32 = 0.5;
pub const SOLAR_SPEED_SPAN: f32 = 1.5;
pub const SOLAR_CENTER_DRIFT: f32 = 0.001;
pub const SOLAR_JITTER: f32 = 0.5;
pub const SOLAR_PULL_FORCE: f32 = 0.0001;
pub const SOLAR_PULL_MIN_DIST: f32 = 100.0;
pub const SOLAR_SIZE_MIN: f32 = 1.0;
pub const SOLAR_SIZE_SPAN: f32 = 2.0;
pub const SOLAR_LIFE_MIN: f32 = 200.0;
pub const SOLAR_LIFE_SPAN: f32 = 300.0;
pub const SOLAR_PALETTE: [[u8; 3]; 5] = [
    [59, 130, 246],  // blue
    [16, 185, 129],  // emerald
    [139, 92, 246],  // purple
    [236, 72, 153],  // pink
    [245, 158, 11],  // amber
];

// Globe presentation
pub const GLOBE_RADIUS_PER_SIZE: f32 = 0.75; // globe radius as a fraction of the size slider
pub const PITCH_LIMIT_DEG: f32 = 85.0;
pub const ATMOSPHERE_RGBA: [f32; 4] = [59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.3];
pub const ATMOSPHERE_ALTITUDE: f32 = 0.1;

// Plate boundary dashes
pub const PLATE_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
pub const PLATE_DASH_DEG: f32 = 6.0;
pub const PLATE_GAP_DEG: f32 = 3.0; // dash:gap stays 2:1
pub const PLATE_DASH_PERIOD_MS: f32 = 4_000.0;
pub const MAX_PLATE_SEGMENTS: usize = 32;

// GPU marker buffer capacity
pub const MAX_MARKERS: usize = 4096;
