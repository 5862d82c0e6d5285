// Browser-side interaction tuning and DOM element ids.
// Data and animation constants live in `core/constants.rs`.

// Canvases
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";
pub const WAVE_CANVAS_ID: &str = "wave-canvas";
pub const WIND_CANVAS_ID: &str = "wind-canvas";

// Controls
pub const MIN_MAGNITUDE_INPUT_ID: &str = "min-magnitude";
pub const MIN_MAGNITUDE_LABEL_ID: &str = "min-magnitude-value";
pub const GLOBE_SIZE_INPUT_ID: &str = "globe-size";
pub const GLOBE_SIZE_LABEL_ID: &str = "globe-size-value";
pub const PLATES_TOGGLE_ID: &str = "plates-toggle";
pub const REFRESH_BUTTON_ID: &str = "refresh-button";
pub const PLAY_TOGGLE_ID: &str = "play-toggle";
pub const CONTROL_PANEL_ID: &str = "control-panel";

// Read-outs
pub const EVENT_BADGE_ID: &str = "event-count";
pub const STAT_TOTAL_ID: &str = "stat-total";
pub const STAT_LARGEST_ID: &str = "stat-largest";
pub const STAT_SHALLOW_ID: &str = "stat-shallow";
pub const STAT_DEEP_ID: &str = "stat-deep";
pub const LOADING_ID: &str = "loading";
pub const TOOLTIP_ID: &str = "marker-tooltip";
pub const DETAILS_ID: &str = "details-panel";
pub const DETAILS_CLOSE_ID: &str = "details-close";
pub const AURORA_PRIMARY_ID: &str = "aurora-primary";
pub const AURORA_SECONDARY_ID: &str = "aurora-secondary";
pub const AURORA_TERTIARY_ID: &str = "aurora-tertiary";

// Pointer
pub const CLICK_SLOP_PX: f32 = 4.0; // press/release travel below this is a click
pub const PICK_TOLERANCE_DEG: f32 = 0.75; // extra angular slack around small markers
pub const TOOLTIP_OFFSET_PX: f64 = 14.0;

// Frame
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches
