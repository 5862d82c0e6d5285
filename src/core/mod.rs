pub mod config;
pub mod constants;
pub mod feed;
pub mod globe;
pub mod gpu_layout;
pub mod keys;
pub mod marker;
pub mod plates;
pub mod polling;
pub mod solar_wind;
pub mod stats;
pub mod waves;

pub use config::*;
pub use constants::*;
pub use feed::*;
pub use globe::*;
pub use gpu_layout::*;
pub use keys::*;
pub use marker::*;
pub use plates::*;
pub use polling::*;
pub use solar_wind::*;
pub use stats::*;
pub use waves::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../../shaders/globe.wgsl");
