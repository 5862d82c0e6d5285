use super::constants::*;
use super::globe::{lat_lng_to_unit, GlobeView};
use super::marker::Marker;
use super::plates::PathSegment;

// Mirrors `struct Globe` and `struct MarkerGpu` in shaders/globe.wgsl.
// Every field group is padded to 16 bytes for uniform layout rules.

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeUniforms {
    pub rotation: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub radius_px: f32,
    pub marker_count: u32,
    pub segment_count: u32,
    pub show_plates: f32,
    pub dash_phase: f32,
    pub atmosphere: [f32; 4],
    pub plate_color: [f32; 4],
    pub dash: [f32; 4], // dash deg, gap deg, atmosphere altitude, unused
    // start.xyz + offset, end.xyz + length per segment
    pub segments: [[f32; 4]; 64],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerGpu {
    /// Unit position and cosine of the angular radius.
    pub pos_cos: [f32; 4],
    /// RGB and selection flag.
    pub color: [f32; 4],
}

impl GlobeUniforms {
    pub fn new(
        view: &GlobeView,
        resolution: [f32; 2],
        time_sec: f32,
        marker_count: usize,
        segments: &[PathSegment],
        show_plates: bool,
    ) -> Self {
        let mut packed = [[0.0f32; 4]; 64];
        let n = segments.len().min(MAX_PLATE_SEGMENTS);
        for (i, s) in segments.iter().take(n).enumerate() {
            packed[2 * i] = [s.start.x, s.start.y, s.start.z, s.offset_deg];
            packed[2 * i + 1] = [s.end.x, s.end.y, s.end.z, s.length_deg];
        }
        let period_sec = PLATE_DASH_PERIOD_MS / 1000.0;
        Self {
            rotation: view.rotation_matrix().to_cols_array_2d(),
            resolution,
            time: time_sec,
            radius_px: view.radius_px,
            marker_count: marker_count.min(MAX_MARKERS) as u32,
            segment_count: n as u32,
            show_plates: if show_plates { 1.0 } else { 0.0 },
            dash_phase: (time_sec / period_sec).fract(),
            atmosphere: ATMOSPHERE_RGBA,
            plate_color: PLATE_RGBA,
            dash: [PLATE_DASH_DEG, PLATE_GAP_DEG, ATMOSPHERE_ALTITUDE, 0.0],
            segments: packed,
        }
    }
}

pub fn pack_markers(markers: &[Marker], selected: Option<usize>) -> Vec<MarkerGpu> {
    markers
        .iter()
        .take(MAX_MARKERS)
        .enumerate()
        .map(|(i, m)| {
            let p = lat_lng_to_unit(m.lat, m.lng);
            let [r, g, b] = m.bucket.rgb();
            MarkerGpu {
                pos_cos: [p.x, p.y, p.z, (m.size as f32).to_radians().cos()],
                color: [r, g, b, if selected == Some(i) { 1.0 } else { 0.0 }],
            }
        })
        .collect()
}
