use super::constants::MAX_PLATE_SEGMENTS;
use super::globe::{angular_distance_deg, lat_lng_to_unit};
use glam::Vec3;

pub struct PlateBoundary {
    pub name: &'static str,
    /// `[lng, lat]` pairs.
    pub coordinates: &'static [[f64; 2]],
}

// Simplified boundary of the major plates
pub const TECTONIC_PLATES: &[PlateBoundary] = &[PlateBoundary {
    name: "Pacific Ring of Fire",
    coordinates: &[
        [-180.0, 60.0],
        [-150.0, 65.0],
        [-130.0, 55.0],
        [-120.0, 50.0],
        [-110.0, 25.0],
        [-105.0, 15.0],
        [-90.0, 10.0],
        [-80.0, -10.0],
        [-70.0, -20.0],
        [-60.0, -40.0],
        [-50.0, -55.0],
        [150.0, -50.0],
        [160.0, -40.0],
        [170.0, -20.0],
        [180.0, 10.0],
        [170.0, 30.0],
        [150.0, 45.0],
        [130.0, 50.0],
        [120.0, 60.0],
        [-180.0, 60.0],
    ],
}];

/// One great-circle arc of a boundary path.
#[derive(Clone, Copy, Debug)]
pub struct PathSegment {
    pub start: Vec3,
    pub end: Vec3,
    /// Path distance before this segment, degrees.
    pub offset_deg: f32,
    pub length_deg: f32,
}

/// Splits every boundary into arcs, skipping zero-length and antipodal
/// pairs (their great circle is undefined). Path distance restarts per
/// boundary. At most `MAX_PLATE_SEGMENTS` segments are returned.
pub fn path_segments(plates: &[PlateBoundary]) -> Vec<PathSegment> {
    let mut out = Vec::new();
    for plate in plates {
        let mut offset = 0.0f32;
        for pair in plate.coordinates.windows(2) {
            let a = lat_lng_to_unit(pair[0][1], pair[0][0]);
            let b = lat_lng_to_unit(pair[1][1], pair[1][0]);
            if a.cross(b).length_squared() < 1e-10 {
                continue;
            }
            let length_deg = angular_distance_deg(a, b);
            out.push(PathSegment {
                start: a,
                end: b,
                offset_deg: offset,
                length_deg,
            });
            offset += length_deg;
            if out.len() == MAX_PLATE_SEGMENTS {
                log::warn!("[plates] segment cap {} reached", MAX_PLATE_SEGMENTS);
                return out;
            }
        }
    }
    out
}
