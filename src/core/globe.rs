use super::constants::PITCH_LIMIT_DEG;
use super::marker::Marker;
use glam::{Mat4, Quat, Vec2, Vec3};

// Globe-space convention: north pole on +Y, (lat 0, lng 0) on +Z facing the
// viewer before any rotation. View space is orthographic with +Y up.

#[inline]
pub fn lat_lng_to_unit(lat_deg: f64, lng_deg: f64) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lng = lng_deg.to_radians();
    Vec3::new(
        (lat.cos() * lng.sin()) as f32,
        lat.sin() as f32,
        (lat.cos() * lng.cos()) as f32,
    )
}

#[inline]
pub fn unit_to_lat_lng(p: Vec3) -> (f64, f64) {
    let p = p.normalize_or_zero();
    let lat = (p.y as f64).clamp(-1.0, 1.0).asin().to_degrees();
    let lng = (p.x as f64).atan2(p.z as f64).to_degrees();
    (lat, lng)
}

/// Angle between two unit vectors, degrees.
#[inline]
pub fn angular_distance_deg(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug)]
pub struct GlobeView {
    pub yaw: f32,
    pub pitch: f32,
    pub radius_px: f32,
    pub center_px: Vec2,
}

impl Default for GlobeView {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius_px: 225.0,
            center_px: Vec2::ZERO,
        }
    }
}

impl GlobeView {
    /// Globe-space to view-space rotation.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation())
    }

    pub fn center_on(&mut self, lat_deg: f64, lng_deg: f64) {
        self.yaw = -(lng_deg as f32).to_radians();
        self.set_pitch((lat_deg as f32).to_radians());
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        let limit = PITCH_LIMIT_DEG.to_radians();
        self.pitch = pitch.clamp(-limit, limit);
    }

    /// Rotate by a pointer drag of `delta_px` screen pixels.
    pub fn drag_by(&mut self, delta_px: Vec2) {
        let per_px = 1.0 / self.radius_px.max(1.0);
        self.yaw += delta_px.x * per_px;
        self.set_pitch(self.pitch + delta_px.y * per_px);
    }

    /// Screen pixel for a point, or `None` when it faces away from the viewer.
    pub fn project(&self, lat_deg: f64, lng_deg: f64) -> Option<Vec2> {
        let v = self.orientation() * lat_lng_to_unit(lat_deg, lng_deg);
        if v.z <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            self.center_px.x + v.x * self.radius_px,
            self.center_px.y - v.y * self.radius_px,
        ))
    }

    /// Lat/lng under a screen pixel, or `None` when the pixel misses the globe.
    pub fn unproject(&self, px: Vec2) -> Option<(f64, f64)> {
        let r = self.radius_px.max(1.0);
        let x = (px.x - self.center_px.x) / r;
        let y = (self.center_px.y - px.y) / r;
        let origin = Vec3::new(x, y, 2.0);
        let t = ray_sphere(origin, Vec3::NEG_Z, Vec3::ZERO, 1.0)?;
        let hit_view = origin + Vec3::NEG_Z * t;
        let hit_globe = self.orientation().inverse() * hit_view;
        Some(unit_to_lat_lng(hit_globe))
    }

    /// Index of the closest marker whose disc (plus `tolerance_deg`) covers
    /// the pixel.
    pub fn pick(&self, px: Vec2, markers: &[Marker], tolerance_deg: f32) -> Option<usize> {
        let (lat, lng) = self.unproject(px)?;
        nearest_marker(markers, lat, lng, tolerance_deg)
    }
}

pub fn nearest_marker(
    markers: &[Marker],
    lat_deg: f64,
    lng_deg: f64,
    tolerance_deg: f32,
) -> Option<usize> {
    let p = lat_lng_to_unit(lat_deg, lng_deg);
    let mut best = None::<(usize, f32)>;
    for (i, m) in markers.iter().enumerate() {
        let d = angular_distance_deg(p, lat_lng_to_unit(m.lat, m.lng));
        if d > m.size as f32 + tolerance_deg {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
