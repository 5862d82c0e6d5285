use super::constants::*;
use super::marker::Marker;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub max_radius: f32,
}

/// Expanding seismic rings seeded from marker magnitudes.
#[derive(Clone, Debug, Default)]
pub struct RippleField {
    pub ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn spawn(&mut self, x: f32, y: f32, magnitude: f64) {
        self.ripples.push(Ripple {
            x,
            y,
            radius: 0.0,
            opacity: 1.0,
            max_radius: magnitude as f32 * RIPPLE_RADIUS_PER_MAGNITUDE,
        });
    }

    /// Seeds a ripple from a random marker at a random viewport position.
    /// Returns false when there is nothing to seed from.
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        markers: &[Marker],
        width: f32,
        height: f32,
    ) -> bool {
        if markers.is_empty() {
            return false;
        }
        let m = &markers[rng.gen_range(0..markers.len())];
        let x = rng.gen::<f32>() * width.max(0.0);
        let y = rng.gen::<f32>() * height.max(0.0);
        self.spawn(x, y, m.magnitude);
        true
    }

    /// Advance by `dt_sec`; per-frame constants are scaled to `REFERENCE_FPS`.
    /// Rings are dropped once faded out or fully grown.
    pub fn step(&mut self, dt_sec: f32) {
        let frames = dt_sec.max(0.0) * REFERENCE_FPS;
        self.ripples.retain_mut(|r| {
            r.radius += RIPPLE_GROWTH_PER_FRAME * frames;
            r.opacity -= RIPPLE_FADE_PER_FRAME * frames;
            r.opacity > 0.0 && r.radius < r.max_radius
        });
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}
