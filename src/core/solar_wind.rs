use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub color: [u8; 3],
    pub life: f32,
    pub max_life: f32,
    pub trail: SmallVec<[TrailPoint; SOLAR_TRAIL_LEN]>,
}

impl Particle {
    pub fn is_expired(&self) -> bool {
        self.life >= self.max_life
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    fn from_index(i: u32) -> Self {
        match i % 4 {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }
}

/// Edge-spawned particles drifting toward the viewport centre.
pub struct SolarWind {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    rng: StdRng,
}

impl SolarWind {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(SOLAR_MAX_PARTICLES),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn spawn_on(&mut self, edge: Edge) -> Particle {
        let c = self.center();
        let speed = SOLAR_SPEED_MIN + self.rng.gen::<f32>() * SOLAR_SPEED_SPAN;
        let jitter = (self.rng.gen::<f32>() - 0.5) * SOLAR_JITTER;
        let (pos, vel) = match edge {
            Edge::Top => {
                let x = self.rng.gen::<f32>() * self.width;
                let p = Vec2::new(x, -SOLAR_SPAWN_MARGIN);
                (p, Vec2::new((c.x - x) * SOLAR_CENTER_DRIFT + jitter, speed))
            }
            Edge::Right => {
                let y = self.rng.gen::<f32>() * self.height;
                let p = Vec2::new(self.width + SOLAR_SPAWN_MARGIN, y);
                (p, Vec2::new(-speed, (c.y - y) * SOLAR_CENTER_DRIFT + jitter))
            }
            Edge::Bottom => {
                let x = self.rng.gen::<f32>() * self.width;
                let p = Vec2::new(x, self.height + SOLAR_SPAWN_MARGIN);
                (p, Vec2::new((c.x - x) * SOLAR_CENTER_DRIFT + jitter, -speed))
            }
            Edge::Left => {
                let y = self.rng.gen::<f32>() * self.height;
                let p = Vec2::new(-SOLAR_SPAWN_MARGIN, y);
                (p, Vec2::new(speed, (c.y - y) * SOLAR_CENTER_DRIFT + jitter))
            }
        };
        Particle {
            pos,
            vel,
            size: self.rng.gen::<f32>() * SOLAR_SIZE_SPAN + SOLAR_SIZE_MIN,
            opacity: self.rng.gen::<f32>() * 0.8 + 0.2,
            color: SOLAR_PALETTE[self.rng.gen_range(0..SOLAR_PALETTE.len())],
            life: 0.0,
            max_life: SOLAR_LIFE_MIN + self.rng.gen::<f32>() * SOLAR_LIFE_SPAN,
            trail: SmallVec::new(),
        }
    }

    fn spawn_random(&mut self) -> Particle {
        let edge = Edge::from_index(self.rng.gen_range(0..4));
        self.spawn_on(edge)
    }

    /// Tops the field up to capacity, then advances every particle by
    /// `dt_sec` (per-frame constants scaled to `REFERENCE_FPS`).
    pub fn step(&mut self, dt_sec: f32) {
        while self.particles.len() < SOLAR_MAX_PARTICLES {
            let p = self.spawn_random();
            self.particles.push(p);
        }

        let frames = dt_sec.max(0.0) * REFERENCE_FPS;
        let center = self.center();
        let (w, h) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            p.pos += p.vel * frames;

            let to_center = center - p.pos;
            let dist = to_center.length();
            if dist > SOLAR_PULL_MIN_DIST {
                p.vel += to_center / dist * SOLAR_PULL_FORCE * frames;
            }

            if p.trail.len() == SOLAR_TRAIL_LEN {
                p.trail.remove(0);
            }
            p.trail.push(TrailPoint {
                pos: p.pos,
                opacity: p.opacity,
            });

            p.life += frames;
            p.opacity = (1.0 - p.life / p.max_life).max(0.0);

            let off_screen = p.pos.x < -SOLAR_CULL_MARGIN
                || p.pos.x > w + SOLAR_CULL_MARGIN
                || p.pos.y < -SOLAR_CULL_MARGIN
                || p.pos.y > h + SOLAR_CULL_MARGIN;
            !p.is_expired() && !off_screen
        });
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
