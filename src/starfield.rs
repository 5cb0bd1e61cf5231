/// Starfield & shooting-star simulation — pure functions over the entity
/// types.  All randomness comes through an injected `Rng` handle so callers
/// control determinism (tests use a seeded RNG).

use rand::Rng;

use crate::entities::{PointCloud, ShootingStar, Vec3, Viewport};

// ── Tunables ─────────────────────────────────────────────────────────────────

/// Default number of points in the cloud.
pub const STAR_COUNT: usize = 5000;

/// Default cloud radius, world units.
pub const STAR_RADIUS: f32 = 1.5;

/// Fixed roll of the whole star group, applied at projection time.
pub const GROUP_ROLL: f32 = std::f32::consts::FRAC_PI_4;

/// Chance for an idle shooting star to spawn, rolled once per tick.
/// Deliberately a per-tick constant, so the effective spawn cadence tracks
/// the display refresh rate.
pub const SPAWN_CHANCE: f64 = 0.01;

/// Constant world-space speed of an active shooting star along (-1, -1).
pub const STAR_SPEED: f32 = 20.0;

/// Spawn depth range: z is drawn from [-(MIN+SPREAD), -MIN].
pub const SPAWN_DEPTH_MIN: f32 = 10.0;
pub const SPAWN_DEPTH_SPREAD: f32 = 20.0;

/// Extra world units past the depth-scaled viewport edge before despawn.
pub const DESPAWN_MARGIN: f32 = 10.0;

/// Colors a shooting star can be assigned on spawn.
pub const STAR_PALETTE: [(u8, u8, u8); 4] = [
    (0xcc, 0xff, 0xff),
    (0xff, 0xcc, 0xff),
    (0xff, 0xff, 0xff),
    (0xcc, 0xcc, 0xff),
];

// ── Point cloud ──────────────────────────────────────────────────────────────

/// Sample `count` points uniformly by *volume* inside a sphere of `radius`.
///
/// The radial coordinate is `radius * cbrt(u)` — taking the cube root of the
/// uniform variate is what keeps density constant per unit volume instead of
/// clustering points at the center.
pub fn init_point_cloud(count: usize, radius: f32, rng: &mut impl Rng) -> PointCloud {
    let mut positions = Vec::with_capacity(count);
    for _ in 0..count {
        let r = radius * rng.gen::<f32>().cbrt();
        let theta = rng.gen::<f32>() * std::f32::consts::TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

        positions.push(Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ));
    }
    PointCloud {
        positions,
        radius,
        rot_x: 0.0,
        rot_y: 0.0,
    }
}

/// Advance the cloud's orientation.  Two independent axis rates; the points
/// themselves are never touched.
pub fn tick_field(cloud: &mut PointCloud, dt: f32) {
    cloud.rot_x -= dt / 10.0;
    cloud.rot_y -= dt / 15.0;
}

/// Apply the cloud's current orientation (plus the fixed group roll) to a
/// single point.
pub fn orient(cloud: &PointCloud, p: Vec3) -> Vec3 {
    rotate_z(rotate_y(rotate_x(p, cloud.rot_x), cloud.rot_y), GROUP_ROLL)
}

pub fn rotate_x(p: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

pub fn rotate_y(p: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(p.x * c + p.z * s, p.y, -p.x * s + p.z * c)
}

pub fn rotate_z(p: Vec3, a: f32) -> Vec3 {
    let (s, c) = a.sin_cos();
    Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z)
}

// ── Shooting stars ───────────────────────────────────────────────────────────

/// How far off-screen a star at depth `z` must spawn so perspective
/// foreshortening doesn't place it inside the visible frustum.
pub fn spawn_depth_factor(z: f32) -> f32 {
    z.abs() / 2.0
}

/// Visual scale of a star at depth `z` — strictly increasing in |z| so deep
/// stars stay visible while still reading as distant.
pub fn depth_visual_scale(z: f32) -> f32 {
    1.0 + z.abs() / 10.0
}

/// Activate an idle slot with freshly randomized spawn parameters.
pub fn spawn_shooting_star(star: &mut ShootingStar, viewport: Viewport, rng: &mut impl Rng) {
    let z = -(rng.gen::<f32>() * SPAWN_DEPTH_SPREAD) - SPAWN_DEPTH_MIN;
    let depth = spawn_depth_factor(z);

    // Start beyond the top-right edge, pushed out proportionally to depth.
    let x = (viewport.width / 2.0) * (1.0 + rng.gen::<f32>() * 0.5) * depth;
    let y = (viewport.height / 2.0) * (1.0 + rng.gen::<f32>() * 0.5) * depth;

    star.pos = Vec3::new(x, y, z);
    star.scale = depth_visual_scale(z);
    star.color = STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())];
    star.active = true;
}

/// Advance an active star by `dt` seconds and deactivate it once it crosses
/// the depth-scaled bound past the bottom-left of the viewport.
pub fn advance_shooting_star(star: &mut ShootingStar, dt: f32, viewport: Viewport) {
    star.pos.x -= STAR_SPEED * dt;
    star.pos.y -= STAR_SPEED * dt;

    let bound = spawn_depth_factor(star.pos.z) + 1.0;
    if star.pos.y < -viewport.height / 2.0 * bound - DESPAWN_MARGIN
        || star.pos.x < -viewport.width / 2.0 * bound - DESPAWN_MARGIN
    {
        star.active = false;
    }
}

/// One tick of the slot's lifecycle.  The spawn roll happens exactly once
/// per tick for an idle slot; active slots only move.
pub fn tick_shooting_star(
    star: &mut ShootingStar,
    dt: f32,
    viewport: Viewport,
    rng: &mut impl Rng,
) {
    if !star.active {
        if rng.gen_bool(SPAWN_CHANCE) {
            spawn_shooting_star(star, viewport, rng);
        }
        return;
    }
    advance_shooting_star(star, dt, viewport);
}
