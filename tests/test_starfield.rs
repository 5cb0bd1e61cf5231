use starfall::entities::{ShootingStar, Vec3, Viewport};
use starfall::starfield::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn viewport() -> Viewport {
    Viewport { width: 3.0, height: 1.5 }
}

fn magnitude(p: Vec3) -> f32 {
    (p.x * p.x + p.y * p.y + p.z * p.z).sqrt()
}

// ── init_point_cloud ──────────────────────────────────────────────────────────

#[test]
fn point_cloud_has_requested_count() {
    let cloud = init_point_cloud(5000, 1.5, &mut seeded_rng());
    assert_eq!(cloud.positions.len(), 5000);
    assert_eq!(cloud.radius, 1.5);
}

#[test]
fn all_points_lie_within_the_sphere() {
    let cloud = init_point_cloud(5000, 1.5, &mut seeded_rng());
    for &p in &cloud.positions {
        assert!(magnitude(p) <= 1.5 + 1e-4);
    }
}

#[test]
fn radial_density_is_uniform_by_volume() {
    // The inner half-radius sphere holds 1/8 of the volume, so with
    // cube-root radial sampling about 12.5% of the points land there.
    // Uniform-radius sampling would put ~50% there instead.
    let cloud = init_point_cloud(5000, 1.5, &mut seeded_rng());
    let inner = cloud
        .positions
        .iter()
        .filter(|&&p| magnitude(p) < 0.75)
        .count();
    let frac = inner as f64 / 5000.0;
    assert!(frac > 0.09, "inner-shell fraction {frac} too low");
    assert!(frac < 0.17, "inner-shell fraction {frac} too high");
}

#[test]
fn cloud_starts_unrotated() {
    let cloud = init_point_cloud(10, 1.5, &mut seeded_rng());
    assert_eq!(cloud.rot_x, 0.0);
    assert_eq!(cloud.rot_y, 0.0);
}

// ── tick_field ────────────────────────────────────────────────────────────────

#[test]
fn tick_field_advances_both_axis_rates() {
    let mut cloud = init_point_cloud(10, 1.5, &mut seeded_rng());
    tick_field(&mut cloud, 0.3);
    assert!((cloud.rot_x + 0.3 / 10.0).abs() < 1e-6);
    assert!((cloud.rot_y + 0.3 / 15.0).abs() < 1e-6);
}

#[test]
fn tick_field_never_mutates_points() {
    let mut cloud = init_point_cloud(100, 1.5, &mut seeded_rng());
    let before = cloud.positions.clone();
    for _ in 0..50 {
        tick_field(&mut cloud, 0.033);
    }
    assert_eq!(cloud.positions, before);
}

#[test]
fn orientation_preserves_distance_from_origin() {
    let mut cloud = init_point_cloud(50, 1.5, &mut seeded_rng());
    tick_field(&mut cloud, 1.7);
    for &p in &cloud.positions {
        let rotated = orient(&cloud, p);
        assert!((magnitude(rotated) - magnitude(p)).abs() < 1e-4);
    }
}

// ── depth scaling ─────────────────────────────────────────────────────────────

#[test]
fn visual_scale_strictly_increases_with_depth() {
    let mut prev = depth_visual_scale(-10.0);
    for z in [-12.0, -15.0, -20.0, -25.0, -30.0] {
        let scale = depth_visual_scale(z);
        assert!(scale > prev, "scale not increasing at z={z}");
        prev = scale;
    }
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_randomizes_depth_within_bounds() {
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let mut star = ShootingStar::idle();
        spawn_shooting_star(&mut star, viewport(), &mut rng);
        assert!(star.active);
        assert!(star.pos.z <= -SPAWN_DEPTH_MIN);
        assert!(star.pos.z >= -(SPAWN_DEPTH_MIN + SPAWN_DEPTH_SPREAD));
    }
}

#[test]
fn spawn_offsets_scale_with_depth() {
    // A star spawned at depth z must start at least the depth-scaled half
    // viewport away, or perspective would place it on screen.
    let vp = viewport();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let mut star = ShootingStar::idle();
        spawn_shooting_star(&mut star, vp, &mut rng);
        let depth = spawn_depth_factor(star.pos.z);
        assert!(star.pos.x >= vp.width / 2.0 * depth - 1e-3);
        assert!(star.pos.y >= vp.height / 2.0 * depth - 1e-3);
    }
}

#[test]
fn spawn_assigns_scale_and_palette_color() {
    let mut rng = seeded_rng();
    let mut star = ShootingStar::idle();
    spawn_shooting_star(&mut star, viewport(), &mut rng);
    assert_eq!(star.scale, depth_visual_scale(star.pos.z));
    assert!(STAR_PALETTE.contains(&star.color));
}

// ── tick_shooting_star ────────────────────────────────────────────────────────

#[test]
fn idle_star_that_did_not_spawn_is_untouched() {
    let mut rng = seeded_rng();
    let mut star = ShootingStar::idle();
    star.pos = Vec3::new(7.0, 8.0, -9.0);
    for _ in 0..200 {
        let before = star.pos;
        tick_shooting_star(&mut star, 0.033, viewport(), &mut rng);
        if star.active {
            return; // spawned — position legitimately replaced
        }
        assert_eq!(star.pos, before);
    }
}

#[test]
fn idle_star_eventually_spawns() {
    // 1% per tick: 10k ticks make a miss astronomically unlikely.
    let mut rng = seeded_rng();
    let mut star = ShootingStar::idle();
    for _ in 0..10_000 {
        tick_shooting_star(&mut star, 0.033, viewport(), &mut rng);
        if star.active {
            return;
        }
    }
    panic!("star never spawned");
}

#[test]
fn active_star_moves_diagonally_at_constant_speed() {
    let mut star = ShootingStar::idle();
    star.active = true;
    star.pos = Vec3::new(5.0, 5.0, -15.0);
    advance_shooting_star(&mut star, 0.5, viewport());
    assert!((star.pos.x - (5.0 - STAR_SPEED * 0.5)).abs() < 1e-4);
    assert!((star.pos.y - (5.0 - STAR_SPEED * 0.5)).abs() < 1e-4);
    assert_eq!(star.pos.z, -15.0);
    assert!(star.active);
}

#[test]
fn star_deactivates_past_depth_scaled_bound() {
    let vp = viewport();
    let mut star = ShootingStar::idle();
    star.active = true;
    star.pos = Vec3::new(0.0, 0.0, -15.0);
    // One huge step carries it far past the despawn bound.
    advance_shooting_star(&mut star, 10.0, vp);
    assert!(!star.active);
}

#[test]
fn active_star_ignores_spawn_roll() {
    // An active star ticking with dt = 0 must stay exactly where it is;
    // only idle slots consult the RNG for spawning.
    let mut rng = seeded_rng();
    let mut star = ShootingStar::idle();
    star.active = true;
    star.pos = Vec3::new(1.0, 1.0, -12.0);
    let before = star.pos;
    tick_shooting_star(&mut star, 0.0, viewport(), &mut rng);
    assert_eq!(star.pos, before);
    assert!(star.active);
}
