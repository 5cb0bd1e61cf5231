/// All simulation entity types — pure data, no logic.

/// A position in the star scene's world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

/// Visible world extent at the focal plane, in world units.
/// Derived from the terminal size so spawn/despawn bounds track the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

// ── Starfield ─────────────────────────────────────────────────────────────────

/// The static point cloud plus the orientation of its enclosing group.
/// `positions` is sampled once per mount and never mutated; only the two
/// rotation angles advance over time.
#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub radius: f32,
    pub rot_x: f32,
    pub rot_y: f32,
}

/// One reusable shooting-star slot.  While `active` is false the position is
/// meaningless and the star renders nothing.
#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub active: bool,
    pub pos: Vec3,
    /// Depth-derived visual scale, recomputed on spawn.
    pub scale: f32,
    /// RGB picked from the palette when the star spawns.
    pub color: (u8, u8, u8),
}

impl ShootingStar {
    pub fn idle() -> Self {
        ShootingStar {
            active: false,
            pos: Vec3::ZERO,
            scale: 1.0,
            color: (255, 255, 255),
        }
    }
}

// ── Matrix rain ───────────────────────────────────────────────────────────────

/// Per-column drop cursor.  Rain flows upward: the row decreases every tick
/// and wraps back to a bottom anchor after leaving the top of the buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainColumn {
    pub drop_row: i32,
}

/// One cell of the persistent rain buffer.  `intensity` decays every tick to
/// produce the trailing-glyph effect; a freshly drawn glyph is 1.0.
#[derive(Clone, Copy, Debug)]
pub struct RainCell {
    pub glyph: char,
    pub intensity: f32,
}

impl RainCell {
    pub fn dark() -> Self {
        RainCell { glyph: ' ', intensity: 0.0 }
    }
}

/// A lit cell inside the flashlight mask, ready to composite.
/// `brightness` already folds the radial mask into the cell intensity.
#[derive(Clone, Copy, Debug)]
pub struct RevealCell {
    pub col: u16,
    pub row: u16,
    pub glyph: char,
    pub brightness: f32,
}

// ── Pointer ───────────────────────────────────────────────────────────────────

/// Last known pointer position in terminal cells.  Owned by the mounted
/// scene — never shared across instances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub col: i32,
    pub row: i32,
    pub visible: bool,
}

impl PointerState {
    pub fn hidden() -> Self {
        PointerState { col: 0, row: 0, visible: false }
    }
}
