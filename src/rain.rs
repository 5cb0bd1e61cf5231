/// Matrix-rain reveal simulation.
///
/// A persistent character grid scrolls continuously (one drop cursor per
/// column, flowing upward) and is never cleared — each tick multiplies every
/// cell's intensity by a retain factor, which is what gives the trailing
/// glyphs.  The visible surface shows nothing unless the pointer is present,
/// in which case a radially masked "flashlight" disc of the buffer is
/// composited around it.

use rand::Rng;

use crate::entities::{PointerState, RainCell, RainColumn, RevealCell};

// ── Tunables ─────────────────────────────────────────────────────────────────

/// Per-tick intensity retention; the complement is the fade fill opacity.
pub const FADE_RETAIN: f32 = 0.95;

/// Chance per tick that a drop which has scrolled off the top wraps back to
/// the bottom.  Probabilistic on purpose: it desynchronizes the columns so
/// they don't all cycle in lockstep.
pub const WRAP_CHANCE: f64 = 0.025;

/// Cells dimmer than this are treated as dark.
pub const MIN_INTENSITY: f32 = 0.02;

/// Flashlight radius in terminal columns.
pub const REVEAL_RADIUS: u16 = 24;

/// Terminal cells are roughly twice as tall as wide; row distances are
/// doubled so the flashlight reads as a circle.
const CELL_ASPECT: f32 = 2.0;

/// Glyph pool: Latin, digits, Greek, Cyrillic, math symbols, Katakana.
pub const GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'π', 'ρ', 'σ', 'τ',
    'φ', 'χ', 'ψ', 'ω', 'Б', 'Г', 'Д', 'Ж', 'З', 'И', 'Й', 'Л', 'П', 'Ф', 'Ц', 'Ч', 'Ш', 'Щ',
    'Ы', 'Э', 'Ю', 'Я', '∀', '∃', '∅', '∈', '∑', '√', '∞', '∧', '∨', '∩', '∪', '∫', '≈', '≠',
    '≡', '≤', '≥', '⊂', '⊃', '⊕', '⊗', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ',
    'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
];

// ── Surface ──────────────────────────────────────────────────────────────────

/// The persistent rain buffer plus its column cursors.  One column per
/// terminal cell of width; zero-sized surfaces are valid and do nothing
/// (the decorative layer degrades to a no-op instead of failing).
#[derive(Clone, Debug)]
pub struct RainSurface {
    width: u16,
    height: u16,
    columns: Vec<RainColumn>,
    cells: Vec<RainCell>,
}

impl RainSurface {
    pub fn new(width: u16, height: u16) -> Self {
        let mut surface = RainSurface {
            width: 0,
            height: 0,
            columns: Vec::new(),
            cells: Vec::new(),
        };
        surface.resize(width, height);
        surface
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&RainCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + col as usize)
    }

    /// Rebuild the buffer for new dimensions.  In-flight rain state is
    /// discarded: the grid is cleared and every drop cursor re-anchored one
    /// row past the bottom, accepting the visual discontinuity.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.columns = vec![RainColumn { drop_row: height as i32 }; width as usize];
        self.cells = vec![RainCell::dark(); width as usize * height as usize];
    }

    /// Advance the rain one tick.
    ///
    /// Order per column matters and mirrors the scroll contract: draw the
    /// glyph at the current cursor, roll the wrap chance only once the
    /// cursor is above the top, then decrement.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            cell.intensity *= FADE_RETAIN;
            if cell.intensity < MIN_INTENSITY {
                *cell = RainCell::dark();
            }
        }

        let (w, h) = (self.width as i32, self.height as i32);
        for (i, column) in self.columns.iter_mut().enumerate() {
            let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
            let row = column.drop_row;
            if (0..h).contains(&row) {
                self.cells[row as usize * w as usize + i] =
                    RainCell { glyph, intensity: 1.0 };
            }
            if row < 0 && rng.gen_bool(WRAP_CHANCE) {
                column.drop_row = h;
            }
            column.drop_row -= 1;
        }
    }

    /// The flashlight composite: every lit cell within `radius` of the
    /// pointer, with the radial mask folded into its brightness.  Nothing is
    /// revealed while the pointer is away.
    pub fn reveal_cells(&self, pointer: &PointerState, radius: u16) -> Vec<RevealCell> {
        let mut out = Vec::new();
        if !pointer.visible || radius == 0 {
            return out;
        }

        let r = radius as i32;
        let col_lo = (pointer.col - r).max(0);
        let col_hi = (pointer.col + r).min(self.width as i32 - 1);
        let row_lo = (pointer.row - r / 2).max(0);
        let row_hi = (pointer.row + r / 2).min(self.height as i32 - 1);

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let cell = self.cells[row as usize * self.width as usize + col as usize];
                if cell.intensity < MIN_INTENSITY {
                    continue;
                }
                let dx = (col - pointer.col) as f32;
                let dy = (row - pointer.row) as f32 * CELL_ASPECT;
                let dist = (dx * dx + dy * dy).sqrt() / radius as f32;
                let alpha = mask_alpha(dist);
                if alpha <= 0.0 {
                    continue;
                }
                out.push(RevealCell {
                    col: col as u16,
                    row: row as u16,
                    glyph: cell.glyph,
                    brightness: cell.intensity * alpha,
                });
            }
        }
        out
    }
}

/// Radial gradient mask: opaque at the focal point, half-faded at 60% of the
/// radius, fully transparent at the rim.
pub fn mask_alpha(dist_norm: f32) -> f32 {
    if dist_norm <= 0.0 {
        1.0
    } else if dist_norm < 0.6 {
        1.0 - 0.5 * (dist_norm / 0.6)
    } else if dist_norm < 1.0 {
        0.5 * (1.0 - dist_norm) / 0.4
    } else {
        0.0
    }
}
