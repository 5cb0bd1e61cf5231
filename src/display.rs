/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// simulation state.  No simulation logic is performed; this module only
/// translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{PointCloud, PointerState, ShootingStar, Vec3};
use crate::rain::RainSurface;
use crate::skills::{SkillDetail, SkillIcon, SKILL_CATEGORIES};
use crate::starfield::orient;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_ACCENT: Color = Color::Magenta;
const C_TEXT: Color = Color::White;

/// Base tint of the point cloud.
const C_STAR: (u8, u8, u8) = (0xf2, 0x72, 0xc8);

// ── Projection ────────────────────────────────────────────────────────────────

/// Camera sits at z = +1 looking down the -z axis.
const CAM_Z: f32 = 1.0;

/// Inverse tangent of half the vertical field of view (75°).
const FOV_SCALE: f32 = 1.30;

/// A terminal cell is about twice as tall as it is wide.
const CELL_ASPECT: f32 = 2.0;

/// World extent visible at the focal plane for a given terminal size.
/// The shooting-star simulator uses this for its spawn/despawn bounds.
pub fn world_viewport(cols: u16, rows: u16) -> crate::entities::Viewport {
    let height = 2.0 / FOV_SCALE * CAM_Z;
    let aspect = cols.max(1) as f32 / (rows.max(1) as f32 * CELL_ASPECT);
    crate::entities::Viewport {
        width: height * aspect,
        height,
    }
}

/// Project a world-space point onto the terminal grid.  Returns the cell
/// plus the camera-space depth, or `None` when the point is behind the
/// camera or outside the grid.
fn project(p: Vec3, cols: u16, rows: u16) -> Option<(u16, u16, f32)> {
    let depth = CAM_Z - p.z;
    if depth < 0.1 {
        return None;
    }
    let aspect = cols as f32 / (rows as f32 * CELL_ASPECT);

    let ndc_x = p.x * FOV_SCALE / (depth * aspect);
    let ndc_y = p.y * FOV_SCALE / depth;

    let col = ((ndc_x + 1.0) / 2.0 * cols as f32).floor();
    let row = ((1.0 - ndc_y) / 2.0 * rows as f32).floor();
    if col < 0.0 || row < 0.0 || col >= cols as f32 || row >= rows as f32 {
        return None;
    }
    Some((col as u16, row as u16, depth))
}

fn scale_rgb((r, g, b): (u8, u8, u8), v: f32) -> Color {
    let v = v.clamp(0.0, 1.0);
    Color::Rgb {
        r: (r as f32 * v) as u8,
        g: (g as f32 * v) as u8,
        b: (b as f32 * v) as u8,
    }
}

// ── Starfield ─────────────────────────────────────────────────────────────────

/// Render the rotated point cloud.  Nearer points get brighter glyphs.
pub fn draw_starfield<W: Write>(
    out: &mut W,
    cloud: &PointCloud,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    for &p in &cloud.positions {
        let world = orient(cloud, p);
        let Some((col, row, depth)) = project(world, cols, rows) else {
            continue;
        };
        // depth runs from ~(CAM_Z - r) near to ~(CAM_Z + r) far
        let near = 1.0 - (depth - (CAM_Z - cloud.radius)) / (2.0 * cloud.radius);
        let glyph = if near > 0.75 {
            '✦'
        } else if near > 0.45 {
            '*'
        } else {
            '·'
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(scale_rgb(C_STAR, 0.35 + 0.65 * near)))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Render one shooting star: a bright core with a fading diagonal trail
/// pointing back along the travel direction.  Inactive slots draw nothing.
pub fn draw_shooting_star<W: Write>(
    out: &mut W,
    star: &ShootingStar,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    if !star.active {
        return Ok(());
    }
    let Some((col, row, _)) = project(star.pos, cols, rows) else {
        return Ok(());
    };

    let trail = (star.scale * 1.5).round() as i32;
    for i in (0..=trail).rev() {
        let c = col as i32 + i;
        let r = row as i32 - i;
        if c < 0 || r < 0 || c >= cols as i32 || r >= rows as i32 {
            continue;
        }
        let fade = 1.0 - i as f32 / (trail + 1) as f32;
        let glyph = if i == 0 { '✦' } else { '·' };
        out.queue(cursor::MoveTo(c as u16, r as u16))?;
        out.queue(style::SetForegroundColor(scale_rgb(star.color, fade)))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Matrix rain ───────────────────────────────────────────────────────────────

fn rain_color(v: f32) -> Color {
    let v = v.clamp(0.0, 1.0);
    if v > 0.85 {
        // Fresh glyph at the drop head reads white-green.
        Color::Rgb { r: 190, g: 255, b: 190 }
    } else {
        Color::Rgb {
            r: 0,
            g: (70.0 + 185.0 * v) as u8,
            b: (65.0 * v) as u8,
        }
    }
}

/// Composite the flashlight view of the rain buffer.  The caller has
/// already cleared the frame, so an away pointer leaves the surface fully
/// dark.
pub fn draw_rain_reveal<W: Write>(
    out: &mut W,
    surface: &RainSurface,
    pointer: &PointerState,
    radius: u16,
) -> std::io::Result<()> {
    for cell in surface.reveal_cells(pointer, radius) {
        out.queue(cursor::MoveTo(cell.col, cell.row))?;
        out.queue(style::SetForegroundColor(rain_color(cell.brightness)))?;
        out.queue(Print(cell.glyph))?;
    }
    Ok(())
}

// ── Scene chrome ──────────────────────────────────────────────────────────────

pub fn clear_frame<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

pub fn draw_scene_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Move the mouse to look around   Q / ESC : back"))?;
    Ok(())
}

pub fn finish_frame<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Render the scene-selection menu.
pub fn draw_menu<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = width / 2;
    let cy = height / 2;

    let title = "✦  S T A R F A L L  ✦";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    let subtitle = "terminal ambient visuals";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(subtitle.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(subtitle))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print("Pick a backdrop:"))?;

    let options: &[(&str, &str, Color, &str)] = &[
        ("1", "Starfield  ", Color::Magenta, "Rotating star sphere + shooting stars"),
        ("2", "Matrix rain", Color::Green,   "Glyph rain revealed around the pointer"),
        ("3", "Combined   ", Color::Cyan,    "Both layers at once"),
    ];

    for (i, (key, label, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<12}", label)))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!(" — {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("[S] "))?;
    out.queue(style::SetForegroundColor(C_ACCENT))?;
    out.queue(Print("Skill browser"))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(" — the technical arsenal, with detail pages"))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 6))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("1 2 3 : Scenes   S : Skills   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Skill browser ─────────────────────────────────────────────────────────────

/// Resolve an icon variant to something a terminal can show.  Vector marks
/// collapse to a diamond; icon-font classes keep their short identifier.
pub fn icon_label(icon: &SkillIcon) -> String {
    match icon {
        SkillIcon::RawMarkup(_) => "◆".to_string(),
        SkillIcon::FontGlyphClass(class) => {
            // "devicon-react-original colored" → "react"
            class
                .split_whitespace()
                .next()
                .unwrap_or("")
                .trim_start_matches("devicon-")
                .split('-')
                .next()
                .unwrap_or("◇")
                .to_string()
        }
    }
}

/// Flattened list of every skill name, in catalog order.  The browser
/// selection indexes into this.
pub fn skill_names() -> Vec<&'static str> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.name))
        .collect()
}

/// Render the category-grouped skill list with the current selection
/// highlighted, proficiency bars included.
pub fn draw_skill_list<W: Write>(
    out: &mut W,
    selected: usize,
    width: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let title = "Technical Arsenal";
    out.queue(cursor::MoveTo(
        (width / 2).saturating_sub(title.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    let mut row: u16 = 2;
    let mut index = 0usize;
    for category in &SKILL_CATEGORIES {
        out.queue(cursor::MoveTo(2, row))?;
        out.queue(style::SetForegroundColor(C_ACCENT))?;
        out.queue(Print(format!("{} {}", category.emblem, category.title)))?;
        row += 1;

        for entry in &category.skills {
            out.queue(cursor::MoveTo(4, row))?;
            if index == selected {
                out.queue(style::SetForegroundColor(Color::Black))?;
                out.queue(style::SetBackgroundColor(C_TEXT))?;
            } else {
                out.queue(style::SetForegroundColor(C_TEXT))?;
            }
            let bar_len = (entry.level as usize * 10) / 100;
            out.queue(Print(format!(
                "{:<12} {:<10} {}{} {:>3}%",
                entry.name,
                icon_label(&entry.icon),
                "█".repeat(bar_len),
                "░".repeat(10 - bar_len),
                entry.level,
            )))?;
            out.queue(style::SetBackgroundColor(Color::Reset))?;
            row += 1;
            index += 1;
        }
    }

    out.queue(cursor::MoveTo(2, row + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ : Select   ENTER : Details   ESC : Back"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Render one skill's detail page.
pub fn draw_skill_detail<W: Write>(
    out: &mut W,
    detail: &SkillDetail,
    width: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let text_width = (width.saturating_sub(8)).max(20) as usize;

    out.queue(cursor::MoveTo(2, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(&detail.name))?;

    let mut row: u16 = 2;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    for line in wrap(detail.definition, text_width) {
        out.queue(cursor::MoveTo(2, row))?;
        out.queue(Print(line))?;
        row += 1;
    }
    row += 1;
    out.queue(style::SetForegroundColor(C_HINT))?;
    for line in wrap(detail.description, text_width) {
        out.queue(cursor::MoveTo(2, row))?;
        out.queue(Print(line))?;
        row += 1;
    }

    row += 1;
    out.queue(cursor::MoveTo(2, row))?;
    out.queue(style::SetForegroundColor(C_ACCENT))?;
    out.queue(Print("What it's for"))?;
    row += 1;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    for utility in &detail.utilities {
        out.queue(cursor::MoveTo(4, row))?;
        out.queue(Print(format!("• {}", utility)))?;
        row += 1;
    }

    row += 1;
    out.queue(cursor::MoveTo(2, row))?;
    out.queue(style::SetForegroundColor(C_ACCENT))?;
    out.queue(Print("Quick start"))?;
    row += 1;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    for (i, step) in detail.quick_start.iter().enumerate() {
        out.queue(cursor::MoveTo(4, row))?;
        out.queue(Print(format!("{}. {}", i + 1, step)))?;
        row += 1;
    }

    row += 1;
    out.queue(cursor::MoveTo(2, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(detail.image))?;

    out.queue(cursor::MoveTo(2, row + 2))?;
    out.queue(Print("ESC : Back to list"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Greedy word wrap; words longer than the width get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
