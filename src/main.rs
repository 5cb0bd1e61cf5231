use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use starfall::display;
use starfall::entities::{PointerState, ShootingStar};
use starfall::rain::{RainSurface, REVEAL_RADIUS};
use starfall::scheduler::FrameScheduler;
use starfall::skills::get_skill_details;
use starfall::starfield::{
    init_point_cloud, tick_field, tick_shooting_star, STAR_COUNT, STAR_RADIUS,
};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Number of shooting-star slots running their lifecycles independently.
const SHOOTING_STARS: usize = 3;

// ── Scenes ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
enum SceneKind {
    Starfield,
    MatrixRain,
    Combined,
}

impl SceneKind {
    fn has_stars(self) -> bool {
        self != SceneKind::MatrixRain
    }

    fn has_rain(self) -> bool {
        self != SceneKind::Starfield
    }
}

enum MenuResult {
    Scene(SceneKind),
    Skills,
    Quit,
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    let (width, height) = terminal::size()?;
    display::draw_menu(out, width, height)?;

    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Char('1') => return Ok(MenuResult::Scene(SceneKind::Starfield)),
                KeyCode::Char('2') => return Ok(MenuResult::Scene(SceneKind::MatrixRain)),
                KeyCode::Char('3') => return Ok(MenuResult::Scene(SceneKind::Combined)),
                KeyCode::Char('s') | KeyCode::Char('S') => return Ok(MenuResult::Skills),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(Event::Resize(w, h)) => display::draw_menu(out, w, h)?,
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Scene loop ────────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → back to menu.
///
/// Everything a mounted scene owns lives in this frame: the point cloud, the
/// shooting-star slots, the rain buffer, the pointer state and the scheduler
/// are created here and dropped on exit, so nothing survives an unmount.
fn scene_loop<W: Write>(
    out: &mut W,
    kind: SceneKind,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    let (mut cols, mut rows) = terminal::size()?;
    let mut viewport = display::world_viewport(cols, rows);

    let mut cloud = init_point_cloud(STAR_COUNT, STAR_RADIUS, &mut rng);
    let mut stars: Vec<ShootingStar> = (0..SHOOTING_STARS).map(|_| ShootingStar::idle()).collect();
    let mut rain = RainSurface::new(cols, rows);
    let mut pointer = PointerState::hidden();

    let mut scheduler = FrameScheduler::new(FRAME);
    scheduler.start();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            scheduler.stop();
                            return Ok(false);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            scheduler.stop();
                            return Ok(true);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    if matches!(kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                        pointer = PointerState {
                            col: column as i32,
                            row: row as i32,
                            visible: true,
                        };
                    }
                }
                Event::FocusLost => pointer.visible = false,
                Event::Resize(w, h) => {
                    cols = w;
                    rows = h;
                    viewport = display::world_viewport(cols, rows);
                    // In-flight rain state is dropped, cursors re-anchored.
                    rain.resize(cols, rows);
                }
                _ => {}
            }
        }

        let Some(dt) = scheduler.tick(Instant::now()) else {
            return Ok(false);
        };
        let dt = dt.as_secs_f32();

        if kind.has_stars() {
            tick_field(&mut cloud, dt);
            for star in &mut stars {
                tick_shooting_star(star, dt, viewport, &mut rng);
            }
        }
        if kind.has_rain() {
            rain.tick(&mut rng);
        }

        display::clear_frame(out)?;
        if kind.has_stars() {
            display::draw_starfield(out, &cloud, cols, rows)?;
            for star in &stars {
                display::draw_shooting_star(out, star, cols, rows)?;
            }
        }
        if kind.has_rain() {
            display::draw_rain_reveal(out, &rain, &pointer, REVEAL_RADIUS)?;
        }
        display::draw_scene_hint(out, rows)?;
        display::finish_frame(out, rows)?;

        let pause = scheduler.frame_sleep(frame_start);
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

// ── Skill browser ─────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → back to menu.
fn skill_browser<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<bool> {
    let names = display::skill_names();
    let mut selected = 0usize;
    let (mut width, _) = terminal::size()?;

    display::draw_skill_list(out, selected, width)?;
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                match code {
                    KeyCode::Up => {
                        selected = selected.saturating_sub(1);
                        display::draw_skill_list(out, selected, width)?;
                    }
                    KeyCode::Down => {
                        selected = (selected + 1).min(names.len() - 1);
                        display::draw_skill_list(out, selected, width)?;
                    }
                    KeyCode::Enter => {
                        // The detail page is addressed by the skill name alone.
                        if skill_detail_page(out, rx, names[selected])? {
                            return Ok(true);
                        }
                        display::draw_skill_list(out, selected, width)?;
                    }
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                        return Ok(false);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true);
                    }
                    _ => {}
                }
            }
            Ok(Event::Resize(w, _)) => {
                width = w;
                display::draw_skill_list(out, selected, width)?;
            }
            Ok(_) => {}
            Err(_) => return Ok(true),
        }
    }
}

/// Returns `true` → quit program, `false` → back to the list.
fn skill_detail_page<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    name: &str,
) -> std::io::Result<bool> {
    let detail = get_skill_details(name);
    let (mut width, _) = terminal::size()?;
    display::draw_skill_detail(out, &detail, width)?;

    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                match code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
                        return Ok(false);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true);
                    }
                    _ => {}
                }
            }
            Ok(Event::Resize(w, _)) => {
                width = w;
                display::draw_skill_detail(out, &detail, width)?;
            }
            Ok(_) => {}
            Err(_) => return Ok(true),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;
    out.execute(EnableFocusChange)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the render loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    loop {
        let quit = match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Scene(kind) => scene_loop(out, kind, rx)?,
            MenuResult::Skills => skill_browser(out, rx)?,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
