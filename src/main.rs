mod app;
mod config;
mod core;
mod domain;
mod infrastructure;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::{App, LoadState, StatusLevel};
use crate::infrastructure::{RuntimeBridge, RuntimeCommand};

#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    version,
    about = "Pulse: a clinical operations dashboard TUI"
)]
struct Args {
    /// Backend base URL (e.g. http://localhost:8000)
    #[arg(long)]
    backend: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();
    let backend_url = config::resolve_backend_url(args.backend.as_deref(), &config);

    init_logging();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // One fetch per mount; the worker starts it as soon as it spawns.
    let runtime = RuntimeBridge::new(backend_url.clone())?;

    let mut app = App::new(config::initial_module(&config), backend_url);
    app.start_load();
    app.set_status("Loading…", StatusLevel::Info);

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// File logging, enabled only when `PULSE_LOG` holds a filter spec. The
/// terminal itself is never a log target while the UI owns it.
fn init_logging() {
    let Ok(spec) = std::env::var("PULSE_LOG") else {
        return;
    };
    if spec.trim().is_empty() {
        return;
    }
    let Some(dir) = config::data_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pulse.log"))
    else {
        return;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(spec))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        app.apply_runtime_event(event);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char('s'), _) => app.toggle_sidebar(),
        (KeyCode::Down | KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up | KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char(ch), _) if ch.is_ascii_digit() && ch != '0' => {
            app.select_nth(ch as usize - '1' as usize);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let show_sidebar = ui::layout::sidebar_visible(size.width, app.sidebar_open);
    let areas = ui::layout::areas(size, show_sidebar);

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        handle_click(app, areas, mouse.column, mouse.row);
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16) {
    if rect_contains(areas.sidebar_menu, col, row) {
        let inner = rect_inner(areas.sidebar_menu);
        if !rect_contains(inner, col, row) {
            return;
        }
        let idx = (row - inner.y) as usize;
        if let Some(id) = app.modules.get(idx).map(|module| module.id.clone()) {
            app.select_from_sidebar(&id);
        }
        return;
    }

    if rect_contains(areas.content, col, row) && matches!(app.load, LoadState::Ready) {
        let zones = ui::content_zones(app, areas.content);
        let clicked = zones
            .overview
            .iter()
            .zip(app.overview_modules())
            .chain(zones.remaining.iter().zip(app.remaining_modules()))
            .find(|(rect, _)| rect_contains(**rect, col, row))
            .map(|(_, module)| module.id.clone());
        if let Some(id) = clicked {
            app.select(&id);
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}
