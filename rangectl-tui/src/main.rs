//! Rangectl TUI: drag range controls with the mouse.
//!
//! Loads a control set from the path given as the first argument, or from
//! `<config dir>/rangectl/controls.toml`, falling back to the built-in demo
//! set. Logs go to `<temp dir>/rangectl-tui.log`; set `RUST_LOG` to tune.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rangectl_core::ControlSet;
use rangectl_tui::{input, ui, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    init_logging()?;

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let set = load_controls(&config_path)?;

    let mut app = AppState::new(&set);
    app.set_status(format!("{} controls loaded", app.slots.len()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    app.unmount_all();
    info!("all controls unmounted");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join("rangectl-tui.log");
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangectl")
        .join("controls.toml")
}

fn load_controls(path: &Path) -> Result<ControlSet> {
    if !path.exists() {
        warn!("{} not found; using demo controls", path.display());
        return Ok(ControlSet::demo());
    }
    let set = ControlSet::from_file(path)
        .with_context(|| format!("failed to load controls from {}", path.display()))?;
    info!("loaded {} controls from {}", set.controls.len(), path.display());
    Ok(set)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Collect change notifications
        app.drain_events();

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
