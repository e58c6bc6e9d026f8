use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use icefish::app::App;
use icefish::build_info;
use icefish::core::constants::{INPUT_POLL_MS, REALTIME_FRAME_MS};
use icefish::input::{is_press, map_key, KeyInput};
use icefish::launch::{
    resolve_launch, HttpConfigFetcher, LaunchDestination, RemoteLink, REMOTE_LINK_FILENAME,
};
use icefish::settings::{Settings, SETTINGS_FILENAME};
use icefish::stats::FileStatsStore;
use icefish::ui::draw_ui;
use icefish::utils::logger;
use icefish::utils::persistence::save_path;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const LOG_FILENAME: &str = "icefish.log";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Ice Fish - Terminal Ice Fishing\n");
                println!("Usage: icefish [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: hold Space to lower the line, release to reel in.");
                println!(
                    "Set {}=debug for verbose logs in ~/.icefish/{}",
                    logger::LOG_LEVEL_ENV,
                    LOG_FILENAME
                );
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'icefish --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = save_path(LOG_FILENAME).and_then(|path| logger::init(&path)) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("{} starting", build_info::version_line());

    let settings_path = save_path(SETTINGS_FILENAME)?;
    let settings = Settings::load(&settings_path);

    if let LaunchDestination::RemoteContent { link } = check_launch(&settings)? {
        println!("Open {} to continue.", link);
        return Ok(());
    }

    let stats = FileStatsStore::open_default()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        settings,
        Some(settings_path),
        Box::new(stats),
        release_events,
    );
    let outcome = run(&mut terminal, &mut app);

    // Cleanup terminal, even when the loop failed
    if release_events {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &outcome {
        log::error!("main loop failed: {}", e);
    }
    outcome?;

    println!("Goodbye!");
    Ok(())
}

/// Decide between remote content and the game. Only a newly fetched link is
/// written back to disk.
fn check_launch(settings: &Settings) -> io::Result<LaunchDestination> {
    let path = save_path(REMOTE_LINK_FILENAME)?;
    let mut stored = RemoteLink::load(&path);
    let fetcher = settings
        .config_endpoint
        .as_deref()
        .map(HttpConfigFetcher::new);

    let decision = resolve_launch(&mut stored, fetcher.as_ref());
    if !decision.was_token_preloaded
        && matches!(decision.destination, LaunchDestination::RemoteContent { .. })
    {
        if let Err(e) = stored.save(&path) {
            log::warn!("could not remember remote link: {}", e);
        }
    }
    Ok(decision.destination)
}

/// Draw, collect input until the next frame is due, then advance the clock.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_millis(REALTIME_FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        while last_frame.elapsed() < frame_interval {
            if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let input = map_key(key.code);
                    if is_press(&key) {
                        app.on_key(input);
                    } else if key.kind == KeyEventKind::Release
                        && matches!(input, KeyInput::Hold | KeyInput::Down)
                    {
                        app.on_hold_released();
                    }
                }
            }
            if app.should_quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        app.advance(now - last_frame);
        last_frame = now;
    }
}
