//! hilo - a raw-terminal number guessing game with colored feedback and
//! tone cues.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hilo::config::GameConfig;
use hilo::input::TerminalKeys;
use hilo::session::SessionController;
use hilo::tui::TerminalFeedback;

fn main() {
    // Restore the terminal before the default hook reports a panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        crossterm::terminal::disable_raw_mode().ok();
        print!("\r\n");
        let _ = std::io::Write::flush(&mut std::io::stdout());
        default_hook(info);
    }));

    // Logs go to stderr without ANSI so they never color the game's own
    // output. Default level is warn; RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hilo started");

    if let Err(e) = run() {
        // Raw mode was already restored by guard drop before the error
        // reached us.
        eprintln!("hilo: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        anyhow::bail!("stdin and stdout must be an interactive terminal");
    }

    let mut keys = TerminalKeys;
    let mut feedback = TerminalFeedback::new();
    let mut session = SessionController::new(GameConfig::default());
    session.run(&mut keys, &mut feedback)?;
    Ok(())
}
