//! vimrly - replay key symbols through the command-key interpreter.
//!
//! Reads whitespace-separated key symbols from stdin (`g g d d i Escape`),
//! runs them through a session and prints every synthetic keystroke the
//! editor would receive, along with each mode change.

use crossterm::style::Stylize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vimrly_core::{
    Config, DriverResult, EditorSurface, KeyStroke, KeystrokeDriver, Mode, SessionRunner,
};

/// Environment variable forcing the modifier set (`mac` or `other`).
const PLATFORM_ENV: &str = "VIMRLY_PLATFORM";

/// Editor surface that prints what it is asked to do.
#[derive(Debug, Default)]
struct PrintingSurface;

impl EditorSurface for PrintingSurface {
    fn send_key(&mut self, stroke: KeyStroke) -> DriverResult<()> {
        println!("  {}", stroke);
        Ok(())
    }

    fn selected_text(&self) -> DriverResult<String> {
        Ok(String::new())
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        println!("  {}", "(clear selection)".dim());
        Ok(())
    }

    fn blur(&mut self) -> DriverResult<()> {
        println!("  {}", "(blur)".dim());
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> DriverResult<()> {
        println!("  {} {:?}", "(clipboard)".dim(), text);
        Ok(())
    }
}

/// Standard config with the env override applied, starting in command mode
/// unless another active mode is configured.
fn load_config() -> vimrly_core::Result<Config> {
    let mut config = Config::load_standard()?;
    if let Ok(value) = std::env::var(PLATFORM_ENV) {
        config.platform = value.parse()?;
    }
    if config.start_mode == Mode::Off {
        config.start_mode = Mode::Command;
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays a clean keystroke transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    let platform = config.platform();
    info!(?platform, timeout = ?config.prefix_timeout(), "Replaying keys from stdin");

    let driver = KeystrokeDriver::new(PrintingSurface, platform);
    let (runner, handle) = SessionRunner::from_config(driver, &config);
    let mut modes = runner.subscribe();
    println!("{}", runner.state().status_line().bold());

    let session = tokio::spawn(runner.run());
    let status = tokio::spawn(async move {
        while modes.changed().await.is_ok() {
            let mode = *modes.borrow_and_update();
            println!("{}", format!("MODE: {}", mode.display_name()).bold());
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        for key in line.split_whitespace() {
            println!("{}", key.cyan());
            handle.key(key).await?;
            // Let the session echo this key's keystrokes before the next one
            tokio::task::yield_now().await;
        }
    }
    drop(handle);

    let (state, _dispatcher) = session.await?;
    if !state.clipboard().is_empty() {
        println!("clipboard: {:?}", state.clipboard());
    }
    drop(state);
    status.await?;

    Ok(())
}
