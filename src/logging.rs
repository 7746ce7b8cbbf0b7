use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

static TUI_MODE: AtomicBool = AtomicBool::new(false);

/// Installs env_logger. Every record is forwarded to tui-logger; the console
/// only sees records while the terminal UI is not running.
pub fn init_logger(level: LevelFilter) {
    let drain = tui_logger::Drain::new();
    let result = env_logger::Builder::default()
        .filter_level(level)
        .format(move |buf, record| {
            drain.log(record);

            if TUI_MODE.load(Ordering::Relaxed) {
                return Ok(());
            }
            writeln!(buf, "{}", console_line(record.level(), &record.args().to_string()))
        })
        .try_init();
    tui_logger::set_default_level(level);

    match result {
        Ok(()) => log::debug!("Logger initialized at {level} level"),
        Err(e) => eprintln!("Logger already initialized: {e}"),
    }
}

fn console_line(level: log::Level, message: &str) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    format!("[{timestamp}] {level}: {message}")
}

pub fn switch_to_tui_logging() {
    TUI_MODE.store(true, Ordering::Relaxed);
    log::info!("Switched to TUI logging mode");
}

pub fn switch_to_console_logging() {
    TUI_MODE.store(false, Ordering::Relaxed);
}
