use std::io::Write;
use std::sync::Once;

use log::{LevelFilter, Metadata, Record};

static LOGGER_INIT: Once = Once::new();

static TERMINAL_LOGGER: TerminalLogger = TerminalLogger;

/// Writes this workspace's log records to stderr, keeping stdout for the board
struct TerminalLogger;

impl log::Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("tictactoe") && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the terminal logger on first call; later calls only adjust the level
pub fn initialize_terminal_logger(level: LevelFilter) {
    LOGGER_INIT.call_once(|| {
        // only fails when another logger is already installed; keep that one
        let _ = log::set_logger(&TERMINAL_LOGGER);
    });
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    #[test]
    fn filters_by_target_and_level() {
        initialize_terminal_logger(LevelFilter::Trace);

        let ours = Metadata::builder()
            .target("tictactoe_engine::search")
            .level(Level::Debug)
            .build();
        let foreign = Metadata::builder().target("proptest::runner").level(Level::Error).build();
        assert!(TERMINAL_LOGGER.enabled(&ours));
        assert!(!TERMINAL_LOGGER.enabled(&foreign));

        initialize_terminal_logger(LevelFilter::Warn);

        let debug = Metadata::builder().target("tictactoe_ui::game").level(Level::Debug).build();
        let warn = Metadata::builder().target("tictactoe_ui::game").level(Level::Warn).build();
        assert!(!TERMINAL_LOGGER.enabled(&debug));
        assert!(TERMINAL_LOGGER.enabled(&warn));
    }
}
