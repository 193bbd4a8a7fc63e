use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Writes to stderr so log lines never land in the middle of a board drawn
/// on stdout.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format_line(message));
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.log(message);
        }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_prefix_and_message() {
        let logger = Logger::new(Some("Engine".to_string()), false);
        let line = logger.format_line("picked cell 4");
        assert!(line.contains("[Engine] picked cell 4"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("ready");
        assert!(line.ends_with("] ready"));
        assert!(!line.contains("]["));
    }
}
