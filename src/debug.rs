//! Debug tracing of the combinator engine.
//!
//! Control via the PARSIDO_DEBUG environment variable:
//! - `PARSIDO_DEBUG=*` - Enable every category
//! - `PARSIDO_DEBUG=choice` - Enable only ordered choice
//! - `PARSIDO_DEBUG=sequence,repeat` - Enable several
//!
//! Verbosity via PARSIDO_DEBUG_VERBOSITY (0-3, default 1). Messages go to stderr.

use std::collections::HashSet;
use std::env;
use std::sync::OnceLock;

const DEBUG_VAR: &str = "PARSIDO_DEBUG";
const VERBOSITY_VAR: &str = "PARSIDO_DEBUG_VERBOSITY";

/// Parts of the engine that can be traced independently
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// Sequencer boundaries: absorbed aborts and escalations
    Sequence,
    /// Ordered choice falling back to a later branch
    Choice,
    /// Repetition stopping
    Repeat,
    /// Word, pattern and literal matching
    Lexeme,
    /// Forward references
    Recursive,
}

impl Category {
    const ALL: [Category; 5] = [
        Category::Sequence,
        Category::Choice,
        Category::Repeat,
        Category::Lexeme,
        Category::Recursive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Sequence => "sequence",
            Category::Choice => "choice",
            Category::Repeat => "repeat",
            Category::Lexeme => "lexeme",
            Category::Recursive => "recursive",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnabledConfig {
    All,
    None,
    Some(HashSet<String>),
}

impl EnabledConfig {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => EnabledConfig::None,
            Some("*") | Some("1") | Some("true") => EnabledConfig::All,
            Some(value) => {
                let set: HashSet<_> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if set.is_empty() {
                    EnabledConfig::None
                } else {
                    EnabledConfig::Some(set)
                }
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        match self {
            EnabledConfig::None => false,
            EnabledConfig::All => true,
            EnabledConfig::Some(set) => set.contains(name),
        }
    }
}

fn parse_verbosity(value: Option<&str>) -> u8 {
    value
        .and_then(|v| v.trim().parse().ok())
        .map(|v: u8| v.min(3))
        .unwrap_or(1)
}

struct GlobalConfig {
    loggers: [Logger; 5],
}

static CONFIG: OnceLock<GlobalConfig> = OnceLock::new();

fn get_config() -> &'static GlobalConfig {
    CONFIG.get_or_init(|| {
        let enabled = EnabledConfig::parse(env::var(DEBUG_VAR).ok().as_deref());
        let verbosity = parse_verbosity(env::var(VERBOSITY_VAR).ok().as_deref());
        GlobalConfig {
            loggers: Category::ALL.map(|category| {
                if enabled.contains(category.name()) {
                    Logger::active(category, verbosity)
                } else {
                    Logger::disabled(category)
                }
            }),
        }
    })
}

// ============================================================================
// Logger
// ============================================================================

pub struct Logger {
    category: Category,
    enabled: bool,
    verbosity: u8,
}

impl Logger {
    const fn disabled(category: Category) -> Self {
        Self {
            category,
            enabled: false,
            verbosity: 0,
        }
    }

    fn active(category: Category, verbosity: u8) -> Self {
        Self {
            category,
            enabled: true,
            verbosity,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn log(&self, msg: &str) {
        if self.enabled && self.verbosity >= 1 {
            eprintln!("[{}] {}", self.category.name(), msg);
        }
    }

    #[inline]
    pub fn detail(&self, msg: &str) {
        if self.enabled && self.verbosity >= 2 {
            eprintln!("[{}] {}", self.category.name(), msg);
        }
    }

    #[inline]
    pub fn fail(&self, msg: &str) {
        if self.enabled && self.verbosity >= 1 {
            eprintln!("[{}] FAIL: {}", self.category.name(), msg);
        }
    }
}

/// The logger for a category, configured from the environment on first use
pub fn logger(category: Category) -> &'static Logger {
    &get_config().loggers[category.index()]
}

// ============================================================================
// Macros - avoid format! cost when disabled
// ============================================================================

macro_rules! log {
    ($category:expr, $($arg:tt)*) => {{
        let logger = $crate::debug::logger($category);
        if logger.enabled() {
            logger.log(&format!($($arg)*));
        }
    }};
}

macro_rules! log_detail {
    ($category:expr, $($arg:tt)*) => {{
        let logger = $crate::debug::logger($category);
        if logger.enabled() {
            logger.detail(&format!($($arg)*));
        }
    }};
}

macro_rules! log_fail {
    ($category:expr, $($arg:tt)*) => {{
        let logger = $crate::debug::logger($category);
        if logger.enabled() {
            logger.fail(&format!($($arg)*));
        }
    }};
}

pub(crate) use {log, log_detail, log_fail};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_disables_everything() {
        assert_eq!(EnabledConfig::parse(None), EnabledConfig::None);
        assert_eq!(EnabledConfig::parse(Some("")), EnabledConfig::None);
        assert_eq!(EnabledConfig::parse(Some(" , ")), EnabledConfig::None);
    }

    #[test]
    fn test_wildcards_enable_everything() {
        for value in ["*", "1", "true"] {
            let config = EnabledConfig::parse(Some(value));
            assert_eq!(config, EnabledConfig::All, "Failed for {:?}", value);
            assert!(config.contains("choice"));
        }
    }

    #[test]
    fn test_category_list() {
        let config = EnabledConfig::parse(Some("choice, repeat"));
        assert!(config.contains("choice"));
        assert!(config.contains("repeat"));
        assert!(!config.contains("sequence"));
    }

    #[test]
    fn test_verbosity_defaults_and_clamps() {
        assert_eq!(parse_verbosity(None), 1);
        assert_eq!(parse_verbosity(Some("junk")), 1);
        assert_eq!(parse_verbosity(Some("2")), 2);
        assert_eq!(parse_verbosity(Some("9")), 3);
    }

    #[test]
    fn test_category_names_are_distinct() {
        let names: HashSet<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_logger_lookup_matches_category() {
        for category in Category::ALL {
            assert_eq!(logger(category).category, category);
        }
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = Logger::disabled(Category::Choice);
        assert!(!logger.enabled());
        // Nothing to observe beyond not panicking
        logger.log("ignored");
        logger.detail("ignored");
        logger.fail("ignored");
    }
}
