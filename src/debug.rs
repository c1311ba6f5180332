use std::cell::RefCell;
use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Debug level for controlling output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    /// Outcome of each toplevel command
    Info = 3,
    Debug = 4,
    /// Every reduction step and typing judgment
    Trace = 5,
}

impl Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::None => write!(f, "NONE"),
            DebugLevel::Error => write!(f, "ERROR"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Trace => write!(f, "TRACE"),
        }
    }
}

impl FromStr for DebugLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<DebugLevel, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Ok(DebugLevel::None),
            "error" | "1" => Ok(DebugLevel::Error),
            "warn" | "2" => Ok(DebugLevel::Warn),
            "info" | "3" => Ok(DebugLevel::Info),
            "debug" | "4" => Ok(DebugLevel::Debug),
            "trace" | "5" => Ok(DebugLevel::Trace),
            other => Err(format!("unknown debug level '{}'", other)),
        }
    }
}

pub struct DebugConfig {
    pub level: DebugLevel,
    pub module_filters: Vec<String>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            level: DebugLevel::None,
            module_filters: Vec::new(),
        }
    }
}

thread_local! {
    static DEBUG_CONFIG: RefCell<DebugConfig> = RefCell::new(DebugConfig::default());
}

pub const LEVEL_VAR: &str = "FULLPOLY_DEBUG";
pub const MODULES_VAR: &str = "FULLPOLY_DEBUG_MODULES";

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_CONFIG.with(|config| {
        config.borrow_mut().level = level;
    });
}

pub fn debug_level() -> DebugLevel {
    DEBUG_CONFIG.with(|config| config.borrow().level)
}

/// Add a module filter (only these modules will output debug info)
pub fn add_module_filter(module: &str) {
    DEBUG_CONFIG.with(|config| {
        config.borrow_mut().module_filters.push(module.to_string());
    });
}

pub fn clear_module_filters() {
    DEBUG_CONFIG.with(|config| {
        config.borrow_mut().module_filters.clear();
    });
}

/// Configure the current thread from `FULLPOLY_DEBUG` and
/// `FULLPOLY_DEBUG_MODULES`. Unset variables leave the configuration alone;
/// an unparsable level is reported back.
pub fn init_from_env() -> Result<(), String> {
    if let Ok(level) = env::var(LEVEL_VAR) {
        set_debug_level(level.parse()?);
    }
    if let Ok(modules) = env::var(MODULES_VAR) {
        clear_module_filters();
        modules
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .for_each(add_module_filter);
    }
    Ok(())
}

pub fn is_debug_enabled(level: DebugLevel, module: &str) -> bool {
    DEBUG_CONFIG.with(|config| {
        let config = config.borrow();
        if config.level < level {
            return false;
        }
        if config.module_filters.is_empty() {
            return true;
        }
        config.module_filters.iter().any(|filter| module.contains(filter))
    })
}

#[macro_export]
macro_rules! debug {
    ($level:expr, $module:expr, $($arg:tt)*) => {
        if $crate::debug::is_debug_enabled($level, $module) {
            eprintln!("[{}:{}] {}", $level, $module, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! debug_warn {
    ($module:expr, $($arg:tt)*) => {
        $crate::debug!($crate::debug::DebugLevel::Warn, $module, $($arg)*);
    };
}

#[macro_export]
macro_rules! debug_info {
    ($module:expr, $($arg:tt)*) => {
        $crate::debug!($crate::debug::DebugLevel::Info, $module, $($arg)*);
    };
}

#[macro_export]
macro_rules! debug_debug {
    ($module:expr, $($arg:tt)*) => {
        $crate::debug!($crate::debug::DebugLevel::Debug, $module, $($arg)*);
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($module:expr, $($arg:tt)*) => {
        $crate::debug!($crate::debug::DebugLevel::Trace, $module, $($arg)*);
    };
}
