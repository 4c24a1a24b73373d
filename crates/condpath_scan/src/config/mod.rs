//! Scan configuration.
//!
//! Debug verbosity is an explicit value threaded into every scan rather
//! than process-wide state. Categories toggle independently.

use bitflags::bitflags;

bitflags! {
    /// Debug logging categories.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct DebugFlags: u8 {
        /// Per-line events of the folding scanner.
        const FOLDING = 1 << 0;
        /// Per-directive events of the decoration scanner.
        const DECORATIONS = 1 << 1;
    }
}

/// Category names accepted by [`DebugFlags::parse_list`].
const CATEGORY_NAMES: [(&str, DebugFlags); 2] = [
    ("folding", DebugFlags::FOLDING),
    ("decorations", DebugFlags::DECORATIONS),
];

impl DebugFlags {
    /// Parse a comma-separated category list.
    ///
    /// Accepts `folding`, `decorations`, `all` and `none` (case-insensitive).
    /// Empty items are ignored, so `""` parses as no categories.
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        let mut flags = DebugFlags::empty();
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let item = item.to_ascii_lowercase();
            match item.as_str() {
                "all" => flags |= DebugFlags::all(),
                "none" => {}
                _ => {
                    let Some(&(_, flag)) = CATEGORY_NAMES.iter().find(|(name, _)| *name == item)
                    else {
                        return Err(ConfigError::UnknownCategory(item));
                    };
                    flags |= flag;
                }
            }
        }
        Ok(flags)
    }
}

/// Configuration passed into every scan.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ScanConfig {
    pub debug: DebugFlags,
}

impl Default for ScanConfig {
    /// Decoration logging on, folding logging off.
    fn default() -> Self {
        Self {
            debug: DebugFlags::DECORATIONS,
        }
    }
}

impl ScanConfig {
    /// Configuration with every debug category disabled.
    pub fn quiet() -> Self {
        Self {
            debug: DebugFlags::empty(),
        }
    }

    pub fn with_debug(debug: DebugFlags) -> Self {
        Self { debug }
    }
}

/// Invalid configuration value.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown debug category '{0}' (expected folding, decorations, all or none)")]
    UnknownCategory(String),
}
