//! Menu bar presentation mode and its platform detection.

use log::{debug, warn};

/// How the platform presents menu bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarMode {
    /// One menu bar at the top of the screen, shared visually by all
    /// open windows.
    Merged,
    /// Each window renders its own independent menu bar.
    PerFrame,
}

impl MenuBarMode {
    /// Detect the mode to use based on environment variables and the
    /// target platform.
    ///
    /// # Returns
    /// * The mode named by `SCREENBAR_MENU_MODE` if the variable is set
    ///   to `merged` or `per-frame` (case-insensitive; unknown values are
    ///   logged and ignored)
    /// * `MenuBarMode::Merged` on macOS otherwise
    /// * `MenuBarMode::PerFrame` everywhere else
    pub fn detect() -> Self {
        match std::env::var("SCREENBAR_MENU_MODE") {
            Ok(value) => match Self::parse(&value) {
                Some(mode) => {
                    debug!("SCREENBAR_MENU_MODE={value} - using {mode:?} menu bars");
                    mode
                }
                None => {
                    warn!("Unknown SCREENBAR_MENU_MODE: {value}, using the platform default");
                    Self::platform_default()
                }
            },
            Err(_) => Self::platform_default(),
        }
    }

    /// Parse a mode override value as accepted by `SCREENBAR_MENU_MODE`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "merged" | "screen" | "global" => Some(Self::Merged),
            "per-frame" | "per_frame" | "window" => Some(Self::PerFrame),
            _ => None,
        }
    }

    fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Merged
        } else {
            Self::PerFrame
        }
    }

    /// Whether this is the single shared screen menu bar model.
    pub fn is_merged(self) -> bool {
        matches!(self, Self::Merged)
    }
}

/// Answers whether the platform currently renders a merged menu bar.
///
/// The query has no side effects and may be called any number of times.
/// It is injected into the attach logic rather than reached as a global,
/// so tests can substitute a fixed answer; a plain [MenuBarMode] value is
/// itself a provider.
pub trait MenuBarModeProvider {
    /// The current menu bar presentation mode.
    fn mode(&self) -> MenuBarMode;
}

impl MenuBarModeProvider for MenuBarMode {
    fn mode(&self) -> MenuBarMode {
        *self
    }
}

/// Provider that re-detects the platform mode on every query.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMenuBarMode;

impl MenuBarModeProvider for SystemMenuBarMode {
    fn mode(&self) -> MenuBarMode {
        MenuBarMode::detect()
    }
}
