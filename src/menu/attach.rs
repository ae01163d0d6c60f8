//! Attach lifecycle: resolving a bar when a window realizes its chrome.
//!
//! The windowing layer is an external collaborator. Instead of deriving
//! from a native menu bar widget, the core holds the native handle behind
//! the [MenuBarHost] trait and expects the windowing layer to call
//! [AttachController::attach] once per window, at the point the window's
//! chrome is realized and the owning frame becomes resolvable.

use log::debug;

use crate::error::MenuBarResult;
use crate::frame::UserFrame;
use crate::menu::resolver::resolve;
use crate::menu::tree::MenuBar;
use crate::platform::MenuBarModeProvider;

/// Windowing-layer collaborator that realizes a menu bar inside a window.
///
/// Implementations wrap the host toolkit's native menu bar handle. The
/// host answers which frame owns the bar and performs the native part of
/// the attach once resolution has run.
pub trait MenuBarHost {
    /// The frame this menu bar belongs to, once the windowing layer has
    /// associated them.
    ///
    /// Returns `None` while the owning window is not yet known or is not
    /// a recognized frame kind. That is not an error: attach proceeds
    /// with the tree unfiltered.
    fn frame(&self) -> Option<&dyn UserFrame>;

    /// Hand the resolved bar to the native toolkit for display.
    fn complete_attach(&mut self, bar: &MenuBar) -> MenuBarResult<()>;
}

/// Drives resolution when a menu bar becomes associated with a window.
///
/// The menu bar mode provider is injected so tests (and headless setups)
/// can substitute a fixed answer for the platform query; [MenuBarMode]
/// itself implements the provider trait.
///
/// [MenuBarMode]: crate::platform::MenuBarMode
pub struct AttachController<P: MenuBarModeProvider> {
    provider: P,
}

impl<P: MenuBarModeProvider> AttachController<P> {
    /// Create a controller with the given mode provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve `bar` against the host's owning frame, then finish the
    /// native attach.
    ///
    /// Invoked once per window. If the owning frame cannot be determined,
    /// filtering is skipped (every entry counts as used) and the native
    /// attach proceeds with the tree unchanged; a bar with no filters
    /// configured anywhere attaches exactly as the native toolkit would
    /// on its own. Only the native completion can fail.
    pub fn attach(&self, bar: &mut MenuBar, host: &mut dyn MenuBarHost) -> MenuBarResult<()> {
        let mode = self.provider.mode();
        let frame = host.frame();
        if frame.is_none() {
            debug!("menu bar attach without an owning frame; all entries kept");
        }
        resolve(bar, frame, mode);
        host.complete_attach(bar)
    }
}
