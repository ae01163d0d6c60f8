//! Visibility and enablement resolution.
//!
//! When a menu bar becomes associated with a window, every entry of the
//! tree that the window does not use has to be taken out of its way. How
//! that happens depends on the platform's menu bar model:
//!
//! - **Merged menu bar**: the entry is disabled in place. The physical
//!   tree is shared by every window, so removing the entry here would
//!   remove it for all of them; disabling keeps the slot for the windows
//!   that do use it.
//! - **Per-window menu bars**: the entry is removed from its parent. Each
//!   window owns its own clone of the tree, so removal affects nobody
//!   else.
//!
//! Entries the window does use are left untouched, including their
//! application-controlled enabled state, and their children are resolved
//! by the same rule.

use log::debug;

use crate::frame::UserFrame;
use crate::menu::tree::{Menu, MenuBar, MenuItem};
use crate::platform::MenuBarMode;

/// Resolve a menu bar for the window about to display it.
///
/// Walks the direct children of the bar and, recursively, the children of
/// every surviving entry, disabling (merged mode) or removing (per-window
/// mode) each entry that is not used by `frame`. A `None` frame leaves
/// the tree unchanged: no entry is filtered before a window context
/// exists.
///
/// In merged mode resolution is idempotent. In per-window mode it is
/// one-shot: a removed entry cannot come back, so each per-window tree
/// instance is expected to be resolved at most once, for the window that
/// owns it. Re-resolving the same per-window instance, or mutating the
/// tree while resolution is in progress, is a usage contract violation.
pub fn resolve(bar: &mut MenuBar, frame: Option<&dyn UserFrame>, mode: MenuBarMode) {
    let before = bar.menus.len();
    sweep(&mut bar.menus, frame, mode);
    debug!(
        "resolved menu bar for {}: {} of {} top-level menus kept",
        frame.map(|f| f.kind().to_string()).unwrap_or_else(|| "<no frame>".into()),
        bar.menus.len(),
        before,
    );
}

/// A tree level the sweep can act on uniformly.
trait Entry {
    fn used_by(&self, frame: Option<&dyn UserFrame>) -> bool;
    fn disable(&mut self);
    fn resolve_children(&mut self, frame: Option<&dyn UserFrame>, mode: MenuBarMode);
    fn label(&self) -> &str;
}

impl Entry for Menu {
    fn used_by(&self, frame: Option<&dyn UserFrame>) -> bool {
        self.frames.is_used_by(frame)
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn resolve_children(&mut self, frame: Option<&dyn UserFrame>, mode: MenuBarMode) {
        sweep(&mut self.items, frame, mode);
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entry for MenuItem {
    fn used_by(&self, frame: Option<&dyn UserFrame>) -> bool {
        self.frames.is_used_by(frame)
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn resolve_children(&mut self, frame: Option<&dyn UserFrame>, mode: MenuBarMode) {
        if let Some(submenu) = self.submenu.as_mut() {
            sweep(&mut submenu.items, frame, mode);
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Apply the resolution rule to one sequence of siblings.
///
/// Iterates backward so that in-place removal cannot shift an unvisited
/// sibling: every child is visited exactly once no matter how many of
/// them get removed. Children of an unused entry are not visited; a
/// disabled entry's descendants are moot and a removed entry's are gone.
fn sweep<T: Entry>(children: &mut Vec<T>, frame: Option<&dyn UserFrame>, mode: MenuBarMode) {
    for index in (0..children.len()).rev() {
        if children[index].used_by(frame) {
            children[index].resolve_children(frame, mode);
        } else if mode.is_merged() {
            debug!("disabling unused menu entry '{}'", children[index].label());
            children[index].disable();
        } else {
            debug!("removing unused menu entry '{}'", children[index].label());
            children.remove(index);
        }
    }
}
