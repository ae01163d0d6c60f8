//! Menu composition tree: bar, menus and items.
//!
//! The tree is plain data. Application code builds it once at startup,
//! registers user frames on the entries that are not meant for every
//! window, and hands it to the attach logic. Insertion order is display
//! order. Enabled and checked flags are under application control; the
//! resolver only ever clears `enabled` on entries the attaching window
//! does not use.

use std::sync::Arc;

use crate::frame::{FrameFilter, FrameKind};

/// The root of a menu hierarchy shared by every window of an application.
///
/// The bar itself is not filterable; only its menus and their items carry
/// membership filters. Cloning the bar produces a structurally identical
/// tree with independent state, which is how per-window menu bars get
/// their own instance.
#[derive(Clone, Default)]
pub struct MenuBar {
    /// The menus of the bar, in display order.
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// Create an empty menu bar.
    pub fn new() -> Self {
        Self { menus: Vec::new() }
    }

    /// Add a menu to the end of the bar.
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    /// Append a menu to the bar.
    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    /// Remove and return the menu at the given position.
    pub fn remove_menu(&mut self, index: usize) -> Menu {
        self.menus.remove(index)
    }

    /// Find a menu by title.
    pub fn find_menu(&self, title: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.title == title)
    }

    /// Find a menu by title (mutable).
    pub fn find_menu_mut(&mut self, title: &str) -> Option<&mut Menu> {
        self.menus.iter_mut().find(|menu| menu.title == title)
    }

    /// The number of menus in the bar.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Whether the bar has no menus.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// A titled menu holding an ordered sequence of items.
#[derive(Clone)]
pub struct Menu {
    /// Display title of the menu.
    pub title: String,
    /// Whether the menu is enabled/clickable.
    pub enabled: bool,
    /// The window kinds that use this menu. Empty means every window.
    pub frames: FrameFilter,
    /// The items of the menu, in display order.
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Create an empty, enabled menu with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            enabled: true,
            frames: FrameFilter::new(),
            items: Vec::new(),
        }
    }

    /// Add an item to the end of the menu.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append an item to the menu.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Insert an item at the given position.
    pub fn insert_item(&mut self, index: usize, item: MenuItem) {
        self.items.insert(index, item);
    }

    /// Remove and return the item at the given position.
    pub fn remove_item(&mut self, index: usize) -> MenuItem {
        self.items.remove(index)
    }

    /// Find an item by label.
    pub fn find_item(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.label == label)
    }

    /// Find an item by label (mutable).
    pub fn find_item_mut(&mut self, label: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|item| item.label == label)
    }

    /// Register a window kind that uses this menu.
    pub fn add_user_frame(&mut self, kind: FrameKind) {
        self.frames.add_user_frame(kind);
    }

    /// Set the enabled state of the menu.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the menu is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// A single entry of a menu.
///
/// Items can carry a keyboard shortcut, a checked state for toggles, an
/// action callback and a submenu. Like menus, items declare the window
/// kinds that use them via [add_user_frame](Self::add_user_frame).
#[derive(Clone)]
pub struct MenuItem {
    /// Display label for the menu item.
    pub label: String,
    /// Optional keyboard shortcut text (e.g., "Ctrl+N").
    pub shortcut: Option<String>,
    /// Whether the menu item is enabled/clickable.
    pub enabled: bool,
    /// Whether the menu item is checked (for toggle items).
    pub checked: bool,
    /// The window kinds that use this item. Empty means every window.
    pub frames: FrameFilter,
    /// Submenu opened by this item, if any.
    pub submenu: Option<Menu>,
    /// Callback function to execute when the item is activated.
    pub action: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl MenuItem {
    /// Create a new enabled item with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shortcut: None,
            enabled: true,
            checked: false,
            frames: FrameFilter::new(),
            submenu: None,
            action: None,
        }
    }

    /// Create a separator item.
    pub fn separator() -> Self {
        Self {
            label: "---".to_string(),
            shortcut: None,
            enabled: false,
            checked: false,
            frames: FrameFilter::new(),
            submenu: None,
            action: None,
        }
    }

    /// Check if this is a separator.
    pub fn is_separator(&self) -> bool {
        self.label.trim() == "---"
    }

    /// Set the keyboard shortcut.
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Set enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the submenu.
    pub fn with_submenu(mut self, submenu: Menu) -> Self {
        self.submenu = Some(submenu);
        self
    }

    /// Set the action callback.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Register a window kind that uses this item.
    pub fn add_user_frame(&mut self, kind: FrameKind) {
        self.frames.add_user_frame(kind);
    }

    /// Check if this item has a submenu.
    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    /// Run the item's action callback.
    ///
    /// Returns `true` if an action ran. Disabled items and separators do
    /// not fire, and neither do items without a callback.
    pub fn activate(&self) -> bool {
        if !self.enabled || self.is_separator() {
            return false;
        }
        match &self.action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}
