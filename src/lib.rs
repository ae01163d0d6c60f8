#![warn(missing_docs)]

//! Frame-aware menu bars: one menu hierarchy shared across windows.
//!
//! Some platforms render a single menu bar at the top of the screen, shared
//! visually by all open windows; others give every window its own bar. This
//! crate lets an application compose one logical menu hierarchy and reuse it
//! for all of its windows, deciding per window which entries are shown,
//! disabled or dropped.
//!
//! The deciding concept is the *user frame*: a window kind that a menu or
//! menu item declares itself relevant to. Entries that declare no user
//! frames belong to every window. When a bar attaches to a window, each
//! entry that is not used by that window is either disabled in place (merged
//! menu bar, so the slot stays for the windows that do use it) or removed
//! outright (per-window bars, where every window owns its own copy of the
//! tree).
//!
//! ```
//! use screenbar::{FrameKind, Menu, MenuBar, MenuItem};
//!
//! let editor = FrameKind::new("my-app", "EditorWindow").unwrap();
//!
//! let mut file = Menu::new("File");
//! file.add_item(MenuItem::new("Open...").with_shortcut("Ctrl+O"));
//!
//! // Only editor windows get the Tools menu.
//! let mut tools = Menu::new("Tools");
//! tools.add_user_frame(editor);
//!
//! let bar = MenuBar::new().with_menu(file).with_menu(tools);
//! # assert_eq!(bar.len(), 2);
//! ```
//!
//! Menus and items keep independent state per displayed instance; there is
//! no mirroring of enabled or checked flags between windows.

/// Contains window identity and membership filtering.
pub mod frame;

/// Contains the error types of the crate.
pub mod error;

/// Contains the menu composition tree, its resolution and attach logic.
pub mod menu;

/// Contains the menu bar presentation mode and its detection.
pub mod platform;

pub use error::{MenuBarError, MenuBarResult};
pub use frame::{FrameFilter, FrameKind, UserFrame};
pub use menu::attach::{AttachController, MenuBarHost};
pub use menu::resolver::resolve;
pub use menu::tree::{Menu, MenuBar, MenuItem};
pub use platform::{MenuBarMode, MenuBarModeProvider, SystemMenuBarMode};
