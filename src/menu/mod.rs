//! The shared menu hierarchy and its per-window resolution.
//!
//! An application composes one [MenuBar](tree::MenuBar) and reuses it for
//! all of its windows. The [resolver] decides, per attaching window, which
//! entries stay, get disabled or are removed; [attach] wires that decision
//! into the windowing layer's attach lifecycle.

pub mod attach;
pub mod resolver;
pub mod tree;

pub use attach::{AttachController, MenuBarHost};
pub use resolver::resolve;
pub use tree::{Menu, MenuBar, MenuItem};
