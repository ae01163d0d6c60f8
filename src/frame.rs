//! Window identity and menu membership filtering.
//!
//! Menus and menu items declare which window kinds ("user frames") actually
//! use them. At attach time that declaration decides whether an entry is
//! kept, disabled or removed for the attaching window. Window kinds are
//! named by explicit [FrameKind] tokens instead of runtime type inspection:
//! each window kind implements [UserFrame] and reports its own token plus
//! the tokens of its supertypes, so "is this window a `T`" becomes a set
//! lookup.

use std::fmt::{Display, Formatter};

use indexmap::IndexSet;

use crate::error::{MenuBarError, MenuBarResult};

/// An identifier for a window kind.
///
/// Consists of a namespace (typically the crate name) and the window kind
/// name, so different libraries can declare frames without colliding.
///
/// ```
/// use screenbar::FrameKind;
///
/// let editor = FrameKind::new("my-app", "EditorWindow").unwrap();
/// assert_eq!(editor.namespace(), "my-app");
/// assert_eq!(editor.name(), "EditorWindow");
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct FrameKind {
    namespace: String,
    name: String,
}

impl FrameKind {
    /// Create a new frame kind from a namespace and a window kind name.
    ///
    /// Both components must contain at least one non-whitespace character;
    /// a blank token is rejected with [MenuBarError::BlankFrameKind] so it
    /// can never reach a membership filter.
    pub fn new(namespace: impl ToString, name: impl ToString) -> MenuBarResult<Self> {
        let namespace = namespace.to_string();
        let name = name.to_string();
        if namespace.trim().is_empty() || name.trim().is_empty() {
            return Err(MenuBarError::BlankFrameKind { namespace, name });
        }
        Ok(Self { namespace, name })
    }

    /// Returns the namespace of the frame kind.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the window kind name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for FrameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// A window kind that menu entries can declare membership against.
///
/// Implemented by each window type of the application. A membership filter
/// registered for a frame's own kind or for any of its [ancestors](Self::ancestors)
/// matches the frame, which reproduces "this window is a `T` or a more
/// specific kind of `T`" without runtime type inspection.
pub trait UserFrame {
    /// The concrete kind token of this frame.
    fn kind(&self) -> FrameKind;

    /// Supertype tokens of this frame, if any.
    ///
    /// The default is a frame with no supertypes.
    fn ancestors(&self) -> Vec<FrameKind> {
        Vec::new()
    }
}

/// Per-entry set of user frame filters.
///
/// Every menu and menu item owns one of these. An empty filter set means
/// the entry is used by every window; registering kinds narrows the entry
/// to windows of those kinds (or subkinds). The set only ever grows, and
/// registration order is preserved for introspection.
#[derive(Debug, Clone, Default)]
pub struct FrameFilter {
    kinds: IndexSet<FrameKind>,
}

impl FrameFilter {
    /// Create an empty filter, used by every window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window kind that uses the owning entry.
    ///
    /// Duplicate registrations are absorbed. Call order does not matter,
    /// but all registrations must happen before the first window attaches
    /// a bar containing the owning entry.
    pub fn add_user_frame(&mut self, kind: FrameKind) {
        self.kinds.insert(kind);
    }

    /// Whether the owning entry is used by the given frame.
    ///
    /// Returns `true` when no kinds are registered (the entry belongs to
    /// every window), or when no frame is available yet (an entry is never
    /// filtered before a window context exists). Otherwise the frame's own
    /// kind and its ancestors are checked against the registered kinds.
    pub fn is_used_by(&self, frame: Option<&dyn UserFrame>) -> bool {
        if self.kinds.is_empty() {
            return true;
        }
        let Some(frame) = frame else {
            return true;
        };
        if self.kinds.contains(&frame.kind()) {
            return true;
        }
        frame
            .ancestors()
            .iter()
            .any(|ancestor| self.kinds.contains(ancestor))
    }

    /// Whether any kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Iterate over the registered kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FrameKind> {
        self.kinds.iter()
    }
}
