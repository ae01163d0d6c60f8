use screenbar::{
    AttachController, FrameKind, Menu, MenuBar, MenuBarHost, MenuBarMode, MenuBarResult, MenuItem,
    UserFrame,
};

struct ProjectFrame;

impl UserFrame for ProjectFrame {
    fn kind(&self) -> FrameKind {
        FrameKind::new("app", "Project").unwrap()
    }
}

struct ScratchFrame;

impl UserFrame for ScratchFrame {
    fn kind(&self) -> FrameKind {
        FrameKind::new("app", "Scratch").unwrap()
    }
}

// A project window specialization; membership registered for Project
// matches it through its lineage.
struct RemoteProjectFrame;

impl UserFrame for RemoteProjectFrame {
    fn kind(&self) -> FrameKind {
        FrameKind::new("app", "RemoteProject").unwrap()
    }

    fn ancestors(&self) -> Vec<FrameKind> {
        vec![FrameKind::new("app", "Project").unwrap()]
    }
}

fn project_kind() -> FrameKind {
    FrameKind::new("app", "Project").unwrap()
}

/// A bar with a "Foo" menu for everyone and a "Bar" menu for project
/// windows only.
fn shared_bar() -> MenuBar {
    let foo = Menu::new("Foo").with_item(MenuItem::new("Hello"));
    let mut bar_menu = Menu::new("Bar").with_item(MenuItem::new("Bye Bye"));
    bar_menu.add_user_frame(project_kind());
    MenuBar::new().with_menu(foo).with_menu(bar_menu)
}

#[test]
fn merged_mode_keeps_used_menus_enabled() {
    let mut bar = shared_bar();
    screenbar::resolve(&mut bar, Some(&ProjectFrame), MenuBarMode::Merged);

    assert_eq!(bar.len(), 2);
    assert!(bar.find_menu("Foo").unwrap().is_enabled());
    assert!(bar.find_menu("Bar").unwrap().is_enabled());
}

#[test]
fn merged_mode_disables_but_keeps_unused_menus() {
    let mut bar = shared_bar();
    screenbar::resolve(&mut bar, Some(&ScratchFrame), MenuBarMode::Merged);

    assert_eq!(bar.len(), 2);
    assert!(bar.find_menu("Foo").unwrap().is_enabled());
    let unused = bar.find_menu("Bar").unwrap();
    assert!(!unused.is_enabled());
    // The slot is preserved at its prior position for the windows that
    // do use the menu.
    assert_eq!(bar.menus[1].title, "Bar");
}

#[test]
fn per_frame_mode_removes_unused_menus() {
    let mut bar = shared_bar();
    screenbar::resolve(&mut bar, Some(&ScratchFrame), MenuBarMode::PerFrame);

    assert_eq!(bar.len(), 1);
    assert!(bar.find_menu("Bar").is_none());
    assert!(bar.find_menu("Foo").unwrap().is_enabled());
}

#[test]
fn subkind_windows_count_as_users() {
    let mut bar = shared_bar();
    screenbar::resolve(&mut bar, Some(&RemoteProjectFrame), MenuBarMode::PerFrame);

    assert_eq!(bar.len(), 2);
    assert!(bar.find_menu("Bar").unwrap().is_enabled());
}

#[test]
fn each_window_resolves_its_own_clone() {
    let bar = shared_bar();

    let mut project_copy = bar.clone();
    screenbar::resolve(&mut project_copy, Some(&ProjectFrame), MenuBarMode::PerFrame);
    assert_eq!(project_copy.len(), 2);

    let mut scratch_copy = bar.clone();
    screenbar::resolve(&mut scratch_copy, Some(&ScratchFrame), MenuBarMode::PerFrame);
    assert_eq!(scratch_copy.len(), 1);

    // The composition tree itself is untouched.
    assert_eq!(bar.len(), 2);
}

struct NativeBar {
    frame: Option<Box<dyn UserFrame>>,
    attached_titles: Vec<String>,
}

impl NativeBar {
    fn new(frame: Option<Box<dyn UserFrame>>) -> Self {
        Self {
            frame,
            attached_titles: Vec::new(),
        }
    }
}

impl MenuBarHost for NativeBar {
    fn frame(&self) -> Option<&dyn UserFrame> {
        self.frame.as_deref()
    }

    fn complete_attach(&mut self, bar: &MenuBar) -> MenuBarResult<()> {
        self.attached_titles = bar.menus.iter().map(|menu| menu.title.clone()).collect();
        Ok(())
    }
}

#[test]
fn attach_controller_drives_the_full_lifecycle() {
    let controller = AttachController::new(MenuBarMode::PerFrame);

    let mut scratch_window = NativeBar::new(Some(Box::new(ScratchFrame)));
    let mut bar = shared_bar();
    controller.attach(&mut bar, &mut scratch_window).unwrap();
    assert_eq!(scratch_window.attached_titles, ["Foo"]);

    let mut project_window = NativeBar::new(Some(Box::new(ProjectFrame)));
    let mut bar = shared_bar();
    controller.attach(&mut bar, &mut project_window).unwrap();
    assert_eq!(project_window.attached_titles, ["Foo", "Bar"]);
}

#[test]
fn attach_without_frame_context_falls_back_to_unfiltered() {
    let controller = AttachController::new(MenuBarMode::Merged);

    let mut chromeless = NativeBar::new(None);
    let mut bar = shared_bar();
    controller.attach(&mut bar, &mut chromeless).unwrap();

    assert_eq!(chromeless.attached_titles, ["Foo", "Bar"]);
    assert!(bar.menus.iter().all(|menu| menu.is_enabled()));
}
