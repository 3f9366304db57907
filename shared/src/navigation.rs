//! # Navigation Controller
//!
//! Mobile menu state and smooth scrolling between the page's named sections.
//!
//! The controller never touches the view directly. It asks a
//! [`SectionLocator`] for the target and tells the returned [`Scrollable`] to
//! bring itself into view, which keeps this module testable without a DOM.

use std::fmt;

/// A region of the page that can smooth-scroll itself into view.
pub trait Scrollable {
    fn scroll_into_view(&self);
}

/// Finds sections of the current view by anchor id.
pub trait SectionLocator {
    type Section: Scrollable;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
}

/// The anchors the page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Products,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Products, Section::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Products => "products",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a [`NavigationController::scroll_to`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    /// No section answers to the id. Nothing scrolled, nothing reported to the user.
    AnchorNotFound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationController {
    menu_open: bool,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Smooth-scroll to `section_id` if the view has it. The mobile menu is
    /// closed either way.
    pub fn scroll_to<L: SectionLocator>(&mut self, locator: &L, section_id: &str) -> ScrollOutcome {
        self.menu_open = false;

        match locator.find_section(section_id) {
            Some(section) => {
                section.scroll_into_view();
                ScrollOutcome::Scrolled
            }
            None => {
                log::debug!("No section with id '{section_id}', skipping scroll");
                ScrollOutcome::AnchorNotFound
            }
        }
    }

    pub fn scroll_to_section<L: SectionLocator>(&mut self, locator: &L, section: Section) -> ScrollOutcome {
        self.scroll_to(locator, section.id())
    }

    /// Any offering card leads to the contact form; there is no detail view.
    pub fn on_offering_activated<L: SectionLocator>(&mut self, locator: &L) -> ScrollOutcome {
        self.scroll_to_section(locator, Section::Contact)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fake view: a fixed set of anchors and a log of scroll calls.
    #[derive(Default)]
    pub(crate) struct FakeView {
        pub anchors: Vec<&'static str>,
        pub scrolled: Rc<RefCell<Vec<String>>>,
    }

    pub(crate) struct FakeSection {
        id: String,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl Scrollable for FakeSection {
        fn scroll_into_view(&self) {
            self.scrolled.borrow_mut().push(self.id.clone());
        }
    }

    impl SectionLocator for FakeView {
        type Section = FakeSection;

        fn find_section(&self, id: &str) -> Option<FakeSection> {
            self.anchors.contains(&id).then(|| FakeSection {
                id: id.to_string(),
                scrolled: Rc::clone(&self.scrolled),
            })
        }
    }

    pub(crate) fn page() -> FakeView {
        FakeView {
            anchors: Section::ALL.iter().map(Section::id).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scroll_to_existing_closes_menu() {
        let view = page();
        for initially_open in [true, false] {
            let mut nav = NavigationController::new();
            if initially_open {
                nav.toggle_menu();
            }
            assert_eq!(nav.scroll_to(&view, "contact"), ScrollOutcome::Scrolled);
            assert!(!nav.is_menu_open());
        }
        assert_eq!(*view.scrolled.borrow(), ["contact", "contact"]);
    }

    #[test]
    fn test_scroll_to_missing_is_noop() {
        let view = page();
        let mut nav = NavigationController::new();
        nav.toggle_menu();

        assert_eq!(nav.scroll_to(&view, "nonexistent"), ScrollOutcome::AnchorNotFound);
        assert!(view.scrolled.borrow().is_empty());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavigationController::new();
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_offering_activation_targets_contact() {
        let view = page();
        let mut nav = NavigationController::new();
        nav.on_offering_activated(&view);
        nav.scroll_to_section(&view, Section::Products);
        assert_eq!(*view.scrolled.borrow(), ["contact", "products"]);
    }
}
