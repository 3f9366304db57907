//! Section lookup against the live document.

use shared::navigation::{Scrollable, SectionLocator};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Finds page sections with `document.getElementById`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSectionLocator;

pub struct DomSection(Element);

impl Scrollable for DomSection {
    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl SectionLocator for DomSectionLocator {
    type Section = DomSection;

    fn find_section(&self, id: &str) -> Option<DomSection> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)
            .map(DomSection)
    }
}
