use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::state::Section;

/// DOM handles of the scroll targets.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    pub features: NodeRef,
    pub how_to_use: NodeRef,
    pub faq: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, section: Section) -> &NodeRef {
        match section {
            Section::Features => &self.features,
            Section::HowToUse => &self.how_to_use,
            Section::Faq => &self.faq,
        }
    }
}

/// Smoothly scrolls so the section's top meets the viewport top.
/// Does nothing if the section isn't mounted.
pub fn scroll_to_section(refs: &SectionRefs, section: Section) {
    match refs.get(section).cast::<Element>() {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("#{} is not mounted, skipping scroll", section.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_its_own_ref() {
        let refs = SectionRefs::default();
        for a in Section::ALL {
            for b in Section::ALL {
                let same = std::ptr::eq(refs.get(a), refs.get(b));
                assert_eq!(same, a == b);
            }
        }
    }

    #[test]
    fn unmounted_section_is_a_no_op() {
        let refs = SectionRefs::default();
        assert!(refs.get(Section::Faq).get().is_none());
        scroll_to_section(&refs, Section::Faq);
    }
}
