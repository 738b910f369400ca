use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Named scroll targets on the page, in header order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    HowToUse,
    Faq,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Features, Section::HowToUse, Section::Faq];

    pub fn id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::HowToUse => "how-to-use",
            Section::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::HowToUse => "How to Use",
            Section::Faq => "FAQ",
        }
    }
}

/// Everything the landing page remembers for one page view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub menu_open: bool,
    /// Initialised but never changed by any action.
    pub active_tab: usize,
    pub revealed: bool,
    pub email: String,
}

pub enum LandingAction {
    ToggleMenu,
    Navigate(Section),
    Reveal,
    SetEmail(String),
    EmailSubmitted,
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LandingAction::ToggleMenu => next.menu_open = !next.menu_open,
            LandingAction::Navigate(section) => {
                debug!("Navigating to #{}", section.id());
                next.menu_open = false;
            }
            LandingAction::Reveal => {
                if self.revealed {
                    return self;
                }
                next.revealed = true;
            }
            LandingAction::SetEmail(value) => next.email = value,
            LandingAction::EmailSubmitted => next.email.clear(),
        }
        Rc::new(next)
    }
}
