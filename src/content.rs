//! Static copy rendered by the landing page. Order in each slice is display order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Layers,
    Inbox,
    Download,
    ArrowRight,
    Menu,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HowToUseStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Zap,
        title: "Quick Search",
        description: "Find any tab instantly with our powerful search functionality.",
    },
    Feature {
        icon: Icon::Layers,
        title: "Tab Groups",
        description: "Organize your tabs into custom groups for better management.",
    },
    Feature {
        icon: Icon::Inbox,
        title: "Tab Archive",
        description: "Save and restore your tab sessions with ease.",
    },
];

pub const HOW_TO_USE_STEPS: &[HowToUseStep] = &[
    HowToUseStep {
        title: "Download",
        description: "Download the Me-Tabs zip file from our website.",
    },
    HowToUseStep {
        title: "Unzip & Load",
        description: "Unzip the file and load it as an unpacked extension in Chrome. To load the extension, go to chrome://extensions/ in Chrome, enable Developer mode, and click Load unpacked. Then, select the unzip folder, then the extension will appear in your toolbar.",
    },
    HowToUseStep {
        title: "Start Using",
        description: "Click on the Me-Tabs icon in your browser to start managing your tabs!",
    },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "Is Me-Tabs free to use?",
        answer: "Yes, Me-Tabs is completely free to download and use.",
    },
    FaqItem {
        question: "Can I sync my tabs across devices?",
        answer: "Currently, Me-Tabs works on a per-device basis. We're working on sync functionality for a future update.",
    },
    FaqItem {
        question: "Is Me-Tabs available for other browsers?",
        answer: "At the moment, Me-Tabs is only available for Google Chrome. We plan to support other browsers in the future.",
    },
    FaqItem {
        question: "How do I report a bug or suggest a feature?",
        answer: "You can reach out to our support team via email or submit an issue on our GitHub repository.",
    },
];

/// Steps paired with the 1-based number shown in their badge.
pub fn numbered_steps() -> impl Iterator<Item = (usize, &'static HowToUseStep)> {
    HOW_TO_USE_STEPS.iter().enumerate().map(|(i, step)| (i + 1, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_text() -> Vec<&'static str> {
        let mut text = Vec::new();
        for f in FEATURES {
            text.push(f.title);
            text.push(f.description);
        }
        for (_, s) in numbered_steps() {
            text.push(s.title);
            text.push(s.description);
        }
        for q in FAQ_ITEMS {
            text.push(q.question);
            text.push(q.answer);
        }
        text
    }

    #[test]
    fn collections_have_expected_sizes() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(HOW_TO_USE_STEPS.len(), 3);
        assert_eq!(FAQ_ITEMS.len(), 4);
    }

    #[test]
    fn steps_keep_install_order() {
        let titles: Vec<_> = numbered_steps().map(|(n, s)| (n, s.title)).collect();
        assert_eq!(
            titles,
            vec![(1, "Download"), (2, "Unzip & Load"), (3, "Start Using")]
        );
    }

    #[test]
    fn feature_icons_match_titles() {
        let icons: Vec<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(icons, vec![Icon::Zap, Icon::Layers, Icon::Inbox]);
    }

    #[test]
    fn rendering_twice_yields_identical_text() {
        assert_eq!(visible_text(), visible_text());
    }
}
