use crate::config::{ENTRANCE_DURATION_MS, ENTRANCE_OFFSET_PX, STAGGER_STEP_MS};

pub const ENTRANCE_KEYFRAMES: &str = "entrance-rise";

/// Timing of a one-shot "slide up and fade in" entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset_px: u32,
}

impl Entrance {
    /// A standalone block that starts animating immediately.
    pub fn block() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: ENTRANCE_DURATION_MS,
            offset_px: ENTRANCE_OFFSET_PX,
        }
    }

    /// The `index`-th item of a rendered list, started after the items before it.
    pub fn staggered(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay_ms: index.saturating_mul(STAGGER_STEP_MS),
            ..Self::block()
        }
    }

    /// Inline style for an element running this entrance. `both` keeps the
    /// element in its start frame while the delay elapses.
    pub fn style(&self) -> String {
        format!(
            "--entrance-offset: {}px; animation: {} {}ms ease-out {}ms both;",
            self.offset_px, ENTRANCE_KEYFRAMES, self.duration_ms, self.delay_ms
        )
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::block()
    }
}

pub fn keyframes_css() -> String {
    format!(
        r#"
        @keyframes {name} {{
            from {{ opacity: 0; transform: translateY(var(--entrance-offset, {offset}px)); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        @media (prefers-reduced-motion: reduce) {{
            .entrance {{ animation: none !important; }}
        }}
        "#,
        name = ENTRANCE_KEYFRAMES,
        offset = ENTRANCE_OFFSET_PX,
    )
}
