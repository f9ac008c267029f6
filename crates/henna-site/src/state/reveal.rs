//! One-shot reveal latches for scroll-triggered entrance effects.
//!
//! The webview reports a section id the first time that section intersects
//! the viewport. Each latch flips once and never resets.

use crate::content::NAV_ITEMS;

/// Page sections that animate in on first intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Gallery,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Gallery,
        Section::Contact,
    ];

    /// DOM id, matching the navigation anchor.
    pub fn id(&self) -> &'static str {
        NAV_ITEMS[self.index()].anchor
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-section latches, all unset at page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealLatches {
    revealed: [bool; Section::ALL.len()],
}

impl RevealLatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the latch for `section`. Returns whether it was newly set.
    pub fn reveal(&mut self, section: Section) -> bool {
        let slot = &mut self.revealed[section.index()];
        let newly = !*slot;
        *slot = true;
        newly
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

/// Minimum visible fraction before a section counts as intersecting.
pub const INTERSECTION_THRESHOLD: f32 = 0.15;

/// Prefix of the report sent for a section id absent from the DOM.
const MISSING_PREFIX: &str = "missing:";

/// A message sent back by the observer script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverReport {
    /// The section crossed the intersection threshold.
    Intersected(Section),
    /// The section's element did not exist when observation started.
    Missing(Section),
}

impl ObserverReport {
    /// Parses a raw message; unknown section ids yield `None`.
    pub fn parse(message: &str) -> Option<Self> {
        match message.strip_prefix(MISSING_PREFIX) {
            Some(id) => Section::from_id(id).map(ObserverReport::Missing),
            None => Section::from_id(message).map(ObserverReport::Intersected),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            ObserverReport::Intersected(section) | ObserverReport::Missing(section) => *section,
        }
    }
}

/// Builds the script that watches every section and sends each id back
/// through `dioxus.send` exactly once.
///
/// Observation starts on the next animation frame so the sections rendered
/// alongside the effect are in the DOM. A section that still cannot be found
/// is reported as missing instead of being skipped.
pub fn observer_script() -> String {
    let ids = Section::ALL
        .iter()
        .map(|section| format!("\"{}\"", section.id()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                if (entry.isIntersecting) {{
                    observer.unobserve(entry.target);
                    dioxus.send(entry.target.id);
                }}
            }}
        }}, {{ threshold: {threshold} }});
        requestAnimationFrame(() => {{
            for (const id of [{ids}]) {{
                const el = document.getElementById(id);
                if (el) {{
                    observer.observe(el);
                }} else {{
                    dioxus.send("{missing}" + id);
                }}
            }}
        }});
        "#,
        threshold = INTERSECTION_THRESHOLD,
        missing = MISSING_PREFIX,
    )
}
