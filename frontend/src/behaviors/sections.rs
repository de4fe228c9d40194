/// Section ids rendered on the page, in document order.
pub const SECTION_IDS: &[&str] = &["inicio", "nosotros", "servicios", "videos", "contacto"];

/// Visibility thresholds handed to the section observer: 0.0, 0.05, ..., 1.0
pub fn section_thresholds() -> Vec<f64> {
    (0..=20).map(|i| i as f64 / 20.0).collect()
}

/// Root margin that ignores the strip under the fixed navbar and the lower 60% of the viewport.
pub fn section_root_margin(navbar_height: f64) -> String {
    format!("-{}px 0px -60% 0px", navbar_height + 8.0)
}

/// Reads a CSS length like `72px`; anything unparsable counts as 0.
pub fn parse_css_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite())
        .unwrap_or(0.0)
}

/// Tracks the last visibility ratio the observer reported for each section.
///
/// Sections are kept in the order they were first seen, which is also the
/// tie-break order when two of them report the same ratio.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
    sections: Vec<(String, f64)>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section without changing its ratio if already known.
    pub fn observe(&mut self, id: &str) {
        if !self.sections.iter().any(|(known, _)| known == id) {
            self.sections.push((id.to_string(), 0.0));
        }
    }

    /// Records a single observer entry. Non-intersecting sections count as 0.
    pub fn record(&mut self, id: &str, ratio: f64, is_intersecting: bool) {
        let ratio = if is_intersecting { ratio.clamp(0.0, 1.0) } else { 0.0 };
        match self.sections.iter_mut().find(|(known, _)| known == id) {
            Some(entry) => entry.1 = ratio,
            None => self.sections.push((id.to_string(), ratio)),
        }
    }

    #[cfg(test)]
    pub fn ratio(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, ratio)| *ratio)
    }

    /// The most visible section, or `None` when nothing is in view.
    pub fn active(&self) -> Option<&str> {
        let mut max_ratio = 0.0;
        let mut active = None;
        for (id, ratio) in &self.sections {
            if *ratio > max_ratio {
                max_ratio = *ratio;
                active = Some(id.as_str());
            }
        }
        active
    }
}

/// Body class carrying the navbar color mode for the active section.
pub fn body_mode_class(section_id: &str) -> String {
    format!("navbar-{}", section_id)
}

/// Extracts the section id from an in-page anchor (`#contacto` -> `contacto`).
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn section_href(id: &str) -> String {
    format!("#{}", id)
}

/// Nav label for a section: its id with the first letter capitalized.
pub fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn link_is_active(href: &str, active_section: Option<&str>) -> bool {
    match (section_id_from_href(href), active_section) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

/// Scroll position that puts the top of a section just under the navbar.
pub fn smooth_scroll_target(section_offset_top: f64, navbar_height: f64, gap: f64) -> f64 {
    section_offset_top - navbar_height - gap
}
