pub const HEADER_FALLBACK_HEIGHT: f64 = 70.0;
pub const ANCHOR_MARGIN: f64 = 20.0;
pub const ANCHOR_SETTLE_MS: u32 = 10;
pub const HEADER_HIDE_AFTER: f64 = 100.0;
pub const HEADER_SOLID_AFTER: f64 = 50.0;
pub const ACTIVE_NAV_LOOKAHEAD: f64 = 150.0;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const HEADER_BLUR: &str = "blur(20px)";
pub const NAV_ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Fragment(String),
}

impl AnchorTarget {
    /// Returns `None` for hrefs that are not in-page anchors.
    pub fn parse(href: &str) -> Option<Self> {
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            Some(Self::Top)
        } else {
            Some(Self::Fragment(fragment.to_string()))
        }
    }
}

/// Header height for active-nav: a collapsed (0px) header counts as missing.
pub fn effective_header_height(header_height: Option<f64>) -> f64 {
    header_height
        .filter(|height| height.is_finite() && *height > 0.0)
        .unwrap_or(HEADER_FALLBACK_HEIGHT)
}

/// Only an absent header falls back to the default height here; a present
/// header that measures 0px scrolls flush with the margin.
pub fn scroll_target_offset(element_top: f64, header_height: Option<f64>) -> f64 {
    let header_height = header_height
        .filter(|height| height.is_finite())
        .unwrap_or(HEADER_FALLBACK_HEIGHT);
    (element_top - header_height - ANCHOR_MARGIN).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderBackground {
    Solid,
    Translucent,
}

impl HeaderBackground {
    pub fn background(self) -> &'static str {
        match self {
            Self::Solid => "var(--color-surface)",
            Self::Translucent => "rgba(var(--color-surface), 0.8)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        HEADER_BLUR
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderFrame {
    pub hidden: bool,
    pub background: HeaderBackground,
}

impl HeaderFrame {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    #[cfg(test)]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    pub fn frame(&mut self, scroll_y: f64) -> HeaderFrame {
        let hidden = scroll_y > self.last_y && scroll_y > HEADER_HIDE_AFTER;
        let background = if scroll_y > HEADER_SOLID_AFTER {
            HeaderBackground::Solid
        } else {
            HeaderBackground::Translucent
        };
        self.last_y = scroll_y;

        HeaderFrame { hidden, background }
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_SPEED)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    pub top: f64,
}

/// Last section in document order whose top, pulled up by the header and the
/// lookahead, is at or above the scroll offset.
pub fn active_section(
    scroll_y: f64,
    header_height: Option<f64>,
    sections: &[SectionPosition],
) -> Option<&str> {
    let header_height = effective_header_height(header_height);
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - header_height - ACTIVE_NAV_LOOKAHEAD)
        .map(|section| section.id.as_str())
}

pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
    match (href.and_then(|value| value.strip_prefix('#')), current) {
        (Some(fragment), Some(current)) => fragment == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(tops: &[(&str, f64)]) -> Vec<SectionPosition> {
        tops.iter()
            .map(|(id, top)| SectionPosition {
                id: id.to_string(),
                top: *top,
            })
            .collect()
    }

    #[test]
    fn anchor_parse_distinguishes_top_and_fragment() {
        assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Top));
        assert_eq!(
            AnchorTarget::parse("#about"),
            Some(AnchorTarget::Fragment("about".to_string()))
        );
        assert_eq!(AnchorTarget::parse("/resume.pdf"), None);
    }

    #[test]
    fn target_offset_subtracts_header_and_margin() {
        assert_eq!(scroll_target_offset(800.0, Some(64.0)), 716.0);
        assert_eq!(scroll_target_offset(800.0, None), 710.0);
    }

    #[test]
    fn target_offset_clamps_to_zero_at_page_top() {
        assert_eq!(scroll_target_offset(0.0, Some(70.0)), 0.0);
        assert_eq!(scroll_target_offset(50.0, None), 0.0);
    }

    #[test]
    fn collapsed_header_is_not_replaced_by_fallback_when_scrolling_to_anchor() {
        assert_eq!(scroll_target_offset(500.0, Some(0.0)), 480.0);
        assert_eq!(scroll_target_offset(500.0, None), 410.0);
    }

    #[test]
    fn collapsed_header_uses_fallback_for_active_section() {
        let page = sections(&[("about", 220.0)]);
        // 220 - 70 - 150 = 0, so a 0px header behaves like the 70px fallback.
        assert_eq!(active_section(0.0, Some(0.0), &page), Some("about"));
        assert_eq!(active_section(0.0, Some(1.0), &page), None);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.frame(80.0).hidden);
        assert!(tracker.frame(150.0).hidden);
        assert!(tracker.frame(300.0).hidden);
        assert!(!tracker.frame(250.0).hidden);
        assert!(!tracker.frame(250.0).hidden);
        assert_eq!(tracker.last_y(), 250.0);
    }

    #[test]
    fn header_background_switches_at_fifty_pixels_with_same_blur() {
        let mut tracker = ScrollTracker::default();
        let top = tracker.frame(50.0);
        let scrolled = tracker.frame(51.0);
        assert_eq!(top.background, HeaderBackground::Translucent);
        assert_eq!(scrolled.background, HeaderBackground::Solid);
        assert_eq!(
            top.background.backdrop_filter(),
            scrolled.background.backdrop_filter()
        );
        assert_ne!(top.background.background(), scrolled.background.background());
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(300.0), "translateY(150px)");
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
    }

    #[test]
    fn active_section_picks_last_qualifying_section() {
        let page = sections(&[("hero", 0.0), ("about", 600.0), ("skills", 1200.0)]);
        // skills qualifies from 1200 - 70 - 150 = 980.
        assert_eq!(active_section(1000.0, Some(70.0), &page), Some("skills"));
        assert_eq!(active_section(900.0, Some(70.0), &page), Some("about"));
        assert_eq!(active_section(0.0, None, &page), Some("hero"));
    }

    #[test]
    fn no_section_qualifies_above_the_first() {
        let page = sections(&[("about", 900.0)]);
        assert_eq!(active_section(0.0, Some(70.0), &page), None);
        assert!(!is_active_link(Some("#about"), None));
    }

    #[test]
    fn active_link_matches_fragment_exactly() {
        assert!(is_active_link(Some("#about"), Some("about")));
        assert!(!is_active_link(Some("#about-me"), Some("about")));
        assert!(!is_active_link(Some("about"), Some("about")));
        assert!(!is_active_link(None, Some("about")));
    }
}
