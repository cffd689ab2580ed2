use std::collections::HashSet;

pub const REVEAL_SELECTORS: &str = ".section__title, .skill-card, .project-card, .roadmap-item, .about__content, .contact__content";
pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "active";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PROGRESS_CONTAINERS: [&str; 2] = [".skills", ".roadmap"];
pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";
pub const PROGRESS_ATTRIBUTE: &str = "data-progress";
pub const PROGRESS_THRESHOLD: f64 = 0.3;
pub const PROGRESS_DELAY_MS: u32 = 100;

/// Staggered `transition-delay` for the n-th revealed element, in tenths of a second.
pub fn transition_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}

/// Target width for a bar from its `data-progress` value.
pub fn bar_width(progress: Option<&str>) -> Option<String> {
    let value = progress?.trim().trim_end_matches('%').parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

/// Remembers which progress containers already animated.
#[derive(Debug, Default)]
pub struct ProgressGate {
    fired: HashSet<String>,
}

impl ProgressGate {
    /// True only for the first intersection of `container`.
    pub fn should_fire(&mut self, container: &str) -> bool {
        self.fired.insert(container.to_string())
    }

    #[cfg(test)]
    pub fn has_fired(&self, container: &str) -> bool {
        self.fired.contains(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_a_tenth_without_float_noise() {
        assert_eq!(transition_delay(0), "0s");
        assert_eq!(transition_delay(1), "0.1s");
        assert_eq!(transition_delay(3), "0.3s");
        assert_eq!(transition_delay(12), "1.2s");
    }

    #[test]
    fn bar_width_parses_and_clamps() {
        assert_eq!(bar_width(Some("85")).as_deref(), Some("85%"));
        assert_eq!(bar_width(Some(" 42.5% ")).as_deref(), Some("42.5%"));
        assert_eq!(bar_width(Some("140")).as_deref(), Some("100%"));
        assert_eq!(bar_width(Some("-3")).as_deref(), Some("0%"));
    }

    #[test]
    fn bar_width_rejects_missing_or_garbage() {
        assert_eq!(bar_width(None), None);
        assert_eq!(bar_width(Some("")), None);
        assert_eq!(bar_width(Some("lots")), None);
        assert_eq!(bar_width(Some("NaN")), None);
    }

    #[test]
    fn each_container_fires_exactly_once() {
        let mut gate = ProgressGate::default();
        assert!(gate.should_fire("skills"));
        assert!(!gate.should_fire("skills"));
        assert!(!gate.should_fire("skills"));
        assert!(gate.should_fire("roadmap"));
        assert!(gate.has_fired("skills"));
        assert!(gate.has_fired("roadmap"));
    }
}
