pub const SKILL_CARD_SELECTOR: &str = ".skill-card";
pub const SKILL_ICON_SELECTOR: &str = ".skill-card__icon";
pub const SKILL_ICON_HOVER: &str = "scale(1.2) rotate(10deg)";
pub const SKILL_ICON_REST: &str = "scale(1) rotate(0deg)";

pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
const TILT_DAMPING: f64 = 10.0;

pub const BUTTON_SELECTOR: &str = ".btn";
pub const RIPPLE_LIFETIME_MS: u32 = 600;
const RIPPLE_SIZE: f64 = 20.0;

/// A card's box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn local_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer below center tips the card back; pointer right of center turns it right.
    pub fn from_pointer(rect: &CardRect, client_x: f64, client_y: f64) -> Self {
        let (x, y) = rect.local_point(client_x, client_y);
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / TILT_DAMPING,
            rotate_y: (center_x - x) / TILT_DAMPING,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn ripple_style(rect: &CardRect, client_x: f64, client_y: f64) -> String {
    let (x, y) = rect.local_point(client_x, client_y);
    let half = RIPPLE_SIZE / 2.0;
    format!(
        "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
         transform: scale(0); animation: ripple 0.6s linear; left: {x}px; top: {y}px; \
         width: {RIPPLE_SIZE}px; height: {RIPPLE_SIZE}px; margin-left: -{half}px; \
         margin-top: -{half}px; pointer-events: none;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardRect = CardRect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn pointer_at_center_has_no_tilt() {
        let tilt = Tilt::from_pointer(&CARD, 250.0, 300.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn tilt_swaps_axes_and_damps_by_ten() {
        // top-left corner: 150px left of center, 100px above
        let tilt = Tilt::from_pointer(&CARD, 100.0, 200.0);
        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.rotate_y, 15.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-10deg) rotateY(15deg) translateY(-8px)"
        );
    }

    #[test]
    fn ripple_is_centered_on_click_point() {
        let style = ripple_style(&CARD, 130.0, 215.0);
        assert!(style.contains("left: 30px; top: 15px;"));
        assert!(style.contains("width: 20px; height: 20px;"));
        assert!(style.contains("margin-left: -10px; margin-top: -10px;"));
        assert!(style.contains("animation: ripple 0.6s linear"));
    }
}
