use crate::menu::MenuState;
use crate::notification::{Notification, NotificationCenter, NotificationId, NotificationKind};
use crate::reveal::ProgressGate;
use crate::scroll::{self, AnchorTarget, HeaderFrame, ScrollTracker, SectionPosition};
use crate::theme::Theme;

/// What an in-page anchor click should do once default navigation is prevented.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorAction {
    ScrollToTop,
    /// `offset` is used when the target cannot be measured again after the
    /// settle delay.
    ScrollTo { offset: f64, menu_closed: bool },
    Missing(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub header: HeaderFrame,
    pub active_section: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EscapeAction {
    pub menu_closed: bool,
    pub dismissed: Vec<NotificationId>,
}

/// Everything the page remembers between events. One per page load.
#[derive(Debug)]
pub struct Session {
    theme: Theme,
    menu: MenuState,
    scroll: ScrollTracker,
    progress: ProgressGate,
    notifications: NotificationCenter,
}

impl Session {
    pub fn new(theme_attribute: Option<&str>) -> Self {
        Self {
            theme: Theme::from_attribute(theme_attribute),
            menu: MenuState::default(),
            scroll: ScrollTracker::default(),
            progress: ProgressGate::default(),
            notifications: NotificationCenter::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, starting from whatever the root attribute says now.
    pub fn toggle_theme(&mut self, theme_attribute: Option<&str>) -> Theme {
        self.theme = Theme::from_attribute(theme_attribute).toggled();
        self.theme
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu.toggle();
        self.menu
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu.close()
    }

    pub fn document_click(&mut self, inside_toggle: bool, inside_menu: bool) -> bool {
        self.menu.document_click(inside_toggle, inside_menu)
    }

    pub fn anchor_click(
        &mut self,
        target: &AnchorTarget,
        target_top: Option<f64>,
        header_height: Option<f64>,
    ) -> AnchorAction {
        match (target, target_top) {
            (AnchorTarget::Top, _) => AnchorAction::ScrollToTop,
            (AnchorTarget::Fragment(_), Some(top)) => AnchorAction::ScrollTo {
                offset: scroll::scroll_target_offset(top, header_height),
                menu_closed: self.menu.close(),
            },
            (AnchorTarget::Fragment(id), None) => AnchorAction::Missing(id.clone()),
        }
    }

    pub fn scroll_frame(
        &mut self,
        scroll_y: f64,
        header_height: Option<f64>,
        sections: &[SectionPosition],
    ) -> ScrollFrame {
        let header = self.scroll.frame(scroll_y);
        let active_section =
            scroll::active_section(scroll_y, header_height, sections).map(str::to_string);

        ScrollFrame {
            header,
            active_section,
        }
    }

    pub fn progress_intersection(&mut self, container: &str) -> bool {
        self.progress.should_fire(container)
    }

    pub fn notify(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now_ms: f64,
    ) -> Notification {
        self.notifications.push(kind, message, now_ms).clone()
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn expire_notifications(&mut self, now_ms: f64) -> Vec<NotificationId> {
        self.notifications.expire(now_ms)
    }

    #[cfg(test)]
    pub fn live_notifications(&self) -> &[Notification] {
        self.notifications.live()
    }

    pub fn escape(&mut self) -> EscapeAction {
        EscapeAction {
            menu_closed: self.menu.close(),
            dismissed: self.notifications.dismiss_all(),
        }
    }
}
