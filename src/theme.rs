pub const THEME_ATTRIBUTE: &str = "data-color-scheme";
pub const THEME_SPIN_TRANSFORM: &str = "rotate(360deg)";
pub const THEME_SPIN_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Reads the root attribute. A missing or empty attribute is light; any
    /// other value than `light` is treated as dark, so it toggles to light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.filter(|value| !value.is_empty()) {
            None | Some("light") => Self::Light,
            Some(_) => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}
