use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tokio::sync::watch;

/// System color preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Scheme for a `prefers-color-scheme: dark` match result
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Light => Palette::LIGHT,
            ColorScheme::Dark => Palette::DARK,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "l" => Ok(ColorScheme::Light),
            "dark" | "d" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme: {}", other)),
        }
    }
}

/// Colors of the search widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub text: &'static str,
    pub text_muted: &'static str,
    pub panel: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub shadow: &'static str,
    /// Background of the "selected school" card
    pub selected_panel: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        text: "#111827",
        text_muted: "#6B7280",
        panel: "#FFFFFF",
        border: "#D1D5DB",
        hover: "#F3F4F6",
        shadow: "0 6px 20px rgba(0,0,0,0.25)",
        selected_panel: "#F9FAFB",
    };

    pub const DARK: Palette = Palette {
        text: "#E5E7EB",
        text_muted: "#9CA3AF",
        panel: "#0E1116",
        border: "#374151",
        hover: "#111827",
        shadow: "0 6px 20px rgba(0,0,0,0.25)",
        selected_panel: "#0B1220",
    };
}

/// Current color scheme, handed to the rendering layer at startup.
///
/// The host reports preference changes through [`ThemeWatcher::set_scheme`];
/// renderers hold a receiver from [`ThemeWatcher::subscribe`].
#[derive(Debug)]
pub struct ThemeWatcher {
    tx: watch::Sender<ColorScheme>,
}

impl ThemeWatcher {
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn scheme(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    pub fn palette(&self) -> Palette {
        self.scheme().palette()
    }

    /// Record a new system preference; returns true if it changed
    pub fn set_scheme(&self, scheme: ColorScheme) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == scheme {
                false
            } else {
                tracing::debug!("Color scheme changed: {:?} -> {:?}", current, scheme);
                *current = scheme;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.tx.subscribe()
    }
}

impl Default for ThemeWatcher {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
