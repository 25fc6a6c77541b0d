//! Visual-mode type shared by the theme controller and the renderer.
//!
//! Kept free of `web_sys` so host-side tests can include this file
//! directly; the DOM glue in `src/theme.rs` owns the document side.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Strict parse of a stored value; anything but the two literal
    /// strings counts as "no explicit choice".
    pub fn parse(value: &str) -> Option<ThemeMode> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn opposite(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                bg_top: "#0b1120",
                bg_bottom: "#16213a",
                grid: "rgba(148, 163, 184, 0.06)",
                particle_rgb: [148, 180, 255],
            },
            ThemeMode::Light => Palette {
                bg_top: "#f4f6fb",
                bg_bottom: "#dde5f2",
                grid: "rgba(71, 85, 105, 0.08)",
                particle_rgb: [71, 98, 152],
            },
        }
    }
}

/// Colors the background renderer needs for one visual mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg_top: &'static str,
    pub bg_bottom: &'static str,
    pub grid: &'static str,
    pub particle_rgb: [u8; 3],
}
