//! Environment themes: named color bundles selected as a unit.

use crate::surface::Rgba;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Classroom,
    Space,
    Ocean,
    Molecular,
}

pub const ALL_THEMES: [ThemeId; 4] = [
    ThemeId::Classroom,
    ThemeId::Space,
    ThemeId::Ocean,
    ThemeId::Molecular,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentTheme {
    pub id: ThemeId,
    /// HUD title shown by the status display.
    pub title: &'static str,
    pub background_inner: Rgba,
    pub background_outer: Rgba,
    pub grid: Rgba,
    pub accent: Rgba,
}

const CLASSROOM: EnvironmentTheme = EnvironmentTheme {
    id: ThemeId::Classroom,
    title: "NEURAL CLASSROOM",
    background_inner: Rgba::new(15, 15, 40, 0.8),
    background_outer: Rgba::new(5, 5, 20, 0.95),
    grid: Rgba::new(0, 240, 255, 0.08),
    accent: Rgba::rgb(0, 240, 255),
};

const SPACE: EnvironmentTheme = EnvironmentTheme {
    id: ThemeId::Space,
    title: "SPACE STATION LAB",
    background_inner: Rgba::new(5, 0, 30, 0.85),
    background_outer: Rgba::new(0, 0, 10, 0.95),
    grid: Rgba::new(100, 100, 255, 0.06),
    accent: Rgba::rgb(128, 128, 255),
};

const OCEAN: EnvironmentTheme = EnvironmentTheme {
    id: ThemeId::Ocean,
    title: "DEEP OCEAN LAB",
    background_inner: Rgba::new(0, 20, 40, 0.8),
    background_outer: Rgba::new(0, 10, 25, 0.95),
    grid: Rgba::new(0, 180, 200, 0.07),
    accent: Rgba::rgb(0, 180, 200),
};

const MOLECULAR: EnvironmentTheme = EnvironmentTheme {
    id: ThemeId::Molecular,
    title: "MOLECULAR LAB",
    background_inner: Rgba::new(10, 25, 10, 0.8),
    background_outer: Rgba::new(5, 15, 5, 0.95),
    grid: Rgba::new(0, 255, 136, 0.06),
    accent: Rgba::rgb(0, 255, 136),
};

impl ThemeId {
    pub fn name(self) -> &'static str {
        match self {
            ThemeId::Classroom => "classroom",
            ThemeId::Space => "space",
            ThemeId::Ocean => "ocean",
            ThemeId::Molecular => "molecular",
        }
    }

    pub fn theme(self) -> &'static EnvironmentTheme {
        match self {
            ThemeId::Classroom => &CLASSROOM,
            ThemeId::Space => &SPACE,
            ThemeId::Ocean => &OCEAN,
            ThemeId::Molecular => &MOLECULAR,
        }
    }

    /// Parse a theme name, falling back to the classroom theme.
    pub fn parse_lossy(name: &str) -> ThemeId {
        name.parse().unwrap_or_else(|e| {
            log::warn!("{e}; using classroom");
            ThemeId::Classroom
        })
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeId {
    type Err = crate::UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ALL_THEMES
            .into_iter()
            .find(|t| t.name() == lowered)
            .ok_or_else(|| crate::UnknownName::Theme(s.to_string()))
    }
}
