use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Green,
    Amber,
    Violet,
    Teal,
    Monochrome,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[
            ThemeName::Green,
            ThemeName::Amber,
            ThemeName::Violet,
            ThemeName::Teal,
            ThemeName::Monochrome,
        ]
    }

    pub fn next(self) -> ThemeName {
        let themes = Self::all();
        let idx = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(idx + 1) % themes.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Green => "green",
            ThemeName::Amber => "amber",
            ThemeName::Violet => "violet",
            ThemeName::Teal => "teal",
            ThemeName::Monochrome => "monochrome",
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "green" => Ok(ThemeName::Green),
            "amber" => Ok(ThemeName::Amber),
            "violet" => Ok(ThemeName::Violet),
            "teal" => Ok(ThemeName::Teal),
            "monochrome" => Ok(ThemeName::Monochrome),
            _ => Err(()),
        }
    }
}

/// Five-step ramp indexed by intensity level 0..=4, plus accent colors
/// for the two open-task streams.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: [Color; 5],
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color,
    pub muted: Color,
    pub selection: Color,
    pub due: Color,
    pub overdue: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Green => [
                Color::Rgb(22, 27, 34),
                Color::Rgb(14, 68, 41),
                Color::Rgb(0, 109, 50),
                Color::Rgb(38, 166, 65),
                Color::Rgb(57, 211, 83),
            ],
            ThemeName::Amber => [
                Color::Rgb(22, 27, 34),
                Color::Rgb(82, 53, 0),
                Color::Rgb(133, 90, 0),
                Color::Rgb(191, 135, 0),
                Color::Rgb(250, 189, 47),
            ],
            ThemeName::Violet => [
                Color::Rgb(22, 27, 34),
                Color::Rgb(48, 25, 86),
                Color::Rgb(76, 40, 130),
                Color::Rgb(118, 74, 188),
                Color::Rgb(163, 119, 238),
            ],
            ThemeName::Teal => [
                Color::Rgb(22, 27, 34),
                Color::Rgb(0, 68, 68),
                Color::Rgb(0, 109, 109),
                Color::Rgb(38, 166, 154),
                Color::Rgb(57, 211, 196),
            ],
            ThemeName::Monochrome => [
                Color::Rgb(22, 27, 34),
                Color::Rgb(50, 55, 62),
                Color::Rgb(80, 85, 92),
                Color::Rgb(140, 145, 152),
                Color::Rgb(200, 205, 212),
            ],
        };

        Self {
            name,
            colors,
            background: Color::Rgb(13, 17, 23),
            foreground: Color::Rgb(201, 209, 217),
            border: Color::Rgb(48, 54, 61),
            highlight: colors[4],
            muted: Color::Rgb(139, 148, 158),
            selection: Color::Rgb(33, 42, 55),
            due: Color::Rgb(210, 168, 44),
            overdue: Color::Rgb(229, 83, 75),
        }
    }
}
