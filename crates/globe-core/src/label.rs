/// Which pole a label is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pole {
    North,
    South,
}

/// Placement group declared by a label for the pole/ring layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelGroup {
    Pole(Pole),
    /// 0 = upper band, 1 = equator, 2 = lower band.
    Ring(u8),
}

/// A fixed node on the globe. `icon` is an identifier the host maps to a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub group: Option<LabelGroup>,
}

impl Label {
    pub const fn new(
        name: &'static str,
        icon: &'static str,
        color: &'static str,
        group: LabelGroup,
    ) -> Self {
        Self {
            name,
            icon,
            color,
            group: Some(group),
        }
    }

    pub const fn ungrouped(name: &'static str, icon: &'static str, color: &'static str) -> Self {
        Self {
            name,
            icon,
            color,
            group: None,
        }
    }
}

use self::LabelGroup::{Pole as P, Ring as R};

/// The skills shown on the page, in display order.
pub const SKILLS: &[Label] = &[
    Label::new("React", "react", "#61dafb", P(Pole::North)),
    Label::new("Node.js", "nodejs", "#68a063", R(0)),
    Label::new("Python", "python", "#3776ab", R(0)),
    Label::new("JavaScript", "javascript", "#f7df1e", R(0)),
    Label::new("MongoDB", "mongodb", "#47a248", R(0)),
    Label::new("Laravel", "laravel", "#ff2d20", R(0)),
    Label::new(".NET", "dotnet", "#512bd4", R(1)),
    Label::new("MySQL", "mysql", "#4479a1", R(1)),
    Label::new("Tailwind", "tailwindcss", "#06b6d4", R(1)),
    Label::new("Git", "git", "#f05032", R(1)),
    Label::new("Docker", "docker", "#2496ed", R(1)),
    Label::new("FastAPI", "fastapi", "#009688", R(1)),
    Label::new("Express", "express", "#ffffff", R(2)),
    Label::new("PostgreSQL", "postgresql", "#336791", R(2)),
    Label::new("TypeScript", "typescript", "#3178c6", R(2)),
    Label::new("HTML5", "html5", "#e34f26", R(2)),
    Label::new("CSS3", "css3", "#1572b6", R(2)),
    Label::new("REST APIs", "database", "#6366f1", P(Pole::South)),
];
