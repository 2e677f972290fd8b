//! Physical layout of both lighting topologies.
//!
//! Destination side: two stage pads of nine panels each plus the dedicated
//! cabinet lights. Source side: the device names published by the cabinet
//! control API.

/// LEDs on one stage panel (outer 4x4 grid followed by inner 3x3 grid)
pub const PANEL_LED_COUNT: usize = 25;
/// LEDs in the controllable outer grid of a panel
pub const PANEL_OUTER_LED_COUNT: usize = 16;
/// Panels on one pad
pub const PANELS_PER_PAD: usize = 9;
/// Pads on the stage
pub const PAD_COUNT: usize = 2;
/// LEDs in the combined stage payload
pub const STAGE_LED_COUNT: usize = PAD_COUNT * PANELS_PER_PAD * PANEL_LED_COUNT;

/// Logical marquee buffer, only the first half is wired
pub const MARQUEE_LOGICAL_LED_COUNT: usize = 24;
/// Physical marquee LEDs
pub const MARQUEE_LED_COUNT: usize = 12;
/// LEDs on one vertical strip
pub const VERTICAL_STRIP_LED_COUNT: usize = 28;
/// LEDs on one spotlight cluster
pub const SPOTLIGHT_LED_COUNT: usize = 8;

/// LEDs on the source top panel strip
pub const SOURCE_TOP_PANEL_LED_COUNT: usize = 40;
/// LEDs on a source monitor strip
pub const SOURCE_VERTICAL_STRIP_LED_COUNT: usize = 25;

/// Source strip feeding the marquee
pub const TOP_PANEL_STRIP: &str = "top_panel";

/// Every brightness light a mapping reads
pub const BRIDGED_LIGHTS: [&str; 10] = [
    Corner::UpLeft.light_name(0),
    Corner::UpRight.light_name(0),
    Corner::DownLeft.light_name(0),
    Corner::DownRight.light_name(0),
    Corner::UpLeft.light_name(1),
    Corner::UpRight.light_name(1),
    Corner::DownLeft.light_name(1),
    Corner::DownRight.light_name(1),
    Side::Left.woofer_light(),
    Side::Right.woofer_light(),
];

/// Every pixel strip a mapping reads
pub const BRIDGED_STRIPS: [&str; 11] = [
    Arrow::Up.strip_name(0),
    Arrow::Left.strip_name(0),
    Arrow::Down.strip_name(0),
    Arrow::Right.strip_name(0),
    Arrow::Up.strip_name(1),
    Arrow::Left.strip_name(1),
    Arrow::Down.strip_name(1),
    Arrow::Right.strip_name(1),
    TOP_PANEL_STRIP,
    Side::Left.monitor_strip(),
    Side::Right.monitor_strip(),
];

/// Static name of a bridged brightness light, `None` for any other name
pub fn bridged_light(name: &str) -> Option<&'static str> {
    BRIDGED_LIGHTS.iter().copied().find(|&light| light == name)
}

/// Static name of a bridged pixel strip, `None` for any other name
pub fn bridged_strip(name: &str) -> Option<&'static str> {
    BRIDGED_STRIPS.iter().copied().find(|&strip| strip == name)
}

/// Player side of the cabinet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Source strip feeding the vertical strip on this side
    pub const fn monitor_strip(self) -> &'static str {
        match self {
            Self::Left => "monitor_left",
            Self::Right => "monitor_right",
        }
    }

    /// Source light feeding the spotlights on this side
    pub const fn woofer_light(self) -> &'static str {
        match self {
            Self::Left => "GOLD P1 Woofer Corner",
            Self::Right => "GOLD P2 Woofer Corner",
        }
    }
}

/// Panel position on a pad.
///
/// Discriminants are the panel indices used by the stage SDK: row-major,
/// left-to-right, top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Panel {
    UpLeft = 0,
    Up = 1,
    UpRight = 2,
    Left = 3,
    Center = 4,
    Right = 5,
    DownLeft = 6,
    Down = 7,
    DownRight = 8,
}

/// What drives a panel's LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Per-LED colors copied from an arrow strip
    Arrow(Arrow),
    /// Brightness-driven L-shape over the pad color
    Corner(Corner),
    /// Pad color only
    Center,
}

/// Arrow panels, each backed by a source pixel strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Left,
    Down,
    Right,
}

/// Corner panels, each backed by a source brightness light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Panel {
    /// Panels in the order the stage SDK expects them
    pub const ALL: [Panel; PANELS_PER_PAD] = [
        Panel::UpLeft,
        Panel::Up,
        Panel::UpRight,
        Panel::Left,
        Panel::Center,
        Panel::Right,
        Panel::DownLeft,
        Panel::Down,
        Panel::DownRight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn kind(self) -> PanelKind {
        match self {
            Self::Up => PanelKind::Arrow(Arrow::Up),
            Self::Left => PanelKind::Arrow(Arrow::Left),
            Self::Down => PanelKind::Arrow(Arrow::Down),
            Self::Right => PanelKind::Arrow(Arrow::Right),
            Self::UpLeft => PanelKind::Corner(Corner::UpLeft),
            Self::UpRight => PanelKind::Corner(Corner::UpRight),
            Self::DownLeft => PanelKind::Corner(Corner::DownLeft),
            Self::DownRight => PanelKind::Corner(Corner::DownRight),
            Self::Center => PanelKind::Center,
        }
    }
}

impl Arrow {
    pub const ALL: [Arrow; 4] = [Arrow::Up, Arrow::Left, Arrow::Down, Arrow::Right];

    /// Source strip name for this arrow on the given pad (0 or 1)
    pub const fn strip_name(self, pad: usize) -> &'static str {
        match (pad, self) {
            (0, Self::Up) => "p1_foot_up",
            (0, Self::Left) => "p1_foot_left",
            (0, Self::Down) => "p1_foot_down",
            (0, Self::Right) => "p1_foot_right",
            (_, Self::Up) => "p2_foot_up",
            (_, Self::Left) => "p2_foot_left",
            (_, Self::Down) => "p2_foot_down",
            (_, Self::Right) => "p2_foot_right",
        }
    }
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::UpLeft,
        Corner::UpRight,
        Corner::DownLeft,
        Corner::DownRight,
    ];

    /// Source light name for this corner on the given pad (0 or 1)
    pub const fn light_name(self, pad: usize) -> &'static str {
        match (pad, self) {
            (0, Self::UpLeft) => "GOLD P1 Stage Corner Up-Left",
            (0, Self::UpRight) => "GOLD P1 Stage Corner Up-Right",
            (0, Self::DownLeft) => "GOLD P1 Stage Corner Down-Left",
            (0, Self::DownRight) => "GOLD P1 Stage Corner Down-Right",
            (_, Self::UpLeft) => "GOLD P2 Stage Corner Up-Left",
            (_, Self::UpRight) => "GOLD P2 Stage Corner Up-Right",
            (_, Self::DownLeft) => "GOLD P2 Stage Corner Down-Left",
            (_, Self::DownRight) => "GOLD P2 Stage Corner Down-Right",
        }
    }

    /// Live cells of the outer 4x4 grid, row-major.
    ///
    /// Each mask is an L-shape along the two edges meeting at the corner.
    pub const fn mask(self) -> &'static CornerMask {
        match self {
            Self::UpLeft => &UP_LEFT_MASK,
            Self::UpRight => &UP_RIGHT_MASK,
            Self::DownLeft => &DOWN_LEFT_MASK,
            Self::DownRight => &DOWN_RIGHT_MASK,
        }
    }
}

/// Live (1) / static (0) flags for the outer 4x4 grid of a corner panel
pub type CornerMask = [[u8; 4]; 4];

const UP_LEFT_MASK: CornerMask = [
    [1, 1, 1, 1], //
    [1, 0, 0, 0],
    [1, 0, 0, 0],
    [1, 0, 0, 0],
];

const UP_RIGHT_MASK: CornerMask = [
    [1, 1, 1, 1], //
    [0, 0, 0, 1],
    [0, 0, 0, 1],
    [0, 0, 0, 1],
];

const DOWN_LEFT_MASK: CornerMask = [
    [1, 0, 0, 0], //
    [1, 0, 0, 0],
    [1, 0, 0, 0],
    [1, 1, 1, 1],
];

const DOWN_RIGHT_MASK: CornerMask = [
    [0, 0, 0, 1], //
    [0, 0, 0, 1],
    [0, 0, 0, 1],
    [1, 1, 1, 1],
];

/// Dedicated cabinet light devices of the stage SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CabinetDevice {
    Marquee = 0,
    LeftStrip = 1,
    LeftSpotlights = 2,
    RightStrip = 3,
    RightSpotlights = 4,
}

impl CabinetDevice {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Marquee,
            1 => Self::LeftStrip,
            2 => Self::LeftSpotlights,
            3 => Self::RightStrip,
            4 => Self::RightSpotlights,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Number of LEDs the device expects
    pub const fn led_count(self) -> usize {
        match self {
            Self::Marquee => MARQUEE_LED_COUNT,
            Self::LeftStrip | Self::RightStrip => VERTICAL_STRIP_LED_COUNT,
            Self::LeftSpotlights | Self::RightSpotlights => SPOTLIGHT_LED_COUNT,
        }
    }
}
