//! Combined stage payload
//!
//! Both pads, nine panels each, 25 LEDs per panel. Arrow panels copy their
//! source strip 1:1, corner panels draw a brightness-driven L-shape over the
//! pad color and the center panel is the pad color only.

use super::Mapping;
use crate::{
    color::{BLACK, Rgb, gray},
    layout::{
        Arrow, Corner, PAD_COUNT, PANEL_LED_COUNT, PANEL_OUTER_LED_COUNT, Panel, PanelKind,
        STAGE_LED_COUNT,
    },
    math8::unit_to_u8,
    store::LightStore,
};

/// Mapping for the combined stage lights of both pads
#[derive(Debug, Clone)]
pub struct StageMapping {
    pad_color: Rgb,
}

impl StageMapping {
    pub const fn new(pad_color: Rgb) -> Self {
        Self { pad_color }
    }

    /// Returns `true` if any arrow strip or corner light was fetched
    fn has_sources(lights: &LightStore) -> bool {
        (0..PAD_COUNT).any(|pad| {
            Arrow::ALL
                .iter()
                .any(|arrow| lights.pixel_strip(arrow.strip_name(pad)).is_some())
                || Corner::ALL
                    .iter()
                    .any(|corner| lights.light(corner.light_name(pad)).is_some())
        })
    }
}

impl Mapping for StageMapping {
    const LED_COUNT: usize = STAGE_LED_COUNT;

    fn render(&self, lights: &LightStore, leds: &mut [Rgb]) -> bool {
        if !Self::has_sources(lights) {
            return false;
        }

        let panels = (0..PAD_COUNT).flat_map(|pad| Panel::ALL.map(|panel| (pad, panel)));
        for (panel_leds, (pad, panel)) in leds.chunks_exact_mut(PANEL_LED_COUNT).zip(panels) {
            match panel.kind() {
                PanelKind::Arrow(arrow) => {
                    fill_arrow_panel(lights.pixel_strip(arrow.strip_name(pad)), panel_leds);
                }
                PanelKind::Corner(corner) => {
                    // Unlit corner when the light was not reported
                    let value = lights.light(corner.light_name(pad)).unwrap_or(0.0);
                    fill_corner_panel(value, corner, self.pad_color, panel_leds);
                }
                PanelKind::Center => fill_center_panel(self.pad_color, panel_leds),
            }
        }
        true
    }
}

/// Copy an arrow strip onto a panel.
///
/// Both sides have 25 LEDs per arrow, so LEDs are copied 1:1. A missing or
/// short strip leaves the remaining LEDs off.
pub fn fill_arrow_panel(strip: Option<&[Rgb]>, leds: &mut [Rgb]) {
    let pixels = strip.unwrap_or(&[]);
    for (i, led) in leds.iter_mut().enumerate() {
        *led = pixels.get(i).copied().unwrap_or(BLACK);
    }
}

/// Render a corner panel.
///
/// The outer 4x4 grid follows the corner's mask row by row: live cells get
/// a gray scaled by `value`, static cells the pad color. The inner 3x3 grid
/// is always the pad color.
pub fn fill_corner_panel(value: f32, corner: Corner, pad_color: Rgb, leds: &mut [Rgb]) {
    let live = gray(unit_to_u8(value));
    let split = PANEL_OUTER_LED_COUNT.min(leds.len());
    let (outer, inner) = leds.split_at_mut(split);

    for (led, &flag) in outer.iter_mut().zip(corner.mask().iter().flatten()) {
        *led = if flag != 0 { live } else { pad_color };
    }
    inner.fill(pad_color);
}

/// Fill a whole panel with the pad color
pub fn fill_center_panel(pad_color: Rgb, leds: &mut [Rgb]) {
    leds.fill(pad_color);
}
