//! Marquee downsampling (40 top panel LEDs onto 12 marquee LEDs)
//!
//! Many source LEDs share one marquee LED. Lit LEDs win over unlit ones so
//! single-pixel features survive the compression, and two lit LEDs landing
//! on the same slot are averaged.

use super::Mapping;
use crate::{
    color::{BLACK, Rgb, average_colors, is_lit},
    layout::{
        MARQUEE_LED_COUNT, MARQUEE_LOGICAL_LED_COUNT, SOURCE_TOP_PANEL_LED_COUNT,
        TOP_PANEL_STRIP,
    },
    math8::map_index,
    store::LightStore,
};

/// Mapping for the marquee above the screen
#[derive(Debug, Clone, Default)]
pub struct MarqueeMapping;

impl Mapping for MarqueeMapping {
    const LED_COUNT: usize = MARQUEE_LED_COUNT;

    fn render(&self, lights: &LightStore, leds: &mut [Rgb]) -> bool {
        match lights.pixel_strip(TOP_PANEL_STRIP) {
            Some(source) if !source.is_empty() => {
                downsample_marquee(source, leds);
                true
            }
            _ => false,
        }
    }
}

/// Downsample the top panel strip onto the marquee.
///
/// LEDs past the end of a short `source` are treated as off.
pub fn downsample_marquee(source: &[Rgb], leds: &mut [Rgb]) {
    let mut logical = [BLACK; MARQUEE_LOGICAL_LED_COUNT];

    for (i, &color) in source.iter().enumerate().take(SOURCE_TOP_PANEL_LED_COUNT) {
        // Unlit source LEDs never overwrite or dim a slot
        if !is_lit(color) {
            continue;
        }
        let index = map_index(i, SOURCE_TOP_PANEL_LED_COUNT, MARQUEE_LED_COUNT);
        let Some(slot) = logical.get_mut(index) else {
            continue;
        };
        *slot = if is_lit(*slot) {
            average_colors(color, *slot)
        } else {
            color
        };
    }

    for (led, color) in leds.iter_mut().zip(&logical[..MARQUEE_LED_COUNT]) {
        *led = *color;
    }
}
