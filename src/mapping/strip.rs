//! Vertical strip upsampling (25 monitor LEDs onto 28 strip LEDs)

use super::Mapping;
use crate::{
    color::{BLACK, Rgb},
    layout::{SOURCE_VERTICAL_STRIP_LED_COUNT, Side, VERTICAL_STRIP_LED_COUNT},
    math8::map_index,
    store::LightStore,
};

/// Mapping for the vertical strip on one side of the cabinet
#[derive(Debug, Clone)]
pub struct VerticalStripMapping {
    side: Side,
}

impl VerticalStripMapping {
    pub const fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Mapping for VerticalStripMapping {
    const LED_COUNT: usize = VERTICAL_STRIP_LED_COUNT;

    fn render(&self, lights: &LightStore, leds: &mut [Rgb]) -> bool {
        match lights.pixel_strip(self.side.monitor_strip()) {
            Some(source) if !source.is_empty() => {
                upsample_strip(source, leds);
                true
            }
            _ => false,
        }
    }
}

/// Stretch a monitor strip over a vertical strip.
///
/// Every strip LED copies the source LED it maps to, so some source LEDs
/// repeat on neighbouring strip LEDs. LEDs past the end of a short `source`
/// are off.
pub fn upsample_strip(source: &[Rgb], leds: &mut [Rgb]) {
    for (i, led) in leds.iter_mut().enumerate() {
        let index = map_index(i, VERTICAL_STRIP_LED_COUNT, SOURCE_VERTICAL_STRIP_LED_COUNT);
        *led = source.get(index).copied().unwrap_or(BLACK);
    }
}
