use super::Mapping;
use crate::{
    color::{Rgb, gray},
    layout::{SPOTLIGHT_LED_COUNT, Side},
    math8::unit_to_u8,
    store::LightStore,
};

/// Mapping for the spotlight cluster on one side of the cabinet.
///
/// All spotlights follow the woofer light of that side as plain white.
#[derive(Debug, Clone)]
pub struct SpotlightMapping {
    side: Side,
}

impl SpotlightMapping {
    pub const fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Mapping for SpotlightMapping {
    const LED_COUNT: usize = SPOTLIGHT_LED_COUNT;

    fn render(&self, lights: &LightStore, leds: &mut [Rgb]) -> bool {
        let Some(value) = lights.light(self.side.woofer_light()) else {
            return false;
        };
        fill_spotlights(value, leds);
        true
    }
}

/// Fill the spotlights with white scaled by `value` (0.0-1.0)
pub fn fill_spotlights(value: f32, leds: &mut [Rgb]) {
    leds.fill(gray(unit_to_u8(value)));
}
