//! Mappings from cabinet light states to stage hardware LEDs
//!
//! Each destination device class has its own mapping. A mapping reads the
//! named light states of the current cycle and renders exactly
//! [`Mapping::LED_COUNT`] colors in the order the device expects them.

mod marquee;
mod spotlight;
mod stage;
mod strip;

pub use marquee::{MarqueeMapping, downsample_marquee};
pub use spotlight::{SpotlightMapping, fill_spotlights};
pub use stage::{StageMapping, fill_arrow_panel, fill_center_panel, fill_corner_panel};
pub use strip::{VerticalStripMapping, upsample_strip};

use crate::{color::Rgb, store::LightStore};

pub trait Mapping {
    /// Number of LEDs on the destination device
    const LED_COUNT: usize;

    /// Render one frame into `leds`, which is exactly `LED_COUNT` long.
    ///
    /// Returns `false` if the source data for this device is missing this
    /// cycle. The content of `leds` is unspecified in that case and must not
    /// be sent.
    fn render(&self, lights: &LightStore, leds: &mut [Rgb]) -> bool;
}
