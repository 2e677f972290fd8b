//! Named light state store
//!
//! Holds the cabinet-side light states fetched for the current cycle:
//! brightness lights (one `f32` per name) and pixel strips (one color per
//! LED). Lookups are exact, case-sensitive name matches.
//!
//! The control API reports every light the game has, but only the names in
//! [`BRIDGED_LIGHTS`] and [`BRIDGED_STRIPS`] feed a mapping. Everything else
//! is ignored on insert, so the fixed capacity always fits a full cycle no
//! matter how many unrelated devices the source reports, or in which order.

use heapless::Vec;

use crate::color::{Rgb, rgb_triples};
use crate::layout::{BRIDGED_LIGHTS, BRIDGED_STRIPS, bridged_light, bridged_strip};

/// Brightness lights kept per cycle
pub const MAX_LIGHTS: usize = BRIDGED_LIGHTS.len();
/// Pixel strips kept per cycle
pub const MAX_STRIPS: usize = BRIDGED_STRIPS.len();
/// Maximum number of LEDs kept per pixel strip
pub const MAX_STRIP_LEDS: usize = 64;

pub type PixelStrip = Vec<Rgb, MAX_STRIP_LEDS>;

/// Brightness of a single non-addressable light
#[derive(Debug, Clone)]
pub struct ScalarLight {
    pub name: &'static str,
    pub value: f32,
}

/// Colors of an addressable LED strip
#[derive(Debug, Clone)]
pub struct NamedPixelStrip {
    pub name: &'static str,
    pub pixels: PixelStrip,
}

/// Light states of one cycle
#[derive(Debug, Clone, Default)]
pub struct LightStore {
    lights: Vec<ScalarLight, MAX_LIGHTS>,
    strips: Vec<NamedPixelStrip, MAX_STRIPS>,
}

impl LightStore {
    pub const fn new() -> Self {
        Self {
            lights: Vec::new(),
            strips: Vec::new(),
        }
    }

    /// Drop every entry from the previous cycle
    pub fn clear(&mut self) {
        self.lights.clear();
        self.strips.clear();
    }

    /// Store the brightness of a light, replacing any previous value.
    ///
    /// Returns `false` if no mapping reads this light, nothing is stored then.
    pub fn set_light(&mut self, name: &str, value: f32) -> bool {
        let Some(name) = bridged_light(name) else {
            return false;
        };
        if let Some(light) = self.lights.iter_mut().find(|light| light.name == name) {
            light.value = value;
            return true;
        }
        // One slot per bridged name
        self.lights.push(ScalarLight { name, value }).is_ok()
    }

    /// Store the colors of a pixel strip, replacing any previous strip.
    ///
    /// Strips longer than [`MAX_STRIP_LEDS`] are truncated. Returns `false`
    /// if no mapping reads this strip, nothing is stored then.
    pub fn set_pixel_strip(&mut self, name: &str, pixels: &[Rgb]) -> bool {
        self.insert_strip(name, pixels.iter().copied())
    }

    /// Store a pixel strip given as flat `r, g, b` bytes.
    ///
    /// A trailing partial triple is ignored, strips longer than
    /// [`MAX_STRIP_LEDS`] are truncated.
    pub fn set_pixel_strip_bytes(&mut self, name: &str, bytes: &[u8]) -> bool {
        self.insert_strip(name, rgb_triples(bytes))
    }

    /// Brightness of the named light, if it was fetched this cycle
    pub fn light(&self, name: &str) -> Option<f32> {
        self.lights
            .iter()
            .find(|light| light.name == name)
            .map(|light| light.value)
    }

    /// Colors of the named strip, if it was fetched this cycle
    pub fn pixel_strip(&self, name: &str) -> Option<&[Rgb]> {
        self.strips
            .iter()
            .find(|strip| strip.name == name)
            .map(|strip| strip.pixels.as_slice())
    }

    /// Returns `true` if the named strip was fetched and has at least one LED
    pub fn has_pixels(&self, name: &str) -> bool {
        self.pixel_strip(name).is_some_and(|pixels| !pixels.is_empty())
    }

    pub fn lights(&self) -> &[ScalarLight] {
        &self.lights
    }

    pub fn pixel_strips(&self) -> &[NamedPixelStrip] {
        &self.strips
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty() && self.strips.is_empty()
    }

    fn insert_strip(&mut self, name: &str, pixels: impl Iterator<Item = Rgb>) -> bool {
        let Some(name) = bridged_strip(name) else {
            return false;
        };
        let pixels: PixelStrip = pixels.take(MAX_STRIP_LEDS).collect();

        if let Some(strip) = self.strips.iter_mut().find(|strip| strip.name == name) {
            strip.pixels = pixels;
            return true;
        }
        // One slot per bridged name
        self.strips.push(NamedPixelStrip { name, pixels }).is_ok()
    }
}
