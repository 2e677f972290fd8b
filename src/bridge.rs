#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::dispatch::{OUTPUT_DEVICE_COUNT, OutputDevice, dispatch};
use crate::layout::{STAGE_LED_COUNT, Side};
use crate::mapping::{
    Mapping, MarqueeMapping, SpotlightMapping, StageMapping, VerticalStripMapping,
};
use crate::payload::Payload;
use crate::store::LightStore;
use crate::{LightsOutput, LightsSource};

/// Gold of the stage pads
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PAD_COLOR: Rgb = rgb_from_u32(0xBBBB00);

/// Configuration for the bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Read brightness lights from the source
    pub read_lights: bool,
    /// Read pixel strips from the source
    pub read_pixel_strips: bool,
    /// Send payloads to the output
    pub output_lights: bool,
    /// Color of the uncontrolled parts of the stage panels
    pub pad_color: Rgb,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            read_lights: true,
            read_pixel_strips: true,
            output_lights: true,
            pad_color: DEFAULT_PAD_COLOR,
        }
    }
}

/// Devices that received a payload during one cycle, in dispatch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    sent: Vec<OutputDevice, OUTPUT_DEVICE_COUNT>,
}

impl CycleReport {
    pub fn sent(&self) -> &[OutputDevice] {
        &self.sent
    }

    pub fn contains(&self, device: OutputDevice) -> bool {
        self.sent.contains(&device)
    }

    fn record(&mut self, device: OutputDevice) {
        // One slot per device, each is dispatched at most once per cycle
        debug_assert!(!self.sent.contains(&device));
        let recorded = self.sent.push(device).is_ok();
        debug_assert!(recorded);
    }
}

/// Lights bridge - the cycle orchestrator
///
/// One call to [`LightsBridge::run_cycle`] refreshes every stage and cabinet
/// device: light states are read into the store, mapped per device, encoded
/// and dispatched, all synchronously.
pub struct LightsBridge<S: LightsSource, O: LightsOutput> {
    // External dependencies and configuration
    source: S,
    output: O,
    config: BridgeConfig,

    // Per-cycle buffers
    lights: LightStore,
    frame: [Rgb; STAGE_LED_COUNT],
    payload: Payload,
}

impl<S: LightsSource, O: LightsOutput> LightsBridge<S, O> {
    pub fn new(source: S, output: O, config: &BridgeConfig) -> Self {
        Self {
            source,
            output,
            config: config.clone(),
            lights: LightStore::new(),
            frame: [BLACK; STAGE_LED_COUNT],
            payload: Payload::new(),
        }
    }

    /// Run one full refresh
    pub fn run_cycle(&mut self) -> CycleReport {
        self.read_lights();

        let mut report = CycleReport::default();
        if !self.config.output_lights {
            return report;
        }

        // The stage goes first, as a single payload for both pads
        let stage = StageMapping::new(self.config.pad_color);
        self.output_device(OutputDevice::Stage, &stage, &mut report);

        self.output_device(OutputDevice::Marquee, &MarqueeMapping, &mut report);
        for side in Side::ALL {
            let strip = VerticalStripMapping::new(side);
            self.output_device(OutputDevice::strip(side), &strip, &mut report);
        }
        for side in Side::ALL {
            let spotlights = SpotlightMapping::new(side);
            self.output_device(OutputDevice::spotlights(side), &spotlights, &mut report);
        }

        report
    }

    /// Replace the light states of the previous cycle with fresh ones
    fn read_lights(&mut self) {
        self.lights.clear();

        if self.config.read_lights {
            self.source.read_lights(&mut self.lights);
        }
        if self.config.read_pixel_strips {
            self.source.read_pixel_strips(&mut self.lights);
        }
    }

    /// Map, encode and dispatch the payload of a single device
    fn output_device<M: Mapping>(
        &mut self,
        device: OutputDevice,
        mapping: &M,
        report: &mut CycleReport,
    ) {
        let Some(leds) = self.frame.get_mut(..M::LED_COUNT) else {
            return;
        };
        if !mapping.render(&self.lights, leds) {
            return;
        }

        self.payload.clear();
        if self.payload.extend(leds).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[LightsBridge.output_device] {:?} payload overflow", device);
            return;
        }

        if dispatch(&mut self.output, device, self.payload.as_bytes()) {
            report.record(device);
        }
    }

    /// Light states read during the last cycle
    pub fn lights(&self) -> &LightStore {
        &self.lights
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
