#![no_std]

pub mod bridge;
pub mod color;
pub mod cycle_pacer;
pub mod dispatch;
pub mod layout;
pub mod mapping;
pub mod math8;
pub mod payload;
pub mod store;

pub use bridge::{BridgeConfig, CycleReport, DEFAULT_PAD_COLOR, LightsBridge};
pub use cycle_pacer::{CyclePacer, CycleResult};
pub use dispatch::{OutputDevice, dispatch};
pub use layout::{CabinetDevice, Side};
pub use mapping::Mapping;
pub use payload::{Payload, PayloadOverflow};
pub use store::LightStore;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Source of cabinet-side light states
///
/// Implement this trait on top of the game-control API connection.
/// Both methods are called once per cycle on a freshly cleared store. Push
/// every light the API reports: names no mapping reads are dropped by the
/// store.
pub trait LightsSource {
    /// Push the brightness (0.0-1.0) of every named light into the store
    fn read_lights(&mut self, store: &mut LightStore);

    /// Push the colors of every named pixel strip into the store
    fn read_pixel_strips(&mut self, store: &mut LightStore);
}

/// Stage hardware output
///
/// Implement this trait on top of the stage SDK. Sends are fire-and-forget.
pub trait LightsOutput {
    /// Send the combined payload for both pads
    fn send_stage_lights(&mut self, data: &[u8]);

    /// Send the payload of a dedicated cabinet light device
    fn send_cabinet_lights(&mut self, device: CabinetDevice, data: &[u8]);
}
