//! Routing of encoded payloads to the stage SDK

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LightsOutput;
use crate::layout::{CabinetDevice, STAGE_LED_COUNT, Side};

/// Number of payloads sent per cycle when every device has data
pub const OUTPUT_DEVICE_COUNT: usize = 6;

/// Destination of an encoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDevice {
    /// Both pads in a single payload
    Stage,
    Marquee,
    LeftStrip,
    RightStrip,
    LeftSpotlights,
    RightSpotlights,
}

impl OutputDevice {
    /// Devices in dispatch order
    pub const ALL: [OutputDevice; OUTPUT_DEVICE_COUNT] = [
        OutputDevice::Stage,
        OutputDevice::Marquee,
        OutputDevice::LeftStrip,
        OutputDevice::RightStrip,
        OutputDevice::LeftSpotlights,
        OutputDevice::RightSpotlights,
    ];

    pub const fn strip(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftStrip,
            Side::Right => Self::RightStrip,
        }
    }

    pub const fn spotlights(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftSpotlights,
            Side::Right => Self::RightSpotlights,
        }
    }

    /// Dedicated cabinet device, `None` for the stage
    pub const fn cabinet_device(self) -> Option<CabinetDevice> {
        match self {
            Self::Stage => None,
            Self::Marquee => Some(CabinetDevice::Marquee),
            Self::LeftStrip => Some(CabinetDevice::LeftStrip),
            Self::RightStrip => Some(CabinetDevice::RightStrip),
            Self::LeftSpotlights => Some(CabinetDevice::LeftSpotlights),
            Self::RightSpotlights => Some(CabinetDevice::RightSpotlights),
        }
    }

    pub const fn led_count(self) -> usize {
        match self.cabinet_device() {
            Some(device) => device.led_count(),
            None => STAGE_LED_COUNT,
        }
    }

    /// Exact payload size in bytes
    pub const fn payload_len(self) -> usize {
        self.led_count() * 3
    }
}

/// Forward a payload to the output for `device`.
///
/// Payloads whose size does not match the device are dropped. Returns
/// `true` if the payload was handed to the output; whether the hardware
/// received it is not observable here.
pub fn dispatch<O: LightsOutput>(output: &mut O, device: OutputDevice, payload: &[u8]) -> bool {
    if payload.len() != device.payload_len() {
        #[cfg(feature = "esp32-log")]
        println!(
            "[dispatch] dropping {:?} payload of {} bytes, expected {}",
            device,
            payload.len(),
            device.payload_len()
        );
        return false;
    }

    match device.cabinet_device() {
        Some(cabinet) => output.send_cabinet_lights(cabinet, payload),
        None => output.send_stage_lights(payload),
    }
    true
}
