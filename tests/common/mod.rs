#![allow(dead_code)]

use myrtio_cabinet_bridge::{CabinetDevice, LightStore, LightsOutput, LightsSource, Rgb};

/// Source serving a fixed set of light states
#[derive(Debug, Default)]
pub struct FakeSource {
    pub lights: Vec<(String, f32)>,
    pub strips: Vec<(String, Vec<Rgb>)>,
    pub reads: usize,
}

impl FakeSource {
    pub fn with_light(mut self, name: &str, value: f32) -> Self {
        self.lights.push((name.to_string(), value));
        self
    }

    pub fn with_strip(mut self, name: &str, pixels: Vec<Rgb>) -> Self {
        self.strips.push((name.to_string(), pixels));
        self
    }
}

impl LightsSource for FakeSource {
    fn read_lights(&mut self, store: &mut LightStore) {
        self.reads += 1;
        for (name, value) in &self.lights {
            store.set_light(name, *value);
        }
    }

    fn read_pixel_strips(&mut self, store: &mut LightStore) {
        for (name, pixels) in &self.strips {
            store.set_pixel_strip(name, pixels);
        }
    }
}

/// Output recording every payload it receives
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub stage: Vec<Vec<u8>>,
    pub cabinet: Vec<(CabinetDevice, Vec<u8>)>,
}

impl RecordingOutput {
    pub fn cabinet_sends(&self, device: CabinetDevice) -> Vec<&[u8]> {
        self.cabinet
            .iter()
            .filter(|(sent_to, _)| *sent_to == device)
            .map(|(_, data)| data.as_slice())
            .collect()
    }

    pub fn total_sends(&self) -> usize {
        self.stage.len() + self.cabinet.len()
    }
}

impl LightsOutput for RecordingOutput {
    fn send_stage_lights(&mut self, data: &[u8]) {
        self.stage.push(data.to_vec());
    }

    fn send_cabinet_lights(&mut self, device: CabinetDevice, data: &[u8]) {
        self.cabinet.push((device, data.to_vec()));
    }
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Strip of `len` unlit LEDs
pub fn dark_strip(len: usize) -> Vec<Rgb> {
    vec![rgb(0, 0, 0); len]
}
