use heapless::Vec;

use crate::{color::Rgb, layout::STAGE_LED_COUNT};

/// Largest payload any device accepts (the combined stage payload)
pub const MAX_PAYLOAD_LEN: usize = STAGE_LED_COUNT * 3;

/// Error returned when a color does not fit into the payload buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadOverflow;

/// Byte payload for the stage SDK
///
/// Colors are appended as raw `r, g, b` bytes, in order, without padding
/// or length prefix.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    inner: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Payload {
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Append one color
    ///
    /// Returns an error if the buffer is full, the payload is left unchanged
    pub fn push(&mut self, color: Rgb) -> Result<(), PayloadOverflow> {
        self.inner
            .extend_from_slice(&[color.r, color.g, color.b])
            .map_err(|()| PayloadOverflow)
    }

    /// Append all colors in order
    pub fn extend(&mut self, colors: &[Rgb]) -> Result<(), PayloadOverflow> {
        if self.inner.len() + colors.len() * 3 > self.inner.capacity() {
            return Err(PayloadOverflow);
        }
        for color in colors {
            self.push(*color)?;
        }
        Ok(())
    }

    /// Encode `colors` into a fresh payload
    pub fn encode(colors: &[Rgb]) -> Result<Self, PayloadOverflow> {
        let mut payload = Self::new();
        payload.extend(colors)?;
        Ok(payload)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of complete colors in the payload
    pub fn led_count(&self) -> usize {
        self.inner.len() / 3
    }
}
