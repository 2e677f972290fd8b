use crate::{color::Rgb, math8::average8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Achromatic color with all channels set to `value`
#[inline]
pub const fn gray(value: u8) -> Rgb {
    Rgb {
        r: value,
        g: value,
        b: value,
    }
}

/// Returns `true` if any channel of the color is non-zero
#[inline]
pub const fn is_lit(color: Rgb) -> bool {
    color.r != 0 || color.g != 0 || color.b != 0
}

/// Average two RGB colors channel by channel, truncating
#[inline]
pub const fn average_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: average8(a.r, b.r),
        g: average8(a.g, b.g),
        b: average8(a.b, b.b),
    }
}

/// Collect flat `r, g, b` bytes into colors.
///
/// A trailing partial triple is ignored.
pub fn rgb_triples(bytes: &[u8]) -> impl Iterator<Item = Rgb> + '_ {
    bytes.chunks_exact(3).map(|chunk| Rgb {
        r: chunk[0],
        g: chunk[1],
        b: chunk[2],
    })
}
