//! Capsule color palette. Cosmetic only, the physics never reads it.

use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB values, assigned round-robin by spawn index
pub const PALETTE: [u32; 15] = [
    0xFF6B9D, // pink
    0xFFA502, // orange
    0x26DE81, // green
    0x4ECDC4, // teal
    0xA29BFE, // lavender
    0xFF6348, // tomato
    0xFFD93D, // yellow
    0x6BCB77, // leaf
    0x4D96FF, // blue
    0xDA70D6, // orchid
    0xFF8A65, // salmon
    0xFFD54F, // amber
    0x81C784, // light green
    0x64B5F6, // light blue
    0xBA68C8, // purple
];

/// Index into `PALETTE`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTag(pub u8);

impl ColorTag {
    #[inline]
    pub fn for_index(index: u32) -> Self {
        ColorTag((index % PALETTE.len() as u32) as u8)
    }

    #[inline]
    pub fn rgb(self) -> u32 {
        PALETTE[self.0 as usize % PALETTE.len()]
    }

    /// CSS form, e.g. `#FF6B9D`
    pub fn hex(self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_wrap_round_robin() {
        assert_eq!(ColorTag::for_index(0), ColorTag(0));
        assert_eq!(ColorTag::for_index(14), ColorTag(14));
        assert_eq!(ColorTag::for_index(15), ColorTag(0));
        assert_eq!(ColorTag::for_index(31), ColorTag(1));
    }

    #[test]
    fn hex_is_css_ready() {
        assert_eq!(ColorTag(0).hex(), "#FF6B9D");
        assert_eq!(ColorTag(1).hex(), "#FFA502");
    }
}
