//! Single code point emoji registry
//!
//! Used when a policy enables emoji. Multi-scalar sequences (skin tones,
//! ZWJ families, flags) are not covered; each scalar is judged on its own.

/// Inclusive code point ranges of emoji and pictographic symbols
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
];

/// Check if a character is in the registry
pub fn is_emoji(ch: char) -> bool {
    let cp = ch as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

/// Every character in the registry
pub fn emoji_chars() -> impl Iterator<Item = char> {
    EMOJI_RANGES
        .iter()
        .flat_map(|&(start, end)| (start..=end).filter_map(char::from_u32))
}
