use crate::Key;

/// Bit of `key` at 1-indexed `position`, i.e. the bit under mask
/// `1 << (position - 1)`. Position 1 is the least significant bit.
pub fn bit_at(key: Key, position: u8) -> Key {
    (key >> (position - 1)) & 1
}

/// True when `key` is representable in `depth` bits.
pub fn fits_in_depth(key: Key, depth: u8) -> bool {
    u32::from(depth) >= Key::BITS || key >> depth == 0
}
