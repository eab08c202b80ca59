use soroban_sdk::{BytesN, Env};

/// The all-zero storage word. Absent slots read as this value.
pub fn zero_word(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Key of storage slot `index`, big-endian.
pub fn slot_index(env: &Env, index: u32) -> BytesN<32> {
    let mut word = [0u8; 32];
    word[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &word)
}

/// A word holding `value` at byte `offset`, counted from the low-order end.
///
/// Panics if `offset` is not below 32.
pub fn packed_byte(env: &Env, offset: u32, value: u8) -> BytesN<32> {
    let mut word = [0u8; 32];
    word[31 - offset as usize] = value;
    BytesN::from_array(env, &word)
}
