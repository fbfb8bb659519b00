//! Identifiers for rows created by the local store.
//!
//! A local id is a fixed prefix followed by 13 random base-36 characters,
//! e.g. `local_k3v9q0x2m7a1z`. The prefix keeps local rows recognizable next
//! to server-issued UUIDs.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const SUFFIX_LEN: usize = 13;

pub fn generate_local_id(prefix: &str) -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(prefix.len() + SUFFIX_LEN);
    s.push_str(prefix);
    for _ in 0..SUFFIX_LEN {
        s.push(BASE36[rng.random_range(0..BASE36.len())] as char);
    }
    s
}
