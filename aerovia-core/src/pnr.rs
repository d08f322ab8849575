use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_LEN: usize = 8;
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a passenger name record code.
///
/// Format: "PNR" + millisecond timestamp + random uppercase base-36 suffix.
/// There is no uniqueness retry; the suffix carries enough entropy that a
/// collision is negligible even for bookings landing in the same
/// millisecond.
pub fn generate_pnr(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("PNR{}{}", now.timestamp_millis(), suffix)
}
