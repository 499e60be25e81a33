use rand::rngs::OsRng;
use rand::RngCore;

/// 256 bits from the OS RNG, hex encoded.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
