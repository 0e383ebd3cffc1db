use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::constants::DONATION_ID_PREFIX;

const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a donation identifier: `DN` + epoch millis + 5 random base36 chars.
pub fn generate_donation_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..5)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();
    format!(
        "{}{}{}",
        DONATION_ID_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}

/// Generates an opaque identifier for catalog records.
pub fn generate_campaign_id() -> String {
    Uuid::new_v4().to_string()
}
