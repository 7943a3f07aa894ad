//! Small helpers shared by harness callers.

use rand::Rng;
use tokio::time::{sleep, Duration};

use crate::config::{HarnessConfig, COIN_SYMBOL, COIN_VALUE};

/// Waits out the configured finalization delay.
///
/// Callers sleep this between a state-changing operation and the read that
/// verifies it.
pub async fn await_finalization(config: &HarnessConfig) {
    sleep(Duration::from_millis(config.finalization_time_ms)).await;
}

/// Random identifier of `length` characters drawn from `charset`.
///
/// Used for unique throwaway account and domain names. `charset` must not
/// be empty.
pub fn random_string(length: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Renders base units as a token quantity string, e.g. `"1000.0000 FIO"`.
pub fn format_amount(units: u64) -> String {
    format!(
        "{}.{:04} {}",
        units / COIN_VALUE,
        units % COIN_VALUE,
        COIN_SYMBOL
    )
}
