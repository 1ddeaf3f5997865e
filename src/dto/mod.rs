use std::time::{SystemTime, UNIX_EPOCH};

pub mod board;
pub mod forms;
pub mod health;
pub mod validation;

/// Epoch milliseconds, the timestamp form the page already understands.
fn system_time_millis(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
