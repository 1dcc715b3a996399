use std::time::{SystemTime, UNIX_EPOCH};

use ember_wallet_core::{ClockPort, PortError};

/// Wall clock used to timestamp imported keyrings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockAdapter;

impl ClockPort for SystemClockAdapter {
    fn now_ms(&self) -> Result<u64, PortError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| PortError::Transport(format!("system clock before unix epoch: {e}")))?;
        u64::try_from(elapsed.as_millis())
            .map_err(|_| PortError::Transport("system clock out of range".to_owned()))
    }
}
