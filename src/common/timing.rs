// src/common/timing.rs

use core::time::Duration;

// Values from the TC74 datasheet (DS21462), Section 1.0 "Electrical
// Characteristics" and the SMBus timing table.

// === Bus ===

/// Maximum SMBus clock the TC74 supports.
pub const MAX_BUS_FREQUENCY_HZ: u32 = 100_000;

/// Idle time enforced after every transaction before the next START.
/// Datasheet minimum bus free time (t_BUF) is 4.7 us, rounded up.
pub const QUIESCENCE_DELAY: Duration = Duration::from_micros(5);

// === Device ===

/// Settle time after power-up before the first transaction is attempted.
pub const STARTUP_DELAY: Duration = Duration::from_millis(1000);

/// Nominal conversion rate is 8 samples/s, so DATA_RDY sets within this
/// long after leaving standby.
pub const CONVERSION_TIME: Duration = Duration::from_millis(125);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiescence_covers_bus_free_time() {
        assert!(QUIESCENCE_DELAY >= Duration::from_nanos(4_700));
    }
}
