//! Decoded digitizer input events and the raw wire layout they come from.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Size in bytes of one raw record on the wire.
///
/// Wire format (little-endian, no framing beyond the fixed size):
/// ```text
/// [sec:u32][usec:u32][type:u16][code:u16][value:i32]
/// ```
/// The timestamp fields are 32-bit on the wire even on 64-bit hosts because
/// the tablet build uses a 32-bit `timeval`.
pub const RAW_RECORD_SIZE: usize = 16;

/// One decoded input event.
///
/// Events are transient: each is produced by the decoder, consumed within a
/// single pipeline step, and never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Wall-clock time the event was recorded on the device.
    pub time: SystemTime,
    /// Event class, one of the `EV_*` constants in [`crate::domain::ecodes`].
    pub event_type: u16,
    /// Event code within the class, e.g. `ABS_X` for `EV_ABS` events.
    pub code: u16,
    /// Event payload.  Meaning depends on type and code: an axis position
    /// for `EV_ABS`, a press/release flag for `EV_KEY`.
    pub value: i32,
}

impl InputEvent {
    /// Decodes one event from a raw 16-byte record.
    pub fn from_raw(buf: &[u8; RAW_RECORD_SIZE]) -> Self {
        let sec = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let usec = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let event_type = u16::from_le_bytes([buf[8], buf[9]]);
        let code = u16::from_le_bytes([buf[10], buf[11]]);
        let value = i32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]);
        Self {
            time: UNIX_EPOCH
                + Duration::from_secs(u64::from(sec))
                + Duration::from_micros(u64::from(usec)),
            event_type,
            code,
            value,
        }
    }
}
