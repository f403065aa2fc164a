//! Input event type and code constants for the pen digitizer, with
//! human-readable names for debug output.
//!
//! The numeric values are standardized by the Linux kernel's
//! `input-event-codes.h`.  Only the subset the digitizer actually produces is
//! named here; the lookup functions return `None` for anything else and the
//! caller falls back to the numeric value.

// ── Event types ───────────────────────────────────────────────────────────────

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_REL: u16 = 0x02;
pub const EV_ABS: u16 = 0x03;
pub const EV_MSC: u16 = 0x04;

// ── Absolute axis codes (EV_ABS) ──────────────────────────────────────────────

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_PRESSURE: u16 = 0x18;
pub const ABS_DISTANCE: u16 = 0x19;
pub const ABS_TILT_X: u16 = 0x1a;
pub const ABS_TILT_Y: u16 = 0x1b;

// ── Key codes (EV_KEY) for the digitizer tools ────────────────────────────────

/// Pen tip is in proximity; exits secondary (eraser) mode.
pub const BTN_TOOL_PEN: u16 = 0x140;
/// Eraser end is in proximity; enters secondary (eraser) mode.
pub const BTN_TOOL_RUBBER: u16 = 0x141;
pub const BTN_TOUCH: u16 = 0x14a;
pub const BTN_STYLUS: u16 = 0x14b;
pub const BTN_STYLUS2: u16 = 0x14c;

// ── Sync codes (EV_SYN) ───────────────────────────────────────────────────────

pub const SYN_REPORT: u16 = 0x00;

/// Returns the symbolic name of an event type, if it is one we know.
pub fn type_name(event_type: u16) -> Option<&'static str> {
    match event_type {
        EV_SYN => Some("EV_SYN"),
        EV_KEY => Some("EV_KEY"),
        EV_REL => Some("EV_REL"),
        EV_ABS => Some("EV_ABS"),
        EV_MSC => Some("EV_MSC"),
        _ => None,
    }
}

/// Returns the symbolic name of an event code within its type, if known.
///
/// Codes are only meaningful relative to their type (`0x00` is both `ABS_X`
/// and `SYN_REPORT`), so the type is required for the lookup.
pub fn code_name(event_type: u16, code: u16) -> Option<&'static str> {
    match event_type {
        EV_SYN => match code {
            SYN_REPORT => Some("SYN_REPORT"),
            _ => None,
        },
        EV_KEY => match code {
            BTN_TOOL_PEN => Some("BTN_TOOL_PEN"),
            BTN_TOOL_RUBBER => Some("BTN_TOOL_RUBBER"),
            BTN_TOUCH => Some("BTN_TOUCH"),
            BTN_STYLUS => Some("BTN_STYLUS"),
            BTN_STYLUS2 => Some("BTN_STYLUS2"),
            _ => None,
        },
        EV_ABS => match code {
            ABS_X => Some("ABS_X"),
            ABS_Y => Some("ABS_Y"),
            ABS_PRESSURE => Some("ABS_PRESSURE"),
            ABS_DISTANCE => Some("ABS_DISTANCE"),
            ABS_TILT_X => Some("ABS_TILT_X"),
            ABS_TILT_Y => Some("ABS_TILT_Y"),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_types_and_codes() {
        assert_eq!(type_name(EV_ABS), Some("EV_ABS"));
        assert_eq!(code_name(EV_ABS, ABS_PRESSURE), Some("ABS_PRESSURE"));
        assert_eq!(code_name(EV_KEY, BTN_TOOL_RUBBER), Some("BTN_TOOL_RUBBER"));
    }

    #[test]
    fn code_lookup_depends_on_type() {
        // 0x00 is ABS_X under EV_ABS but SYN_REPORT under EV_SYN.
        assert_eq!(code_name(EV_ABS, 0x00), Some("ABS_X"));
        assert_eq!(code_name(EV_SYN, 0x00), Some("SYN_REPORT"));
    }

    #[test]
    fn unknown_values_return_none() {
        assert_eq!(type_name(0x1f), None);
        assert_eq!(code_name(EV_ABS, 0x3f), None);
    }
}
