//! Header field selection. Each bit independently enables one field of the
//! line header; unset bits contribute no bytes, not placeholders.

use std::ops::BitOr;

/// Combinable field bits. A const-newtype rather than an enum so flag sets can
/// live in statics and builder defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// No header fields at all — lines carry only prefix, tag, and message.
    pub const NONE: Self = Self(0);
    /// The date in `YYYY/MM/DD` form.
    pub const DATE: Self = Self(1);
    /// The time in `HH:MM:SS` form.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution, `HH:MM:SS.123123`. Implies time display.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full file path and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date/time in UTC rather than the local zone.
    pub const UTC: Self = Self(1 << 5);
    /// The conventional default: date and time.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when any bit of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Either caller-location bit asks for the call site.
    #[must_use]
    pub const fn wants_caller(self) -> bool {
        self.intersects(Self::LONG_FILE.union(Self::SHORT_FILE))
    }

    /// Any clock bit asks for a timestamp.
    #[must_use]
    pub const fn wants_clock(self) -> bool {
        self.intersects(Self::DATE.union(Self::TIME).union(Self::MICROSECONDS))
    }

    /// Config files name flags in lowercase.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "date" => Some(Self::DATE),
            "time" => Some(Self::TIME),
            "microseconds" => Some(Self::MICROSECONDS),
            "longfile" => Some(Self::LONG_FILE),
            "shortfile" => Some(Self::SHORT_FILE),
            "utc" => Some(Self::UTC),
            _ => None,
        }
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}
