// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Local, TimeZone};

/// Supplies the instant a screen captures as its reference, together with the timezone
/// that instant is observed in.
pub trait Clock {
    type Tz: TimeZone;

    /// The current instant in the clock's timezone.
    fn now(&self) -> DateTime<Self::Tz>;

    /// The timezone every wall-clock conversion of the screen uses.
    fn timezone(&self) -> Self::Tz {
        self.now().timezone()
    }
}

/// The system clock in the system's current timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn timezone(&self) -> Local {
        Local
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }
}

/// The IANA name of the system timezone, or `"local"` when it cannot be determined.
pub fn local_timezone_name() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(err = %e, "failed to detect system timezone name");
            "local".to_string()
        }
    }
}
