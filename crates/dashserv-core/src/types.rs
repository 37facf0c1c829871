//! Closed-set enumerations accepted by the dashserv API.
//!
//! Each set is validated at call time: the wire string must match a member
//! exactly (case-sensitive).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A fixed set of wire strings.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Name of the set used in error messages.
    const LABEL: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Wire representation of this member.
    fn as_str(&self) -> &'static str;

    /// Comma-separated list of valid wire strings.
    #[must_use]
    fn expected() -> String {
        Self::all()
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Look a wire string up in the set.
    #[must_use]
    fn lookup(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|member| member.as_str() == value)
    }
}

/// Generates a closed-set enum together with its string conversions.
macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident, $label:literal {
        $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl ClosedSet for $name {
            const LABEL: &'static str = $label;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::lookup(s).ok_or_else(|| {
                    Error::Validation(format!(
                        "{} must be one of {} (got `{s}`)",
                        Self::LABEL,
                        Self::expected()
                    ))
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_string())
            }
        }
    };
}

closed_set!(
    /// Recurrence of a scheduled task.
    Interval, "interval" {
        /// Every day
        Daily => "DAILY",
        /// Every two days
        TwoDays => "TWODAYS",
        /// Every three days
        ThreeDays => "THREEDAYS",
        /// Every week
        Weekly => "WEEKLY",
        /// Every two weeks
        TwoWeeks => "TWOWEEKS",
        /// Every month
        Monthly => "MONTHLY",
        /// Every two months
        TwoMonths => "TWOMONTHS",
        /// Every three months
        ThreeMonths => "THREEMONTHS",
        /// Every six months
        SixMonths => "SIXMONTHS",
        /// Every year
        Yearly => "YEARLY",
    }
);

closed_set!(
    /// Action executed by a scheduled task.
    Command, "command" {
        /// Graceful restart
        Restart => "RESTART",
        /// Create a backup
        Backup => "BACKUP",
        /// Graceful shutdown
        Shutdown => "SHUTDOWN",
        /// Boot the vserver
        Start => "START",
    }
);

closed_set!(
    /// Window of the usage graphs.
    TimeFrame, "timeframe" {
        /// Last hour
        Hour => "hour",
        /// Last day
        Day => "day",
        /// Last week
        Week => "week",
        /// Last month
        Month => "month",
        /// Last year
        Year => "year",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_round_trip_names() {
        assert_eq!(Interval::all().len(), 10);
        for interval in Interval::all() {
            assert_eq!(interval.as_str().parse::<Interval>().unwrap(), *interval);
        }
        assert_eq!(Interval::SixMonths.to_string(), "SIXMONTHS");
    }

    #[test]
    fn test_command_set() {
        assert_eq!(Command::expected(), "RESTART, BACKUP, SHUTDOWN, START");
        assert_eq!("BACKUP".parse::<Command>().unwrap(), Command::Backup);
    }

    #[test]
    fn test_timeframe_is_lowercase() {
        assert_eq!(TimeFrame::Week.as_str(), "week");
        assert!("WEEK".parse::<TimeFrame>().is_err());
    }

    #[test]
    fn test_unknown_value_lists_set() {
        let err = "NEVER".parse::<Interval>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: interval must be one of DAILY, TWODAYS, THREEDAYS, WEEKLY, \
             TWOWEEKS, MONTHLY, TWOMONTHS, THREEMONTHS, SIXMONTHS, YEARLY (got `NEVER`)"
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_value(Interval::TwoWeeks).unwrap(), "TWOWEEKS");
        let frame: TimeFrame = serde_json::from_value(Value::from("month")).unwrap();
        assert_eq!(frame, TimeFrame::Month);
        assert_eq!(Value::from(Command::Start), Value::from("START"));
    }
}
