use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^(?P<value>\d+)(?P<unit>ns|us|ms|s|m|h|d)?$").expect("Regex compilation error");
}

pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, PartialEq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanosecond),
            "us" => Ok(TimeUnit::Microsecond),
            "ms" => Ok(TimeUnit::Millisecond),
            "s" => Ok(TimeUnit::Second),
            "m" => Ok(TimeUnit::Minute),
            "h" => Ok(TimeUnit::Hour),
            "d" => Ok(TimeUnit::Day),
            unit => Err(Error::UnitNotSupported(unit.to_owned())),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX
            .captures(s)
            .ok_or_else(|| Error::Syntax(format!("'{}' is not a valid duration value", s)))?;
        let value = caps
            .name("value")
            .and_then(|v| v.as_str().parse().ok())
            .ok_or_else(|| Error::Syntax(format!("'{}' is not a valid duration value", s)))?;
        // Unit-less values are seconds, matching the CLI contract.
        let unit = match caps.name("unit") {
            Some(unit) => unit.as_str().parse::<TimeUnit>()?,
            None => TimeUnit::Second,
        };
        Ok(Self { value, unit })
    }
}

impl From<DurationUnit> for Duration {
    fn from(duration: DurationUnit) -> Self {
        match duration.unit {
            TimeUnit::Nanosecond => Duration::from_nanos(duration.value),
            TimeUnit::Microsecond => Duration::from_micros(duration.value),
            TimeUnit::Millisecond => Duration::from_millis(duration.value),
            TimeUnit::Second => Duration::from_secs(duration.value),
            TimeUnit::Minute => Duration::from_secs(duration.value * 60),
            TimeUnit::Hour => Duration::from_secs(duration.value * 3600),
            TimeUnit::Day => Duration::from_secs(duration.value * 86400),
        }
    }
}
