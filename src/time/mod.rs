pub mod error;
pub mod timeunit;

use crate::time::error::Error;
use crate::time::timeunit::DurationUnit;
use std::time::Duration;

/// Parses operator-supplied duration flags. Bare integers are seconds,
/// suffixed values follow the `DurationUnit` grammar.
pub fn parse_duration(value: &str) -> Result<Duration, Error> {
    value.parse::<DurationUnit>().map(Into::into)
}
