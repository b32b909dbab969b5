//! Generic parameter checks applied before any request reaches the network.

use std::fmt;

use crate::Result;
use crate::error::{NotAllowed, OutOfRange};

/// Checks that `value` lies within the inclusive range `[min, max]`.
pub fn check_in_range<T>(name: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if value < min || value > max {
        return Err(OutOfRange {
            name: name.to_owned(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `value` is a member of the allowed set.
pub fn check_one_of(name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(NotAllowed {
        name: name.to_owned(),
        value: value.to_owned(),
        allowed: allowed.iter().map(|a| (*a).to_owned()).collect(),
    }
    .into())
}
