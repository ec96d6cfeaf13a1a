/*!
 * Process Input Validation
 * Range and shape checks applied before a process enters a set
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::MAX_TICKS;
use crate::core::types::{ProcessName, SchedulerResult, Ticks};

/// Validate a process name
pub(super) fn validate_name(name: &str) -> SchedulerResult<ProcessName> {
    if name.is_empty() {
        return Err(SchedulerError::validation("process name cannot be empty"));
    }
    Ok(ProcessName::from(name))
}

/// Validate an arrival time
pub(super) fn validate_arrival(arrival: i64) -> SchedulerResult<Ticks> {
    if arrival > MAX_TICKS {
        return Err(SchedulerError::validation(format!(
            "arrival must be at most {MAX_TICKS}, got {arrival}"
        )));
    }
    Ticks::try_from(arrival).map_err(|_| {
        SchedulerError::validation(format!("arrival must be non-negative, got {arrival}"))
    })
}

/// Validate a CPU burst
pub(super) fn validate_burst(burst: i64) -> SchedulerResult<Ticks> {
    if burst <= 0 {
        return Err(SchedulerError::validation(format!(
            "burst must be positive, got {burst}"
        )));
    }
    if burst > MAX_TICKS {
        return Err(SchedulerError::validation(format!(
            "burst must be at most {MAX_TICKS}, got {burst}"
        )));
    }
    Ok(burst as Ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("").is_err());
        assert_eq!(validate_name("  ").unwrap(), "  ");
        assert_eq!(validate_name("P1").unwrap(), "P1");
    }

    #[test]
    fn test_arrival_validation() {
        assert_eq!(validate_arrival(0).unwrap(), 0);
        assert_eq!(validate_arrival(7).unwrap(), 7);
        assert!(validate_arrival(-1).is_err());
        assert_eq!(validate_arrival(MAX_TICKS).unwrap(), MAX_TICKS as Ticks);
        assert!(validate_arrival(MAX_TICKS + 1).is_err());
        assert!(validate_arrival(i64::MAX).is_err());
    }

    #[test]
    fn test_burst_validation() {
        assert!(validate_burst(0).is_err());
        assert!(validate_burst(-3).is_err());
        assert_eq!(validate_burst(1).unwrap(), 1);
        assert_eq!(validate_burst(MAX_TICKS).unwrap(), MAX_TICKS as Ticks);
        assert!(validate_burst(MAX_TICKS + 1).is_err());
    }
}
