//! Recovery policies for failures of sub-operations inside a request.
//!
//! A handler either degrades a failed lookup to an empty value
//! ([`DegradeToDefault`]) or keeps the item it was resolving and fills it from
//! what is already known ([`PartialResultTolerant`]). Neither policy lets the
//! failure reach the caller; both log it.

use std::fmt::Display;

/// Replaces a failed result with `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DegradeToDefault;

impl DegradeToDefault {
    pub fn recover<T, E>(&self, operation: &str, result: Result<T, E>) -> T
    where
        T: Default,
        E: Display,
    {
        result.unwrap_or_else(|e| {
            tracing::error!("{} failed, degrading to default: {}", operation, e);
            T::default()
        })
    }
}

/// Replaces a failed per-item result with a fallback built for that item.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialResultTolerant;

impl PartialResultTolerant {
    pub fn recover<T, E, F>(&self, item: &str, result: Result<T, E>, fallback: F) -> T
    where
        E: Display,
        F: FnOnce() -> T,
    {
        result.unwrap_or_else(|e| {
            tracing::warn!("Lookup for {} failed, keeping partial result: {}", item, e);
            fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrade_to_default_returns_default_on_error() {
        let result: Result<Vec<u64>, &str> = Err("rpc unavailable");
        assert!(DegradeToDefault.recover("fee fetch", result).is_empty());
    }

    #[test]
    fn degrade_to_default_passes_values_through() {
        let result: Result<Vec<u64>, &str> = Ok(vec![1, 2]);
        assert_eq!(DegradeToDefault.recover("fee fetch", result), vec![1, 2]);
    }

    #[test]
    fn partial_result_tolerant_uses_fallback_only_on_error() {
        let ok: Result<u32, &str> = Ok(7);
        assert_eq!(PartialResultTolerant.recover("sig", ok, || 0), 7);

        let err: Result<u32, &str> = Err("timeout");
        assert_eq!(PartialResultTolerant.recover("sig", err, || 42), 42);
    }
}
