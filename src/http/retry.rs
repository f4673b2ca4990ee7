//! Opt-in retry behavior for HTTP requests.
//!
//! Nothing in the client retries unless the caller asked for it: every
//! endpoint defaults to [`RetryPolicy::None`], and the cache's
//! `QueryOptions::retry` flag is the only thing that switches a query to
//! [`RetryPolicy::Standard`].

use std::time::Duration;

/// Retry decision for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetryPolicy {
    /// Fail on the first error. The default everywhere.
    #[default]
    None,
    /// The stock opt-in behavior: bounded re-attempts on transport
    /// failures and transient server statuses.
    Standard,
    /// Caller-provided configuration.
    Custom(RetryConfig),
}

impl RetryPolicy {
    pub(crate) fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Standard => Some(RetryConfig::default()),
            RetryPolicy::Custom(cfg) => Some(cfg.clone()),
        }
    }
}

/// Bounds and pacing for re-attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Re-attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first re-attempt; doubles each attempt.
    pub base_delay: Duration,
    /// Ceiling on the per-attempt delay.
    pub max_delay: Duration,
    /// Spread delays by ±25% to avoid lockstep re-attempts.
    pub jitter: bool,
    /// Server statuses worth re-attempting.
    pub retry_on: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            jitter: true,
            retry_on: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Delay before re-attempt `attempt` (0-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let doubled = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay);
        if !self.jitter {
            return doubled;
        }
        let millis = doubled.as_millis() as f64;
        let spread = (rand::random::<f64>() - 0.5) * 0.5 * millis;
        Duration::from_millis((millis + spread).max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_none() {
        assert_eq!(RetryPolicy::default(), RetryPolicy::None);
        assert!(RetryPolicy::None.config().is_none());
    }

    #[test]
    fn test_standard_policy_has_bounded_attempts() {
        let cfg = RetryPolicy::Standard.config().unwrap();
        assert_eq!(cfg.max_retries, 2);
        assert!(cfg.retry_on.contains(&503));
    }

    #[test]
    fn test_delay_doubles_without_jitter() {
        let cfg = RetryConfig {
            base_delay: Duration::from_millis(100),
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(cfg.delay_for(0).as_millis(), 100);
        assert_eq!(cfg.delay_for(1).as_millis(), 200);
        assert_eq!(cfg.delay_for(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let cfg = RetryConfig {
            base_delay: Duration::from_millis(400),
            max_delay: Duration::from_millis(500),
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(cfg.delay_for(4).as_millis(), 500);
    }
}
