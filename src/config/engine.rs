//! Engine configuration

use serde::Deserialize;
use std::thread;

use super::error::ValidationError;

/// Upper bound on the engine pool size.
const MAX_WORKER_THREADS: usize = 256;

/// Scoring engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Pool size; half the available cores (at least 2) when unset
    pub worker_threads: Option<usize>,
}

impl EngineConfig {
    /// Configured pool size, or the default
    pub fn worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(default_worker_threads)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.worker_threads {
            Some(n) if n == 0 || n > MAX_WORKER_THREADS => {
                Err(ValidationError::InvalidWorkerThreads {
                    max: MAX_WORKER_THREADS,
                    actual: n,
                })
            }
            _ => Ok(()),
        }
    }
}

/// `max(ceil(cpus / 2), 2)`
pub fn default_worker_threads() -> usize {
    let cpus = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus.div_ceil(2).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_at_least_two_threads() {
        assert!(EngineConfig::default().worker_threads() >= 2);
    }

    #[test]
    fn test_configured_threads_win() {
        let config = EngineConfig {
            worker_threads: Some(3),
        };
        assert_eq!(config.worker_threads(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threads_is_invalid() {
        let config = EngineConfig {
            worker_threads: Some(0),
        };
        assert!(config.validate().is_err());
    }
}
