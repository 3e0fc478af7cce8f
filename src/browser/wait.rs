// src/browser/wait.rs
//
// Bounded, fixed-interval polling. A `Wait` says how long to keep trying and
// which lookup failures count as "not yet" rather than "give up".

use std::thread;
use std::time::{Duration, Instant};

use super::BrowserError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wait {
    timeout: Duration,
    poll: Duration,
    ignore_missing: bool,
    ignore_stale: bool,
}

impl Wait {
    /// One attempt; every failure is reported as-is.
    pub fn none() -> Self {
        Self {
            timeout: Duration::ZERO,
            poll: Duration::ZERO,
            ignore_missing: false,
            ignore_stale: false,
        }
    }

    /// Keep trying for `timeout` while the element is absent.
    pub fn up_to(timeout: Duration, poll: Duration) -> Self {
        Self { timeout, poll, ignore_missing: true, ignore_stale: false }
    }

    /// Also retry through stale references (the table re-renders under us).
    pub fn ignoring_stale(mut self) -> Self {
        self.ignore_stale = true;
        self
    }

    pub fn timeout(&self) -> Duration { self.timeout }

    pub fn ignores(&self, err: &BrowserError) -> bool {
        (self.ignore_missing && err.is_not_found()) || (self.ignore_stale && err.is_stale())
    }

    /// Run `probe` until it yields `Some`, an error this wait does not ignore
    /// occurs, or the timeout elapses. At least one attempt is always made.
    pub fn until<T>(
        &self,
        what: &str,
        mut probe: impl FnMut() -> Result<Option<T>, BrowserError>,
    ) -> Result<T, BrowserError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match probe() {
                Ok(Some(v)) => return Ok(v),
                Ok(None) => {}
                Err(e) if self.ignores(&e) => {
                    // Single-shot waits keep the precise failure.
                    if self.timeout.is_zero() {
                        return Err(e);
                    }
                    logd!("Wait: {what}: {e}; retrying");
                }
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout { what: s!(what), after: self.timeout });
            }
            thread::sleep(self.poll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> Wait {
        Wait::up_to(Duration::from_millis(500), Duration::from_millis(1))
    }

    #[test]
    fn retries_missing_until_found() {
        let mut calls = 0;
        let v = quick()
            .until("x", || {
                calls += 1;
                if calls < 3 { Err(BrowserError::not_found("x")) } else { Ok(Some(calls)) }
            })
            .unwrap();
        assert_eq!(v, 3);
    }

    #[test]
    fn stale_is_fatal_unless_ignored() {
        let err = quick().until::<()>("x", || Err(BrowserError::stale("x"))).unwrap_err();
        assert!(err.is_stale());

        let mut calls = 0;
        let v = quick()
            .ignoring_stale()
            .until("x", || {
                calls += 1;
                if calls == 1 { Err(BrowserError::stale("x")) } else { Ok(Some("ok")) }
            })
            .unwrap();
        assert_eq!(v, "ok");
    }

    #[test]
    fn condition_never_met_times_out() {
        let w = Wait::up_to(Duration::from_millis(20), Duration::from_millis(2));
        let err = w.until::<()>("next page", || Ok(None)).unwrap_err();
        assert!(err.is_timeout());
        assert!(err.to_string().contains("next page"));
    }

    #[test]
    fn zero_timeout_tries_once() {
        let mut calls = 0;
        let err = Wait::up_to(Duration::ZERO, Duration::ZERO)
            .until::<()>("x", || {
                calls += 1;
                Err(BrowserError::not_found("x"))
            })
            .unwrap_err();
        assert_eq!(calls, 1);
        assert!(err.is_not_found());
    }
}
