//! Run errors

use std::fmt;
use thiserror::Error;

/// The step of an iteration in which a callback failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Untimed input preparation
    Pre,
    /// The timed work step
    Work,
    /// Untimed cleanup or verification
    Post,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Pre => "pre",
            Phase::Work => "work",
            Phase::Post => "post",
        };
        f.write_str(name)
    }
}

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum RunError<E> {
    /// The measured run count was zero
    #[error("number of runs must be at least 1")]
    NoRuns,

    /// A callback returned an error; the run was abandoned
    #[error("{phase} step failed")]
    Step {
        /// Which callback failed
        phase: Phase,
        /// The callback's own error, unchanged
        #[source]
        source: E,
    },
}

impl<E> RunError<E> {
    /// The phase that failed, if a callback failed
    pub fn phase(&self) -> Option<Phase> {
        match self {
            RunError::NoRuns => None,
            RunError::Step { phase, .. } => Some(*phase),
        }
    }

    /// Recover the callback's error
    pub fn into_source(self) -> Option<E> {
        match self {
            RunError::NoRuns => None,
            RunError::Step { source, .. } => Some(source),
        }
    }

    pub(crate) fn step(phase: Phase) -> impl FnOnce(E) -> Self {
        move |source| RunError::Step { phase, source }
    }
}
