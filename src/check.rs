//! Assertion recorder built on descriptors.
//!
//! [`Checks`] collects failures instead of panicking at the first one, so a
//! single run reports every broken expectation. Comparisons go through an
//! [`Eq`] descriptor and failures are rendered through a [`Show`]
//! descriptor, never through `PartialEq` or `Debug`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::check::{Checks, run};
//! use lambars_dict::instances::Native;
//!
//! let native = Native::<i32>::new();
//! let mut checks = Checks::new("arithmetic");
//! checks.assert_eq("addition", &native, &native, &(1 + 1), &2);
//! checks.assert_eq("subtraction", &native, &native, &(3 - 1), &2);
//! run(checks);
//! ```

use std::error::Error;
use std::fmt;

use log::{debug, error};

use crate::descriptor::{Eq, Show};

/// One failed assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckFailure {
    /// Zero-based position of the assertion among all recorded assertions.
    pub index: usize,
    /// The label passed to the assertion.
    pub label: String,
    /// `"<label>: expected <right>, found <left>"`.
    pub message: String,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {}", self.index, self.message)
    }
}

impl Error for CheckFailure {}

/// Every failure of a [`Checks`] run, in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckFailures {
    /// The name of the check group.
    pub name: String,
    /// How many assertions were recorded in total.
    pub performed: usize,
    /// The failed assertions.
    pub failures: Vec<CheckFailure>,
}

impl fmt::Display for CheckFailures {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {} of {} checks failed",
            self.name,
            self.failures.len(),
            self.performed
        )?;
        for failure in &self.failures {
            write!(formatter, "\n  {failure}")?;
        }
        Ok(())
    }
}

impl Error for CheckFailures {}

/// A named group of recorded assertions.
#[derive(Debug, Clone, Default)]
pub struct Checks {
    name: String,
    performed: usize,
    failures: Vec<CheckFailure>,
}

impl Checks {
    /// Starts an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            performed: 0,
            failures: Vec::new(),
        }
    }

    /// Records whether `left` equals `right` under `equality`.
    ///
    /// Appends exactly one failure when they differ and nothing otherwise.
    /// Returns whether the assertion held.
    pub fn assert_eq<E, S>(
        &mut self,
        label: &str,
        equality: &E,
        show: &S,
        left: &E::Carrier,
        right: &E::Carrier,
    ) -> bool
    where
        E: Eq,
        S: Show<Carrier = E::Carrier>,
    {
        let holds = equality.eq(left, right);
        if !holds {
            let message = format!(
                "{label}: expected {}, found {}",
                show.show(right),
                show.show(left)
            );
            self.record_failure(label, message);
        }
        self.performed += 1;
        holds
    }

    /// Records whether `condition` holds.
    pub fn assert_true(&mut self, label: &str, condition: bool) -> bool {
        if !condition {
            self.record_failure(label, format!("{label}: expected true, found false"));
        }
        self.performed += 1;
        condition
    }

    /// The failures recorded so far.
    pub fn failures(&self) -> &[CheckFailure] {
        &self.failures
    }

    /// How many assertions were recorded so far.
    pub const fn performed(&self) -> usize {
        self.performed
    }

    /// Closes the group.
    ///
    /// # Errors
    ///
    /// Returns every recorded failure when at least one assertion failed.
    pub fn finish(self) -> Result<(), CheckFailures> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(CheckFailures {
                name: self.name,
                performed: self.performed,
                failures: self.failures,
            })
        }
    }

    fn record_failure(&mut self, label: &str, message: String) {
        debug!("{}: {message}", self.name);
        self.failures.push(CheckFailure {
            index: self.performed,
            label: label.to_string(),
            message,
        });
    }
}

/// Closes `checks`, aborting with a multi-line report if anything failed.
///
/// # Panics
///
/// Panics with the [`CheckFailures`] report when at least one assertion
/// failed.
#[track_caller]
pub fn run(checks: Checks) {
    if let Err(failures) = checks.finish() {
        error!("{failures}");
        panic!("{failures}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Native, ResultEq, ResultShow};
    use rstest::rstest;

    #[rstest]
    fn passing_assertions_record_nothing() {
        let native = Native::<&str>::new();
        let mut checks = Checks::new("strings");
        assert!(checks.assert_eq("same", &native, &native, &"a", &"a"));
        assert_eq!(checks.performed(), 1);
        assert!(checks.failures().is_empty());
        assert_eq!(checks.finish(), Ok(()));
    }

    #[rstest]
    fn failing_assertion_records_one_message() {
        let eq = ResultEq::new(Native::<i32>::new(), Native::<String>::new());
        let show = ResultShow::new(Native::<i32>::new(), Native::<String>::new());
        let mut checks = Checks::new("results");
        assert!(!checks.assert_eq("parse", &eq, &show, &Err("nope".to_string()), &Ok(3)));
        assert_eq!(checks.failures().len(), 1);
        assert_eq!(checks.failures()[0].message, "parse: expected Ok(3), found Err(nope)");
    }

    #[rstest]
    fn report_lists_failures_in_call_order() {
        let native = Native::<i32>::new();
        let mut checks = Checks::new("numbers");
        checks.assert_eq("first", &native, &native, &1, &2);
        checks.assert_eq("second", &native, &native, &5, &5);
        checks.assert_true("third", false);

        let report = checks.finish().unwrap_err();
        assert_eq!(
            report.to_string(),
            "numbers: 2 of 3 checks failed\n  [0] first: expected 2, found 1\n  [2] third: expected true, found false"
        );
    }

    #[rstest]
    #[should_panic(expected = "numbers: 1 of 1 checks failed")]
    fn run_panics_on_failure() {
        let native = Native::<i32>::new();
        let mut checks = Checks::new("numbers");
        checks.assert_eq("only", &native, &native, &0, &1);
        run(checks);
    }
}
