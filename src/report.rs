//! Running a whole suite and classifying its outcomes.

use std::future::Future;

use crate::{
    error::{FailureKind, TestError},
    suite::{Case, CrudSuite, OwnershipCrud},
};

/// Result of one case.
#[derive(Debug)]
pub enum CaseOutcome {
    Passed,
    /// The resource suite did not override this case.
    NotImplemented,
    /// The API under test failed an assertion.
    Failed(TestError),
    /// The case could not run (routing, configuration, persistence...).
    Errored(TestError),
}

impl From<Result<(), TestError>> for CaseOutcome {
    fn from(result: Result<(), TestError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(err) => match err.kind() {
                FailureKind::NotImplemented => Self::NotImplemented,
                FailureKind::Assertion => Self::Failed(err),
                FailureKind::Error => Self::Errored(err),
            },
        }
    }
}

/// Outcomes of a suite run, in case order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<(Case, CaseOutcome)>,
}

impl SuiteReport {
    pub fn outcome(&self, case: Case) -> Option<&CaseOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == case)
            .map(|(_, outcome)| outcome)
    }

    pub fn passed(&self) -> Vec<Case> {
        self.cases_where(|outcome| matches!(outcome, CaseOutcome::Passed))
    }

    pub fn not_implemented(&self) -> Vec<Case> {
        self.cases_where(|outcome| matches!(outcome, CaseOutcome::NotImplemented))
    }

    /// Failed assertions and errors.
    pub fn failures(&self) -> Vec<(Case, &TestError)> {
        self.outcomes
            .iter()
            .filter_map(|(case, outcome)| match outcome {
                CaseOutcome::Failed(err) | CaseOutcome::Errored(err) => Some((*case, err)),
                _ => None,
            })
            .collect()
    }

    /// No case failed or errored; unimplemented cases are tolerated.
    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    fn cases_where(&self, predicate: impl Fn(&CaseOutcome) -> bool) -> Vec<Case> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .map(|(case, _)| *case)
            .collect()
    }
}

/// Run every case, each against a suite freshly built by `factory`.
///
/// A new suite per case keeps cases isolated when the factory provisions its own database.
/// A factory error is recorded as that case's outcome.
pub async fn run_suite<T, F, Fut>(mut factory: F) -> SuiteReport
where
    T: OwnershipCrud,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TestError>>,
{
    let mut report = SuiteReport::default();

    for case in Case::ALL {
        let result = match factory().await {
            Ok(suite) => suite.run(case).await,
            Err(err) => Err(err),
        };

        let outcome = CaseOutcome::from(result);
        match &outcome {
            CaseOutcome::Passed => tracing::info!(case = %case, "Case passed"),
            CaseOutcome::NotImplemented => tracing::warn!(case = %case, "Case not implemented"),
            CaseOutcome::Failed(err) => tracing::error!(case = %case, "Case failed: {}", err),
            CaseOutcome::Errored(err) => tracing::error!(case = %case, "Case errored: {}", err),
        }

        report.outcomes.push((case, outcome));
    }

    report
}
