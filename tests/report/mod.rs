//! Whole-suite runs over the demo profile API.

use restcheck::{prelude::*, CaseOutcome, ConfigError};

use crate::util::ProfileSuite;

#[tokio::test]
async fn conforming_api_passes_every_case() -> Result<(), TestError> {
    let report = run_suite(ProfileSuite::new).await;

    assert!(report.is_success(), "failures: {:?}", report.failures());
    assert_eq!(report.passed(), Case::ALL.to_vec());
    assert!(report.not_implemented().is_empty());

    Ok(())
}

/// A suite that cannot be built errors every case instead of aborting the run.
#[tokio::test]
async fn factory_error_is_recorded_per_case() -> Result<(), TestError> {
    let report = run_suite(|| ProfileSuite::with_basename(restcheck_demo::app, " ")).await;

    assert_eq!(report.outcomes.len(), Case::ALL.len());
    for (_, outcome) in &report.outcomes {
        assert!(matches!(
            outcome,
            CaseOutcome::Errored(TestError::Config(ConfigError::InvalidValue { field: "basename", .. }))
        ));
    }
    assert!(!report.is_success());

    Ok(())
}
