//! Suite cases against the demo profile API, healthy and faulty.

mod fault;
mod scenario;

mod profile {
    use crate::util::ProfileSuite;

    restcheck::ownership_crud_tests!(ProfileSuite::new());
}
