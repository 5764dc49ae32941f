//! Profile resource wiring shared by the integration tests.

mod profile;

pub use profile::{ProfileStore, ProfileSuite};
