pub use super::profile::Entity as Profile;
