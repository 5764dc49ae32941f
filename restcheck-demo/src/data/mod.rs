pub mod profile;

pub use profile::ProfileRepository;
