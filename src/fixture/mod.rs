pub mod builder;
pub mod context;

pub use builder::TestBuilder;
pub use context::TestContext;
