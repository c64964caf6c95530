mod filesystem;
mod loader;
mod model;
mod suite;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{LOCAL_SUITE_NAME, LoadedSuite, SuiteLoader, USER_SUITE_NAME};
pub use model::{
    CheckSpec, CheckSpecDetail, MetricConfig, PolicyKind, RunConfig, SUITE_VERSION, SuiteConfig,
    TestConfig,
};
pub use validation::{pattern_warnings, validate_suite_semantics};
