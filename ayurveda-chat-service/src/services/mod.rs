pub mod error;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use error::ChatError;
pub use prompt::build_prompt;
pub use providers::{ProviderError, ProviderResponse, TextProvider};
