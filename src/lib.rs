pub mod careers;
pub mod cli;
pub mod fetch;
pub mod filter;
pub mod input;
pub mod jsonld;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod types;

pub use fetch::PageFetcher;
pub use filter::ExperienceRules;
pub use pipeline::Pipeline;
pub use providers::{Provider, ProviderRegistry};
pub use types::{Company, Job, RawJob};
