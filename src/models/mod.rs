// Domain models: stored samples, counter selector, upstream wire format, API payloads

mod api;
mod sample;
mod upstream;

pub use api::{ApiStats, CounterStats};
pub use sample::{Counter, Counters, Sample};
pub use upstream::{UpstreamRecord, UpstreamStats};
