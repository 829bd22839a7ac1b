pub mod sink;

mod metrics;

pub use metrics::RegistryMetrics;
pub use sink::{ChangeEvent, EventSink, MemorySink, NullSink};
