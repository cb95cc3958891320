pub mod emitter;
pub mod metrics;

pub use emitter::QueryEventEmitter;
pub use metrics::ServerMetrics;
