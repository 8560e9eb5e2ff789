pub mod metrics;
pub mod stream;

pub use stream::joke_stream;
