pub mod pool;

pub use pool::{connect, connection_url, shutdown};
