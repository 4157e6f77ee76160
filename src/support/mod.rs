//! Cross-cutting runtime support

pub mod shutdown;

pub use shutdown::ShutdownSignal;
