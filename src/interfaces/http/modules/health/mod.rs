//! Health module — service liveness probe

pub mod handlers;

pub use handlers::*;
