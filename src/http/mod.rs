pub mod client;

pub use client::RetryingClient;
