#[cfg(not(any(feature = "no-wasm", feature = "wasm")))]
compile_error!("enable either the `no-wasm` or the `wasm` feature");

pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
#[cfg(feature = "no-wasm")]
pub mod logger;
pub mod model;
pub mod routes;

#[cfg(feature = "no-wasm")]
pub use client::request::NoWasmClient;
#[cfg(feature = "wasm")]
pub use client::gloo::WasmClient;
#[cfg(feature = "no-wasm")]
pub use tokio;
