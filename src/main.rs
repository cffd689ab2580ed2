// The page behaviors are only driven from the browser build; natively they are
// compiled for their unit tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod effects;
mod menu;
mod notification;
mod reveal;
mod scroll;
mod session;
mod styles;
mod theme;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(error) = backend::run().await {
        eprintln!("server failed: {error}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
