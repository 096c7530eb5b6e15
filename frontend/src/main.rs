//! Entry point for the WASM application

pub fn main() {
    patch_frontend::start();
}
