//! Entry point for the WASM application

pub fn main() {
    comment_analyzer::start();
}
