//! Binary entrypoint for the browser-hosted slider showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    showcase_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `showcase_app` for wasm32 with the `csr` feature."
    );
}
