#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(client::app::App);
}

// Browser entry point only; native builds compile the library for tests.
#[cfg(not(feature = "csr"))]
fn main() {}
