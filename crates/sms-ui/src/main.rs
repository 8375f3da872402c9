#![forbid(unsafe_code)]
#![warn(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]
//! Bundled entry for the page helpers.
//!
//! Templates usually load the library build and call `runPage()`; this binary does the same
//! when the crate is bundled as a standalone app.

#[cfg(target_arch = "wasm32")]
fn main() {
    sms_ui::run_page();
}

/// Shown when the binary runs outside a browser, where there is no page to wire.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "sms-ui wires server-rendered pages and only does anything in a \
browser. Build it with `wasm-pack build crates/sms-ui --target web`, import the module from \
the base template and call `runPage()`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(NATIVE_HINT.as_bytes())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_hint(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn hint_explains_the_browser_build() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_hint(&mut out)?;
        let hint = String::from_utf8_lossy(&out);
        assert!(hint.starts_with("sms-ui "));
        assert!(hint.contains("--target web"));
        assert!(hint.contains("runPage()"));
        Ok(())
    }
}
