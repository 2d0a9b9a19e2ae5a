//! Browser entry point for the portfolio site.
//!
//! HTML side:
//!   <script type="module">
//!     import init from "./folio-web-dom.js";
//!     init();
//!   </script>
//!
//! Everything else happens in `wasm_start`: logging, flags, and wiring every
//! page behavior once the document is parsed.

#![cfg_attr(target_arch = "wasm32", no_main)]

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use wasm_bindgen::prelude::*;

        use folio_site::{debug, dom, flags::SiteFlags};

        #[wasm_bindgen(start)]
        pub fn wasm_start() {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::default());
            debug::init_from_url_and_storage_once();

            let flags = SiteFlags::from_url();
            log::info!("[site] starting with {flags:?}");
            if let Err(e) = dom::init(flags) {
                log::error!("[site] init failed: {e:#}");
            }
        }
    } else {
        // Native builds: just provide a stub main so `cargo build --all-features` doesn't explode.
        fn main() {
            eprintln!("folio-web-dom is only supported on wasm32 (browser) target.");
        }
    }
}
