//! Console logging for the browser host.
//!
//! On `wasm32` these forward to `web_sys::console`; native builds (tests,
//! tooling) have no JS console to talk to, so the macros only type-check their
//! arguments.

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
