//! Logging that lands in the browser console on wasm and in the `log`
//! facade everywhere else (tests, native hosts).

#[doc(hidden)]
pub fn __info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("{}", msg);
}

#[doc(hidden)]
pub fn __warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("{}", msg);
}

/// `console_log!("cols={}", cols)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::__info(&format!($($arg)*))
    };
}

/// `console_warn!("clamped {}", name)`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::__warn(&format!($($arg)*))
    };
}
