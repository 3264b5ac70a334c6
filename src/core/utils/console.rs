//! Console logging
//!
//! In the browser lines go to `console.log` through web-sys.
//! Native builds hand the line to the `log` facade, so host tools pick
//! their own logger.
//!
//! ```rust
//! use verlet_engine::console_log;
//!
//! let particles = 17_000;
//! console_log!("spawned {} particles", particles);
//! ```

pub use log::Level;

/// Format and emit one log line.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::console::write_line($crate::core::utils::console::Level::Info, &format!($($arg)*));
    }};
}

/// Debug-build-only variant of `console_log!` for hot-ish paths
/// (grid rebuilds, stream exhaustion).
#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::core::utils::console::write_line($crate::core::utils::console::Level::Debug, &format!($($arg)*));
        }
    }};
}

#[doc(hidden)]
pub fn write_line(level: log::Level, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match level {
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::log!(target: "verlet_engine", level, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    struct Capture(Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.target() == "verlet_engine" {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push((record.level(), record.args().to_string()));
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn macros_forward_to_log_facade() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let radius = 3.5f32;
        crate::console_log!("reset with radius {:.1}", radius);
        crate::console_debug!("grid rebuilt for {} particles", 10);

        let lines = CAPTURE.0.lock().expect("capture lock");
        assert!(lines.contains(&(log::Level::Info, "reset with radius 3.5".to_string())));
        if cfg!(debug_assertions) {
            assert!(lines.contains(&(log::Level::Debug, "grid rebuilt for 10 particles".to_string())));
        }
    }
}
