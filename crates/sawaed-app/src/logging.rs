//! Subscriber setup.
//!
//! Native hosts get a fmt subscriber on stderr. The browser build formats the
//! same way without timestamps and writes each event to the devtools console
//! at its level.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Directive used when the configured one does not parse.
pub const DEFAULT_DIRECTIVE: &str = "sawaed=info";

/// Parses `directive`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn directive(directive: &str) -> Directive {
    directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_DIRECTIVE}");
        DEFAULT_DIRECTIVE
            .parse()
            .expect("default directive is valid")
    })
}

fn filter(config_directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(directive(config_directive))
}

/// Installs a fmt subscriber filtered by `RUST_LOG` plus `directive`.
///
/// Returns `false` if a global subscriber was already set; the existing one
/// is kept.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
pub fn init(directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(console::Console)
        .with_ansi(false)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct Console;

    /// One formatted event, flushed to the console when dropped.
    pub struct Line {
        level: Level,
        buf: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for Console {
        type Writer = Line;

        fn make_writer(&'a self) -> Line {
            Line {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Line {
            Line {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }

    impl io::Write for Line {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for Line {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let text = JsValue::from_str(text.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&text),
                Level::WARN => web_sys::console::warn_1(&text),
                Level::INFO => web_sys::console::info_1(&text),
                _ => web_sys::console::debug_1(&text),
            }
        }
    }
}
