//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:  green  (matching costs, connected graphs)
//!   - Warning:  yellow (disconnected input warnings)
//!   - Error:    red    (failed runs, cost mismatches)
//!   - Info:     cyan   (engine banners)
//!   - Muted:    dimmed (field labels)
//!   - Emphasis: bold   (graph headers, section titles)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
#[must_use]
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
#[must_use]
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
#[must_use]
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
#[must_use]
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply dimmed style to text (for field labels).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control::set_override;
    use std::sync::{Mutex, MutexGuard};

    static GLOBAL_STATE_MUTEX: Mutex<()> = Mutex::new(());

    struct ColorGuard<'a> {
        _guard: MutexGuard<'a, ()>,
    }

    impl<'a> ColorGuard<'a> {
        fn new() -> Self {
            let guard = GLOBAL_STATE_MUTEX.lock().unwrap();
            set_override(true);
            Self { _guard: guard }
        }
    }

    impl Drop for ColorGuard<'_> {
        fn drop(&mut self) {
            set_override(false);
        }
    }

    fn with_colors_enabled<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ColorGuard::new();
        f()
    }

    #[test]
    fn semantic_colors_emit_ansi_codes() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(true);

            let s = success("done", &config);
            assert!(s.contains("done"));
            assert!(s.contains("\x1b["), "success should have ANSI codes");

            let e = error("fail", &config);
            assert!(e.contains("fail"));
            assert!(e.contains("\x1b["), "error should have ANSI codes");

            let w = warning("caution", &config);
            assert!(w.contains("caution"));
            assert!(w.contains("\x1b["), "warning should have ANSI codes");

            let i = info("note", &config);
            assert!(i.contains("note"));
            assert!(i.contains("\x1b["), "info should have ANSI codes");
        });
    }

    #[test]
    fn semantic_colors_pass_through_without_colors() {
        let config = OutputConfig::new(false);

        assert_eq!(success("done", &config), "done");
        assert_eq!(error("fail", &config), "fail");
        assert_eq!(warning("caution", &config), "caution");
        assert_eq!(info("note", &config), "note");
    }

    #[test]
    fn styles_emit_ansi_codes() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(true);

            let b = bold("Header", &config);
            assert!(b.contains("Header"));
            assert!(b.contains("\x1b["), "bold should have ANSI codes");

            let d = dimmed("Label:", &config);
            assert!(d.contains("Label:"));
            assert!(d.contains("\x1b["), "dimmed should have ANSI codes");
        });
    }

    #[test]
    fn styles_pass_through_without_colors() {
        let config = OutputConfig::new(false);

        assert_eq!(bold("Header", &config), "Header");
        assert_eq!(dimmed("Label:", &config), "Label:");
    }
}
