//! Unit tests for output styling module

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::output::{OutputContext, Styles};
    use owo_colors::OwoColorize;

    // --- Styles tests ---

    #[test]
    fn test_styles_default_has_no_colors() {
        let styles = Styles::default();
        let text = "test";
        let styled = text.style(styles.success);
        assert_eq!(format!("{styled}"), text);
    }

    #[test]
    fn test_styles_colorize_applies_colors() {
        let mut styles = Styles::default();
        styles.colorize();
        let styled = format!("{}", "test".style(styles.success));
        assert!(styled.contains("\x1b["), "should contain ANSI escape code");
        assert!(styled.contains("32"), "should contain green color code");
    }

    #[test]
    fn test_styles_colorize_sets_distinct_styles() {
        let mut styles = Styles::default();
        styles.colorize();
        let text = "x";
        let success = format!("{}", text.style(styles.success));
        let warning = format!("{}", text.style(styles.warning));
        let error = format!("{}", text.style(styles.error));
        assert_ne!(success, warning);
        assert_ne!(warning, error);
    }

    // --- OutputContext construction tests ---

    #[test]
    fn test_output_context_no_color_flag_disables_colors() {
        let ctx = OutputContext::new(true, false);
        let styled = format!("{}", "test".style(ctx.styles.success));
        assert!(
            !styled.contains("\x1b["),
            "should not contain ANSI codes when no_color=true"
        );
    }

    #[test]
    fn test_output_context_quiet_flag_sets_quiet() {
        let ctx = OutputContext::new(false, true);
        assert!(ctx.quiet);
    }
}
