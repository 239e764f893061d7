//! Theme CSS generation.

use std::sync::Arc;

use super::{Declaration, Rule, Stylesheet};
use crate::branding::css_variable;
use crate::catalog::PaletteCatalog;
use crate::models::{ColorRole, ColorSet, ResolvedTheme, ThemeMode, LIGHT_PALETTE_ID};

/// Media condition gating the light override in auto mode.
pub const LIGHT_PREFERENCE_QUERY: &str = "(prefers-color-scheme: light)";

/// Turns a resolved theme into CSS custom properties.
#[derive(Debug, Clone)]
pub struct CssEmitter {
    catalog: Arc<PaletteCatalog>,
}

impl CssEmitter {
    /// Creates an emitter that takes the auto-mode light palette from `catalog`.
    pub fn new(catalog: Arc<PaletteCatalog>) -> Self {
        Self { catalog }
    }

    /// Builds the stylesheet for `resolved`.
    ///
    /// 1. `:root` with one custom property per role, in role order.
    /// 2. Auto mode only, and only if the catalog has the built-in light
    ///    palette: the same properties with light colors, gated by
    ///    [`LIGHT_PREFERENCE_QUERY`].
    /// 3. A `body` rule applying background and text with `!important`.
    pub fn stylesheet(&self, resolved: &ResolvedTheme) -> Stylesheet {
        let mut sheet = Stylesheet::new();
        sheet.rule(root_variables(&resolved.palette.colors));

        if resolved.mode == ThemeMode::Auto {
            if let Some(light) = self.catalog.get(LIGHT_PALETTE_ID) {
                sheet.media(LIGHT_PREFERENCE_QUERY, vec![root_variables(&light.colors)]);
            }
        }

        sheet.rule(
            Rule::new("body")
                .declare(
                    Declaration::new("background-color", var(ColorRole::Background)).important(),
                )
                .declare(Declaration::new("color", var(ColorRole::Text)).important()),
        );

        sheet
    }

    /// Renders the CSS text for `resolved`. Deterministic.
    pub fn emit(&self, resolved: &ResolvedTheme) -> String {
        self.stylesheet(resolved).render()
    }
}

fn root_variables(colors: &ColorSet) -> Rule {
    Rule::new(":root").declare_all(
        colors
            .iter()
            .map(|(role, color)| Declaration::new(css_variable(role.key()), color.as_str())),
    )
}

fn var(role: ColorRole) -> String {
    format!("var({})", css_variable(role.key()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Palette, PaletteOrigin, DEFAULT_PALETTE_ID};

    fn resolved(mode: ThemeMode) -> ResolvedTheme {
        let catalog = PaletteCatalog::builtin();
        ResolvedTheme {
            palette: catalog.get(DEFAULT_PALETTE_ID).unwrap().clone(),
            mode,
        }
    }

    fn emitter() -> CssEmitter {
        CssEmitter::new(Arc::new(PaletteCatalog::builtin()))
    }

    const DARK_ROOT: &str = ":root {
  --darkup-background: #1a1a1a;
  --darkup-surface: #2d2d2d;
  --darkup-text: #ffffff;
  --darkup-text-secondary: #b0b0b0;
  --darkup-primary: #4a9eff;
  --darkup-secondary: #ff6b6b;
  --darkup-accent: #ffd93d;
  --darkup-border: #404040;
  --darkup-success: #6bcf7f;
  --darkup-warning: #ffb84d;
  --darkup-error: #ff5252;
}
";

    const BODY_RULE: &str = "body {
  background-color: var(--darkup-background) !important;
  color: var(--darkup-text) !important;
}
";

    #[test]
    fn test_dark_mode_output() {
        let css = emitter().emit(&resolved(ThemeMode::Dark));
        assert_eq!(css, format!("{DARK_ROOT}\n{BODY_RULE}"));
    }

    #[test]
    fn test_light_mode_has_no_media_block() {
        let css = emitter().emit(&resolved(ThemeMode::Light));
        assert!(!css.contains("@media"));
        assert_eq!(css.matches(":root").count(), 1);
    }

    #[test]
    fn test_auto_mode_output() {
        let css = emitter().emit(&resolved(ThemeMode::Auto));
        let light_block = "@media (prefers-color-scheme: light) {
  :root {
    --darkup-background: #ffffff;
    --darkup-surface: #f5f5f5;
    --darkup-text: #1a1a1a;
    --darkup-text-secondary: #666666;
    --darkup-primary: #2196f3;
    --darkup-secondary: #f44336;
    --darkup-accent: #ffc107;
    --darkup-border: #e0e0e0;
    --darkup-success: #4caf50;
    --darkup-warning: #ff9800;
    --darkup-error: #f44336;
  }
}
";
        assert_eq!(css, format!("{DARK_ROOT}\n{light_block}\n{BODY_RULE}"));
    }

    #[test]
    fn test_auto_mode_without_light_palette_omits_block() {
        let catalog = PaletteCatalog::builtin();
        let only_dark: Vec<Palette> = catalog
            .all()
            .iter()
            .filter(|p| p.id != LIGHT_PALETTE_ID)
            .cloned()
            .collect();
        let emitter = CssEmitter::new(Arc::new(PaletteCatalog::with_palettes(only_dark)));

        let css = emitter.emit(&resolved(ThemeMode::Auto));
        assert_eq!(css, format!("{DARK_ROOT}\n{BODY_RULE}"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let emitter = emitter();
        let theme = resolved(ThemeMode::Auto);
        assert_eq!(emitter.emit(&theme), emitter.emit(&theme));
    }

    #[test]
    fn test_custom_palette_values_used() {
        let mut theme = resolved(ThemeMode::Dark);
        theme.palette.origin = PaletteOrigin::Custom;
        theme.palette.colors = ColorSet::from_raw([("primary", "#ABCDEF")]);

        let css = emitter().emit(&theme);
        assert!(css.contains("  --darkup-primary: #ABCDEF;\n"));
        assert!(css.contains("  --darkup-background: #1a1a1a;\n"));
    }

    #[test]
    fn test_stylesheet_structure() {
        let sheet = emitter().stylesheet(&resolved(ThemeMode::Auto));
        assert_eq!(sheet.blocks().len(), 3);
        assert!(matches!(
            &sheet.blocks()[1],
            super::super::Block::Media { condition, .. } if condition == LIGHT_PREFERENCE_QUERY
        ));
    }
}
