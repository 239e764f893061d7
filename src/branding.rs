//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, storage keys,
//! CSS namespaces) so the persisted and rendered identifiers live in one place.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Darkup";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "darkup";

/// The directory name for application data (config, option store).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Darkup";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "DARKUP_CONFIG_DIR";

// ============================================================================
// Persisted option keys
// ============================================================================

/// Option store key holding the active selection record.
pub const ACTIVE_SELECTION_KEY: &str = "darkup_active_theme";

/// Option store key holding the mapping of custom palettes.
pub const CUSTOM_PALETTES_KEY: &str = "darkup_custom_themes";

// ============================================================================
// Rendering
// ============================================================================

/// Namespace prefix for every emitted CSS custom property.
pub const CSS_VARIABLE_PREFIX: &str = "--darkup-";

/// `id` attribute of the `<style>` element carrying the theme CSS.
pub const STYLE_ELEMENT_ID: &str = "darkup-theme-styles";

/// Local-storage key the browser widget uses for its last applied mode.
pub const LOCAL_MODE_KEY: &str = "darkup_mode";

/// Local-storage key the browser widget uses for its last applied palette.
pub const LOCAL_THEME_KEY: &str = "darkup_theme";

/// Builds the full custom property name for a role key.
pub fn css_variable(role_key: &str) -> String {
    format!("{CSS_VARIABLE_PREFIX}{role_key}")
}
