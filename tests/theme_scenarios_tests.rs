//! End-to-end theme flows through the public library API.

use darkup::error::PaletteError;
use darkup::models::{
    ActiveSelection, ColorRole, PaletteOrigin, ThemeMode, DEFAULT_PALETTE_ID,
};
use darkup::render::ThemeRenderer;
use darkup::services::{activate, SelectionStore, ThemeResolver};
use darkup::storage::{FileStore, OptionStore};
use std::sync::Arc;

mod fixtures;
use fixtures::*;

#[test]
fn test_create_fills_missing_roles_with_defaults() {
    let (storage, catalog) = memory_context();
    let store = palette_store(storage, catalog);

    let palette = store
        .create("Test", &colors(&[("background", "#000000")]), ThemeMode::Dark)
        .unwrap();

    assert_eq!(palette.colors.get(ColorRole::Background).as_str(), "#000000");
    for role in ColorRole::ALL.iter().copied().filter(|r| *r != ColorRole::Background) {
        assert_eq!(
            palette.colors.get(role).as_str(),
            role.default_hex(),
            "role {} should carry its default",
            role.key()
        );
    }
    assert_eq!(palette.colors.get(ColorRole::Text).as_str(), "#ffffff");
    assert_eq!(palette.id, "custom-test-1735689600");
}

#[test]
fn test_create_with_empty_name_leaves_store_unchanged() {
    let (storage, catalog) = memory_context();
    let store = palette_store(storage.clone(), catalog);
    store
        .create("Keep", &colors(&[("text", "#eee")]), ThemeMode::Dark)
        .unwrap();
    let before = storage.get(darkup::branding::CUSTOM_PALETTES_KEY).unwrap();

    let result = store.create("", &colors(&[("background", "#000")]), ThemeMode::Dark);

    assert!(matches!(result, Err(PaletteError::Validation(_))));
    assert_eq!(storage.get(darkup::branding::CUSTOM_PALETTES_KEY).unwrap(), before);
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_removing_active_custom_palette_resolves_to_default() {
    let (storage, catalog) = memory_context();
    let store = palette_store(storage.clone(), catalog.clone());
    let selection = SelectionStore::new(storage.clone());
    let resolver = ThemeResolver::new(storage, catalog);

    let created = store
        .create("X", &colors(&[("primary", "#123456")]), ThemeMode::Light)
        .unwrap();
    selection
        .save(&ActiveSelection::new(PaletteOrigin::Custom, &created.id, ThemeMode::Dark))
        .unwrap();
    assert_eq!(resolver.resolve_active().unwrap().palette.id, created.id);

    assert!(store.remove(&created.id).unwrap());

    let resolved = resolver.resolve_active().unwrap();
    assert_eq!(resolved.palette.id, DEFAULT_PALETTE_ID);
    assert_eq!(resolved.palette.origin, PaletteOrigin::Builtin);
    assert_eq!(resolved.mode, ThemeMode::Auto);
}

#[test]
fn test_removing_inactive_palette_keeps_selection() {
    let (storage, catalog) = memory_context();
    let store = palette_store(storage.clone(), catalog);
    let selection = SelectionStore::new(storage);

    let created = store
        .create("Spare", &colors(&[("accent", "#abc")]), ThemeMode::Dark)
        .unwrap();
    let chosen = ActiveSelection::new(PaletteOrigin::Builtin, "forest", ThemeMode::Light);
    selection.save(&chosen).unwrap();

    assert!(store.remove(&created.id).unwrap());
    assert_eq!(selection.current(), chosen);
}

#[test]
fn test_auto_mode_emits_light_override() {
    let (storage, catalog) = memory_context();
    let renderer = ThemeRenderer::new(storage, catalog);

    let css = renderer.stylesheet().unwrap();

    assert_eq!(css.matches(":root {").count(), 2);
    let media = css.find("@media (prefers-color-scheme: light)").unwrap();
    assert!(css.find(":root {").unwrap() < media);
    assert!(css[media..].contains("--darkup-background: #ffffff;"));
    assert!(css.trim_end().ends_with("}"));
    assert!(css.contains("body {"));
}

#[test]
fn test_dark_mode_emits_single_block() {
    let (storage, catalog) = memory_context();
    SelectionStore::new(storage.clone())
        .save(&ActiveSelection::new(PaletteOrigin::Builtin, "midnight-blue", ThemeMode::Dark))
        .unwrap();

    let css = ThemeRenderer::new(storage, catalog).stylesheet().unwrap();
    assert_eq!(css.matches(":root {").count(), 1);
    assert!(!css.contains("@media"));
}

#[test]
fn test_state_survives_reopening_file_store() {
    let (store, temp_dir) = temp_file_store();
    let (_, catalog) = memory_context();
    activate(store.clone(), catalog.clone()).unwrap();

    let created = palette_store(store.clone(), catalog.clone())
        .create("Persisted", &colors(&[("border", "#333333")]), ThemeMode::Dark)
        .unwrap();
    SelectionStore::new(store)
        .save(&ActiveSelection::new(PaletteOrigin::Custom, &created.id, ThemeMode::Light))
        .unwrap();

    let reopened: Arc<dyn OptionStore> =
        Arc::new(FileStore::new(temp_dir.path().join("options.json")));
    let resolved = ThemeResolver::new(reopened, catalog).resolve_active().unwrap();
    assert_eq!(resolved.palette.name, "Persisted");
    assert_eq!(resolved.palette.colors.get(ColorRole::Border).as_str(), "#333333");
    assert_eq!(resolved.mode, ThemeMode::Light);

    let raw = read_options_file(temp_dir.path());
    assert_eq!(raw["darkup_active_theme"]["type"], "custom");
    assert!(raw["darkup_custom_themes"][&created.id].is_object());
}

#[test]
fn test_hand_edited_options_file_is_tolerated() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = write_options_file(
        temp_dir.path(),
        &serde_json::json!({
            "darkup_active_theme": {"type": "custom", "id": "custom-a-1", "mode": "dark"},
            "darkup_custom_themes": {
                "custom-a-1": {
                    "id": "custom-a-1",
                    "name": "A",
                    "type": "custom",
                    "mode": "dark",
                    "colors": {"background": "not-a-color", "text": "#EEE"}
                },
                "broken": 42
            }
        }),
    );

    let (_, catalog) = memory_context();
    let storage: Arc<dyn OptionStore> = Arc::new(FileStore::new(path));
    let resolved = ThemeResolver::new(storage, catalog).resolve_active().unwrap();

    assert_eq!(resolved.palette.colors.get(ColorRole::Background).as_str(), "#1a1a1a");
    assert_eq!(resolved.palette.colors.get(ColorRole::Text).as_str(), "#EEE");
}
