//! Integration tests for mood-quotes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mood_quotes::{
    AppConfig, Catalog, CatalogErrorKind, CliOverrides, Mood, MoodApp, MoodQuotesError,
    OutputFormat, Quote, SelectionController, SelectionPhase, ShowConfig, Validatable,
    cli::{render_catalog, render_moods, render_show},
    tui::handle_key_event,
};

fn ids(selection: &SelectionController<'_>) -> Option<u32> {
    selection.current_quote().map(Quote::id)
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_builtin_catalog_matches_published_table() {
    let catalog = Catalog::builtin();
    let expected: [(Mood, [u32; 2]); 5] = [
        (Mood::Happy, [1, 2]),
        (Mood::Sad, [3, 4]),
        (Mood::Stressed, [5, 6]),
        (Mood::Tired, [7, 8]),
        (Mood::Motivated, [9, 10]),
    ];
    for (mood, want) in expected {
        let got: Vec<u32> = catalog.lookup(mood).iter().map(Quote::id).collect();
        assert_eq!(got, want, "quote ids for {mood}");
    }
    assert_eq!(catalog.len(), 10);
    assert!(catalog.validate().is_ok());
}

#[test]
fn test_lookup_is_stable() {
    let catalog = Catalog::builtin();
    for mood in Mood::ALL {
        assert_eq!(catalog.lookup(mood), catalog.lookup(mood));
    }
    assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
}

#[test]
fn test_find_by_id() {
    let (mood, quote) = Catalog::builtin().find(6).unwrap();
    assert_eq!(mood, Mood::Stressed);
    assert_eq!(quote.author(), "Theodore Roosevelt");
    assert!(Catalog::builtin().find(11).is_none());
}

#[test]
fn test_builder_rejects_duplicate_ids_across_moods() {
    let err = Catalog::builder()
        .quote(Mood::Happy, Quote::new(7, "one", "a"))
        .quote(Mood::Tired, Quote::new(7, "two", "b"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        MoodQuotesError::Catalog {
            source: CatalogErrorKind::DuplicateId { id: 7 },
            ..
        }
    ));
}

// ============================================================================
// Selection scenarios
// ============================================================================

#[test]
fn test_default_state_cycles_happy_quotes() {
    let mut selection = SelectionController::new(Catalog::builtin());
    assert_eq!(selection.selected_mood(), Mood::Happy);
    assert_eq!(selection.current_index(), 0);
    assert_eq!(ids(&selection), Some(1));

    selection.advance_quote();
    assert_eq!(ids(&selection), Some(2));

    selection.advance_quote();
    assert_eq!(ids(&selection), Some(1));
}

#[test]
fn test_switching_mood_resets_index() {
    let mut selection = SelectionController::new(Catalog::builtin());
    selection.advance_quote();
    assert_eq!(selection.current_index(), 1);

    selection.select_mood(Mood::Sad);
    assert_eq!(selection.selected_mood(), Mood::Sad);
    assert_eq!(selection.current_index(), 0);
    assert_eq!(ids(&selection), Some(3));
}

#[test]
fn test_reselecting_same_mood_resets_index() {
    let mut selection = SelectionController::new(Catalog::builtin());
    selection.select_mood(Mood::Tired);
    selection.advance_quote();
    assert_eq!(ids(&selection), Some(8));

    selection.select_mood(Mood::Tired);
    assert_eq!(selection.current_index(), 0);
    assert_eq!(ids(&selection), Some(7));
}

#[test]
fn test_empty_mood_is_a_valid_state() {
    let catalog = Catalog::builder()
        .quote(Mood::Happy, Quote::new(1, "only happy", "x"))
        .build()
        .unwrap();
    let mut selection = SelectionController::new(&catalog);
    selection.select_mood(Mood::Stressed);
    assert_eq!(selection.phase(), SelectionPhase::Empty);
    assert!(selection.current_quote().is_none());

    let before = selection.state();
    selection.advance_quote();
    assert_eq!(selection.state(), before);
}

#[test]
fn test_view_reflects_selection() {
    let mut selection = SelectionController::new(Catalog::builtin());
    selection.select_mood(Mood::Motivated);
    selection.advance_quote();

    let view = selection.view();
    assert_eq!(view.selected_mood, Mood::Motivated);
    assert_eq!(view.quote.map(Quote::id), Some(10));
    assert_eq!(view.position.map(|p| p.to_string()), Some("2/2".to_string()));
    assert!(view.can_advance);
    assert_eq!(view.moods.iter().filter(|m| m.selected).count(), 1);
}

// ============================================================================
// Interactive session
// ============================================================================

fn press(app: &mut MoodApp<'_>, code: KeyCode) {
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_key_driven_session() {
    let mut app = MoodApp::new(Catalog::builtin());
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.selection.current_quote().map(Quote::id), Some(2));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.selection.selected_mood(), Mood::Sad);
    assert_eq!(app.selection.current_quote().map(Quote::id), Some(3));

    press(&mut app, KeyCode::Right);
    assert_eq!(app.selection.selected_mood(), Mood::Stressed);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_next_on_single_quote_mood_leaves_status() {
    let catalog = Catalog::builder()
        .quote(Mood::Happy, Quote::new(1, "alone", "x"))
        .build()
        .unwrap();
    let mut app = MoodApp::new(&catalog);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.selection.current_index(), 0);
    assert_eq!(app.status.peek(), Some("Only one quote for this mood"));
}

// ============================================================================
// Command output
// ============================================================================

#[test]
fn test_show_text_output() {
    let config = ShowConfig {
        mood: Some(Mood::Stressed),
        advance: 1,
        ..ShowConfig::default()
    };
    let text = render_show(Catalog::builtin(), &config, OutputFormat::Text, false).unwrap();
    assert!(text.contains("[Stressed 😓]"));
    assert!(text.contains("Do what you can, with what you have, where you are."));
    assert!(text.contains("— Theodore Roosevelt"));
}

#[test]
fn test_moods_and_catalog_json_agree() {
    let moods: serde_json::Value =
        serde_json::from_str(&render_moods(Catalog::builtin(), OutputFormat::Json).unwrap())
            .unwrap();
    let catalog: serde_json::Value =
        serde_json::from_str(&render_catalog(Catalog::builtin(), OutputFormat::Json).unwrap())
            .unwrap();

    for (summary, entry) in moods
        .as_array()
        .unwrap()
        .iter()
        .zip(catalog.as_array().unwrap())
    {
        assert_eq!(summary["mood"], entry["mood"]);
        assert_eq!(
            summary["quote_count"].as_u64(),
            entry["quotes"].as_array().map(|q| q.len() as u64)
        );
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_overrides() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("custom.yaml");
    std::fs::write(&path, "tui:\n  theme: light\n  tick_rate_ms: 100\n").unwrap();

    let overrides = CliOverrides {
        mouse_enabled: Some(false),
        ..CliOverrides::default()
    };
    let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.tick_rate_ms, 100);
    assert!(!config.tui.mouse_enabled);
    assert!(config.is_valid());
}

#[test]
fn test_theme_flag_wins_over_file_even_when_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("light.yaml");
    std::fs::write(&path, "tui:\n  theme: light\n").unwrap();

    let overrides = CliOverrides {
        theme: Some("dark".to_string()),
        ..CliOverrides::default()
    };
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(config.tui.theme, "dark");

    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &CliOverrides::default());
    assert_eq!(config.tui.theme, "light");
}

#[test]
fn test_invalid_config_reports_fields() {
    let config = AppConfig::builder().theme("neon").tick_rate_ms(1).build();
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["tui.theme", "tui.tick_rate_ms"]);
}

// ============================================================================
// Binary
// ============================================================================

/// Run the built binary inside `dir`, isolated from the user's config.
fn mood_quotes_in(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_mood-quotes"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("MOOD_QUOTES_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_failed_command_exits_with_three() {
    let tmp = tempfile::TempDir::new().unwrap();
    let target = tmp.path().join("missing-dir").join("quote.txt");
    let output = mood_quotes_in(
        tmp.path(),
        &["show", "--mood", "sad", "-O", target.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: "));
}

#[test]
fn test_quiet_config_init_is_silent() {
    let tmp = tempfile::TempDir::new().unwrap();

    let output = mood_quotes_in(tmp.path(), &["--quiet", "config", "init"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(tmp.path().join(".mood-quotes.yaml").exists());

    let schema = tmp.path().join("schema.json");
    let output = mood_quotes_in(
        tmp.path(),
        &["-q", "config", "schema", "-o", schema.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(schema.exists());
}

#[test]
fn test_config_init_reports_created_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = mood_quotes_in(tmp.path(), &["config", "init"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Created"));
}
