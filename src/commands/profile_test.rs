use super::*;
use std::io::Cursor;
use tempfile::TempDir;

fn create_test_registry() -> (ProfileRegistry, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let registry = ProfileRegistry::in_dir(temp_dir.path());
    (registry, temp_dir)
}

// ========================================
// confirm_remove
// ========================================

#[test]
fn test_confirm_remove_accepts_yes() {
    for answer in ["y\n", "Y\n", "yes\n", "YES\n"] {
        let mut input = Cursor::new(answer);
        assert!(confirm_remove("Marie", &mut input).unwrap(), "{answer:?}");
    }
}

#[test]
fn test_confirm_remove_defaults_to_no() {
    for answer in ["\n", "n\n", "nope\n", ""] {
        let mut input = Cursor::new(answer);
        assert!(!confirm_remove("Marie", &mut input).unwrap(), "{answer:?}");
    }
}

// ========================================
// run_remove
// ========================================

#[test]
fn test_run_remove_cancelled_keeps_profile() {
    let (mut registry, _temp_dir) = create_test_registry();
    let mut input = Cursor::new("n\n");

    run_remove(&mut registry, "1", false, &mut input).unwrap();
    assert_eq!(registry.list().unwrap().len(), 2);
}

#[test]
fn test_run_remove_confirmed_deletes_profile() {
    let (mut registry, _temp_dir) = create_test_registry();
    let mut input = Cursor::new("y\n");

    run_remove(&mut registry, "1", false, &mut input).unwrap();
    let profiles = registry.list().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, "2");
}

#[test]
fn test_run_remove_with_yes_skips_prompt() {
    let (mut registry, _temp_dir) = create_test_registry();
    let mut input = Cursor::new("");

    run_remove(&mut registry, "2", true, &mut input).unwrap();
    assert!(registry.get("2").is_err());
}

#[test]
fn test_run_remove_unknown_profile_is_error() {
    let (mut registry, _temp_dir) = create_test_registry();
    let mut input = Cursor::new("y\n");

    let err = run_remove(&mut registry, "42", false, &mut input).unwrap_err();
    assert!(err.contains("42"));
}

// ========================================
// run_add / goals_table
// ========================================

#[test]
fn test_run_add_persists_profile() {
    let (mut registry, _temp_dir) = create_test_registry();
    let input = NewProfile {
        name: "Léa".to_string(),
        sex: Sex::Femme,
        weight_kg: 58.0,
        overrides: GoalOverrides {
            omega_3: Some(1200.0),
            ..GoalOverrides::default()
        },
    };

    run_add(&mut registry, input).unwrap();
    let profile = registry.get("3").unwrap();
    assert_eq!(profile.goals.omega_3, 1200.0);
    assert_eq!(profile.goals.fer, 16.0);
}

#[test]
fn test_run_add_rejects_invalid_weight() {
    let (mut registry, _temp_dir) = create_test_registry();
    let input = NewProfile {
        name: "Léa".to_string(),
        sex: Sex::Femme,
        weight_kg: -1.0,
        overrides: GoalOverrides::default(),
    };

    let err = run_add(&mut registry, input).unwrap_err();
    assert!(err.contains("Weight"));
}

#[test]
fn test_goals_table_lists_four_nutrients() {
    let (mut registry, _temp_dir) = create_test_registry();
    let profile = registry.get("1").unwrap();
    let rendered = goals_table(&profile).to_string();

    for id in ["omega_3", "vitamine_d", "magnesium", "fer"] {
        assert!(rendered.contains(id), "missing {id}");
    }
    assert!(rendered.contains("+500"));
    assert!(rendered.contains("150%"));
    assert!(rendered.contains("Status"));
}

#[test]
fn test_format_status_shows_capped_percent() {
    let status = format_status(goal_status(2000.0, 1000.0));
    assert!(status.contains("150%"));
    assert!(!status.contains("200%"));

    let status = format_status(goal_status(900.0, 1000.0));
    assert!(status.contains("90%"));
}

#[test]
fn test_format_difference() {
    assert_eq!(format_difference(500.0), "+500");
    assert_eq!(format_difference(-1.5), "-1.5");
    assert_eq!(format_difference(0.0), "=");
}

// ========================================
// Args
// ========================================

#[test]
fn test_add_args_parse() {
    let args = Args::try_parse_from([
        "profile", "add", "Paul", "--sex", "homme", "--weight", "75", "--iron", "12",
    ])
    .unwrap();

    match args.command {
        Command::Add {
            name, sex, weight, iron, omega3, ..
        } => {
            assert_eq!(name, "Paul");
            assert_eq!(sex, Sex::Homme);
            assert_eq!(weight, 75.0);
            assert_eq!(iron, Some(12.0));
            assert_eq!(omega3, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_add_args_require_weight() {
    assert!(Args::try_parse_from(["profile", "add", "Paul"]).is_err());
}
