//! Integration tests for incoming-player normalization: field coercions.

use scoreboard_web::Player;
use serde_json::json;

#[test]
fn well_formed_player_passes_through_with_name_trimmed() {
    let p = Player::from_raw(&json!({"id": "a", "name": "  Ana ", "wins": 2, "points": 6}));
    assert_eq!(p.id, "a");
    assert_eq!(p.name, "Ana");
    assert_eq!(p.wins, 2);
    assert_eq!(p.points, 6);
}

#[test]
fn missing_or_non_string_id_becomes_empty() {
    assert_eq!(Player::from_raw(&json!({"name": "Ana"})).id, "");
    assert_eq!(Player::from_raw(&json!({"id": 5, "name": "Ana"})).id, "");
    assert_eq!(Player::from_raw(&json!({"id": null, "name": "Ana"})).id, "");
}

#[test]
fn numeric_name_is_rendered_and_other_names_become_empty() {
    assert_eq!(Player::from_raw(&json!({"name": 42})).name, "42");
    assert_eq!(Player::from_raw(&json!({"name": null})).name, "");
    assert_eq!(Player::from_raw(&json!({})).name, "");
}

#[test]
fn numeric_strings_count() {
    let p = Player::from_raw(&json!({"wins": "3", "points": " 10 "}));
    assert_eq!(p.wins, 3);
    assert_eq!(p.points, 10);
}

#[test]
fn non_numeric_counters_default_to_zero() {
    let p = Player::from_raw(&json!({"wins": "muitas", "points": {}}));
    assert_eq!(p.wins, 0);
    assert_eq!(p.points, 0);
}

#[test]
fn negative_counters_pass_through_uncorrected() {
    let p = Player::from_raw(&json!({"wins": -3, "points": -1}));
    assert_eq!(p.wins, -3);
    assert_eq!(p.points, -1);
}

#[test]
fn fractional_counters_truncate_toward_zero() {
    let p = Player::from_raw(&json!({"wins": 2.9, "points": -1.5}));
    assert_eq!(p.wins, 2);
    assert_eq!(p.points, -1);
}

#[test]
fn non_object_element_normalizes_to_blank_player() {
    let p = Player::from_raw(&json!(7));
    assert_eq!(p.id, "");
    assert_eq!(p.name, "");
    assert_eq!(p.wins, 0);
    assert_eq!(p.points, 0);
}
