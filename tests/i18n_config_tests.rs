use std::collections::HashMap;
use std::path::PathBuf;

use tsjel_engine::domain::{get_game_config, HandType, TeamSlot};
use tsjel_engine::engine::EngineError;
use tsjel_engine::i18n::{
    format_message, substitute, translate, Language, MessageKey, TextDirection,
};
use tsjel_engine::infra::{localized_game_name, localized_hand_type};
use tsjel_engine::{AppConfig, ConfigError};

/// Утилита: источник переменных окружения из пар.
fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ----------------------
// переводы
// ----------------------

#[test]
fn arabic_is_right_to_left() {
    assert_eq!(Language::Ar.direction(), TextDirection::RightToLeft);
    assert!(Language::Ar.is_rtl());
    assert!(!Language::En.is_rtl());
    assert_eq!(Language::En.toggled(), Language::Ar);
}

#[test]
fn language_parses_from_code() {
    assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
    assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
    assert!("fr".parse::<Language>().is_err());
}

#[test]
fn placeholders_are_substituted() {
    let text = format_message(
        Language::En,
        MessageKey::WinsWithScore,
        &[("name", "Team 1"), ("score", "152")],
    );
    assert_eq!(text, "Team 1 wins with 152 points!");

    assert_eq!(substitute("{a} and {b}", &[("a", "x")]), "x and {b}");
}

#[test]
fn arabic_translation_is_used_when_present() {
    assert_eq!(translate(Language::Ar, MessageKey::Win), "فوز");
    assert_eq!(
        format_message(Language::Ar, MessageKey::TeamWins, &[("name", "الصقور")]),
        "الصقور يفوز!"
    );
}

#[test]
fn missing_arabic_key_falls_back_to_english() {
    assert_eq!(
        translate(Language::Ar, MessageKey::NoWinner),
        translate(Language::En, MessageKey::NoWinner)
    );
}

#[test]
fn engine_errors_are_localized() {
    assert_eq!(
        EngineError::InvalidRoundInput(TeamSlot::Second).localize(Language::En),
        "Please enter a valid number for Team 2"
    );
    assert_eq!(
        EngineError::InvalidPlayerIndex(4).localize(Language::En),
        "There is no Player 5"
    );
    assert_eq!(
        EngineError::EmptyRound.localize(Language::Ar),
        "يرجى إدخال نقطة واحدة على الأقل"
    );
}

#[test]
fn game_and_hand_type_names() {
    let hand = get_game_config("hand").unwrap();
    assert_eq!(localized_game_name(Language::En, hand), "Hand");
    assert_eq!(localized_game_name(Language::Ar, hand), "هند");
    assert_eq!(localized_hand_type(Language::En, HandType::TwoJokersColored), "2 Jokers + Colored");
    assert_eq!(localized_hand_type(Language::Ar, HandType::Zat), "زات");
}

// ----------------------
// конфигурация
// ----------------------

#[test]
fn empty_environment_gives_defaults() {
    let config = AppConfig::from_lookup(env_of(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.data_dir, PathBuf::from(".tsjel"));
    assert_eq!(config.language, Language::En);
    assert_eq!(config.interstitial_every, 3);
    assert_eq!(config.history_limit, 50);
}

#[test]
fn environment_overrides_defaults() {
    let config = AppConfig::from_lookup(env_of(&[
        ("TSJEL_DATA_DIR", "/tmp/tsjel"),
        ("TSJEL_LANG", "ar"),
        ("TSJEL_INTERSTITIAL_EVERY", "5"),
        ("TSJEL_HISTORY_LIMIT", " 10 "),
    ]))
    .unwrap();

    assert_eq!(config.language, Language::Ar);
    assert_eq!(config.interstitial_every, 5);
    assert_eq!(config.history_limit, 10);
    assert_eq!(config.scores_path(), PathBuf::from("/tmp/tsjel/scores.json"));
    assert_eq!(config.history_path(), PathBuf::from("/tmp/tsjel/history.json"));
}

#[test]
fn invalid_values_are_reported_with_the_variable() {
    let err = AppConfig::from_lookup(env_of(&[("TSJEL_INTERSTITIAL_EVERY", "often")])).unwrap_err();
    match err {
        ConfigError::InvalidVar { var, value, .. } => {
            assert_eq!(var, "TSJEL_INTERSTITIAL_EVERY");
            assert_eq!(value, "often");
        }
    }

    assert!(AppConfig::from_lookup(env_of(&[("TSJEL_LANG", "de")])).is_err());
}
