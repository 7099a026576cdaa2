use rpawogen::charset::{CharacterClass, URL_SAFE_CHARACTERS};
use rpawogen::commands::password_gen::{GenOptions, build_form, generate_into};
use rpawogen::shell::PasswordForm;
use rpawogen::configtool::GenConfig;
use rpawogen::notify::Notification;
use rpawogen::passgen::IndexSampling;

#[test]
fn test_config_defaults_apply_without_flags() {
    let mut config = GenConfig::default();
    config.set_value("uppercase", "false").unwrap();
    config.set_value("length", "14").unwrap();

    let form = build_form(&GenOptions::default(), &config).unwrap();
    assert_eq!(form.length(), 14);
    assert!(form.is_included(CharacterClass::Numbers));
    assert!(!form.is_included(CharacterClass::Uppercase));
    assert!(form.is_included(CharacterClass::Lowercase));
    assert!(form.is_included(CharacterClass::Symbols));
}

#[test]
fn test_class_flags_replace_configured_set() {
    let options = GenOptions { numbers: true, length: Some(8), ..Default::default() };
    let mut form = build_form(&options, &GenConfig::default()).unwrap();
    assert_eq!(form.selection().enabled_classes(), vec![CharacterClass::Numbers]);

    let mut notes: Vec<Notification> = Vec::new();
    let password = form.generate(&mut notes).unwrap();
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_url_safe_and_sampling_override() {
    let options = GenOptions {
        symbols: true,
        url_safe: true,
        sampling: Some(IndexSampling::Modulo),
        ..Default::default()
    };
    let mut form = build_form(&options, &GenConfig::default()).unwrap();
    assert_eq!(form.sampling(), IndexSampling::Modulo);

    let mut notes: Vec<Notification> = Vec::new();
    let password = form.generate(&mut notes).unwrap();
    assert!(password.chars().all(|c| URL_SAFE_CHARACTERS.contains(c)));
}

#[test]
fn test_out_of_range_length_is_refused() {
    let options = GenOptions { length: Some(30), ..Default::default() };
    assert!(build_form(&options, &GenConfig::default()).is_err());
}

#[test]
fn test_failed_generation_is_reported_once() {
    let mut form = PasswordForm::new();
    let mut notes: Vec<Notification> = Vec::new();
    let err = generate_into(&mut form, &mut notes).unwrap_err();

    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert!(!err.to_string().contains(&notes[0].message));
}

#[test]
fn test_generate_into_returns_stored_password() {
    let mut form = PasswordForm::new();
    form.set_included(CharacterClass::Numbers, true);
    let mut notes: Vec<Notification> = Vec::new();
    let password = generate_into(&mut form, &mut notes).unwrap();
    assert_eq!(form.password(), Some(password.as_str()));
}
