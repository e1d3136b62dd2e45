use chrono::{Local, NaiveDate};
use pretty_assertions::assert_eq;

use user_service::app::resource::user::UserInput;
use user_service::app::use_case::user::validation::{birth_date_in_past, validate};
use user_service::domain::entity::{user::User, user::UserState, Entity};
use user_service::error::resource::ValidationFault;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn input(name: Option<&str>, birth_date: Option<NaiveDate>) -> UserInput {
    UserInput {
        id: None,
        name: name.map(String::from),
        birth_date,
    }
}

#[test]
fn missing_name_is_rejected() {
    let fault = validate(&input(None, Some(date(1990, 1, 1)))).unwrap_err();

    assert_eq!(fault, ValidationFault::NameRequired);
    assert_eq!(fault.to_string(), "Name is required");
}

#[test]
fn empty_name_is_rejected() {
    let fault = validate(&input(Some(""), Some(date(1990, 1, 1)))).unwrap_err();

    assert_eq!(fault, ValidationFault::NameRequired);
}

#[test]
fn missing_birth_date_is_rejected() {
    let fault = validate(&input(Some("Ada"), None)).unwrap_err();

    assert_eq!(fault, ValidationFault::BirthDateNotInPast);
    assert_eq!(fault.to_string(), "Birthdate must be in the past");
}

#[test]
fn todays_birth_date_is_rejected() {
    let today = Local::now().date_naive();

    let fault = validate(&input(Some("Ada"), Some(today))).unwrap_err();

    assert_eq!(fault, ValidationFault::BirthDateNotInPast);
}

#[test]
fn future_birth_date_is_rejected() {
    let fault = validate(&input(Some("Ada"), Some(date(2999, 1, 1)))).unwrap_err();

    assert_eq!(fault, ValidationFault::BirthDateNotInPast);
}

#[test]
fn valid_input_produces_state() {
    let state = validate(&input(Some("Ada"), Some(date(1990, 1, 1)))).unwrap();

    assert_eq!(state, UserState::new("Ada".into(), date(1990, 1, 1)));
}

#[test]
fn name_fault_is_reported_first() {
    let fault = validate(&input(None, None)).unwrap_err();

    assert_eq!(fault, ValidationFault::NameRequired);
}

#[test]
fn birth_date_in_past_accepts_yesterday() {
    let yesterday = Local::now().date_naive().pred_opt().unwrap();

    assert!(birth_date_in_past(yesterday));
}

#[test]
fn birth_date_in_past_rejects_today() {
    assert!(!birth_date_in_past(Local::now().date_naive()));
}

#[test]
fn birth_date_in_past_rejects_tomorrow() {
    let tomorrow = Local::now().date_naive().succ_opt().unwrap();

    assert!(!birth_date_in_past(tomorrow));
}

#[test]
fn new_user_carries_fresh_id() {
    let state = UserState::new("Ada".into(), date(1990, 1, 1));

    let first = User::new(state.clone());
    let second = User::new(state);

    assert_ne!(first.ident(), second.ident());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.birth_date(), second.birth_date());
}

#[test]
fn new_user_copies_state_verbatim() {
    let user = User::new(UserState::new("Ada".into(), date(1990, 1, 1)));

    assert_eq!(user.name(), "Ada");
    assert_eq!(*user.birth_date(), date(1990, 1, 1));
}

#[test]
fn restored_user_keeps_id() {
    let template = User::new(UserState::new("Ada".into(), date(1990, 1, 1)));
    let id = template.ident();

    let restored = User::restore(id, UserState::new("Grace".into(), date(1985, 12, 9)));

    assert_eq!(restored.ident(), id);
    assert_eq!(restored.name(), "Grace");
}

#[test]
fn validated_state_feeds_user_construction() {
    let state = validate(&input(Some("Ada"), Some(date(1990, 1, 1)))).unwrap();
    let user = User::new(state);

    assert_eq!(user.name(), "Ada");
    assert_eq!(*user.birth_date(), date(1990, 1, 1));
}
