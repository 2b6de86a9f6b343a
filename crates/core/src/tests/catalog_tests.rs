// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for catalog commands.

use crate::{Catalog, Command, CoreError, apply_catalog};
use fieldbook_domain::{
    DomainError, Field, OperatingHours, RateCard, SportCategory, WeekAvailability,
};

use super::helpers::{create_test_actor, create_test_catalog, create_test_cause};

fn unpersisted_field(code: &str) -> Field {
    Field::new(
        code,
        format!("Field {code}"),
        SportCategory::Padel,
        OperatingHours::new(9.0, 21.0, 1.5).unwrap(),
        WeekAvailability::open_every_day(),
        RateCard::new(8.0, None, None).unwrap(),
    )
}

#[test]
fn test_create_field_adds_to_catalog() {
    let catalog = Catalog::new();

    let result = apply_catalog(
        &catalog,
        Command::CreateField {
            field: unpersisted_field("P1"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.new_catalog.fields.len(), 1);
    assert_eq!(result.field.code.value(), "P1");
    assert_eq!(result.audit_event.action.name, "CreateField");
    assert_eq!(result.audit_event.booking_reference, None);
}

#[test]
fn test_create_field_rejects_duplicate_code() {
    let catalog = create_test_catalog();

    let result = apply_catalog(
        &catalog,
        Command::CreateField {
            // Codes are case-insensitive: "f1" collides with "F1".
            field: unpersisted_field("f1"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateFieldCode(_))
    ));
}

#[test]
fn test_create_field_rejects_empty_name() {
    let mut field = unpersisted_field("P1");
    field.name = String::new();

    let result = apply_catalog(
        &Catalog::new(),
        Command::CreateField { field },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidFieldName(_))
    ));
}

#[test]
fn test_update_field_replaces_configuration() {
    let catalog = create_test_catalog();
    let mut field = catalog.fields[0].clone();
    field.name = String::from("Renamed Pitch");

    let result = apply_catalog(
        &catalog,
        Command::UpdateField { field },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.new_catalog.fields[0].name, "Renamed Pitch");
    assert_eq!(result.audit_event.action.name, "UpdateField");
}

#[test]
fn test_update_field_rejects_code_collision() {
    let mut catalog = create_test_catalog();
    let mut second = unpersisted_field("P1");
    second.field_id = Some(2);
    catalog.fields.push(second.clone());

    // Renaming P1 onto F1's code must fail.
    second.code = catalog.fields[0].code.clone();
    let result = apply_catalog(
        &catalog,
        Command::UpdateField { field: second },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateFieldCode(_))
    ));
}

#[test]
fn test_update_field_requires_persisted_identifier() {
    let result = apply_catalog(
        &create_test_catalog(),
        Command::UpdateField {
            field: unpersisted_field("P1"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(result.unwrap_err(), CoreError::Internal(_)));
}

#[test]
fn test_deactivate_field_keeps_it_out_of_listings() {
    let catalog = create_test_catalog();

    let result = apply_catalog(
        &catalog,
        Command::SetFieldActive {
            field_id: 1,
            active: false,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert!(!result.field.active);
    assert!(result.new_catalog.active_fields(None).is_empty());
    // The field itself is retained for historical bookings.
    assert_eq!(result.new_catalog.fields.len(), 1);
}

#[test]
fn test_set_active_unknown_field_is_rejected() {
    let result = apply_catalog(
        &create_test_catalog(),
        Command::SetFieldActive {
            field_id: 42,
            active: false,
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::FieldNotFound(42))
    ));
}

#[test]
fn test_active_fields_filters_by_sport() {
    let mut catalog = create_test_catalog();
    let mut padel = unpersisted_field("P1");
    padel.field_id = Some(2);
    catalog.fields.push(padel);

    let all = catalog.active_fields(None);
    assert_eq!(all.len(), 2);

    let padel_only = catalog.active_fields(Some(SportCategory::Padel));
    assert_eq!(padel_only.len(), 1);
    assert_eq!(padel_only[0].code.value(), "P1");
}
