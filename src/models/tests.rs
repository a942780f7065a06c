//! Tests for record models

use super::*;
use crate::error::Error;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn flight_at(guid: &str, date: &str) -> Flight {
    Flight::from_json(&json!({
        "guid": guid,
        "personnel": "T. Pilot",
        "weather_detail": "Overcast",
        "duration_seconds": 300,
        "place_name": "Kessler Field",
        "drone_guid": "d1",
        "place_guid": "p1",
        "project_guid": null,
        "equipments": ["e1"],
        "flight_date_utc": date
    }))
    .unwrap()
}

fn equipment(name: &str, notes: &str) -> Equipment {
    Equipment::from_json(&json!({
        "name": name,
        "equipment_type": "Sensor",
        "notes": notes
    }))
    .unwrap()
}

// ============================================================================
// Flight
// ============================================================================

#[test]
fn test_flight_fields() {
    let flight = flight_at("f1", "2020-01-01T12:30:15.250Z");

    assert_eq!(flight.guid, "f1");
    assert_eq!(flight.personnel, "T. Pilot");
    assert_eq!(flight.weather, "Overcast");
    assert_eq!(flight.duration_seconds, 300);
    assert_eq!(flight.place_name, "Kessler Field");
    assert_eq!(flight.drone_guid.as_deref(), Some("d1"));
    assert_eq!(flight.project_guid, None);
    assert_eq!(flight.equipment_guids, vec!["e1"]);
    assert_eq!(
        flight.flight_time,
        Utc.with_ymd_and_hms(2020, 1, 1, 12, 30, 15).unwrap()
            + chrono::Duration::milliseconds(250)
    );
    assert!(flight.flight_time_defect.is_none());
    assert!(flight.drone.is_none());
    assert!(flight.equipment.is_empty());
}

#[test]
fn test_flight_ordering() {
    let a = flight_at("a", "2020-01-01T00:00:00.000Z");
    let b = flight_at("b", "2020-06-01T00:00:00.000Z");
    let a_again = flight_at("other-guid", "2020-01-01T00:00:00.000Z");

    assert!(a < b);
    assert!(b > a);
    assert_eq!(a, a_again);
    assert_eq!(a.cmp(&a_again), std::cmp::Ordering::Equal);

    let mut flights = vec![b.clone(), a.clone()];
    flights.sort();
    assert_eq!(flights[0].guid, "a");
}

#[test_case("not a date" ; "garbage")]
#[test_case("2020-13-45T00:00:00.000Z" ; "out of range")]
#[test_case("" ; "empty")]
fn test_flight_unparseable_time_falls_back_to_epoch(date: &str) {
    let flight = flight_at("f1", date);
    assert_eq!(flight.flight_time.timestamp(), 0);
    assert!(flight.flight_time_defect.is_some());
}

#[test]
fn test_flight_missing_time_falls_back_to_epoch() {
    let flight = Flight::from_json(&json!({"guid": "f1"})).unwrap();
    assert_eq!(flight.flight_time, Utc.timestamp_opt(0, 0).unwrap());
    assert!(flight
        .flight_time_defect
        .as_deref()
        .unwrap()
        .contains("missing"));
}

#[test]
fn test_flight_accepts_rfc3339_without_fraction() {
    let flight = flight_at("f1", "2020-06-01T08:00:00Z");
    assert_eq!(
        flight.flight_time,
        Utc.with_ymd_and_hms(2020, 6, 1, 8, 0, 0).unwrap()
    );
}

#[test]
fn test_flight_lenient_fields() {
    let flight = Flight::from_json(&json!({
        "guid": "f1",
        "personnel": null,
        "duration_seconds": "125",
        "drone_guid": "",
        "equipments": [{"guid": "e1"}, "e2", ""],
        "flight_date_utc": "2020-01-01T00:00:00.000Z"
    }))
    .unwrap();

    assert_eq!(flight.personnel, "");
    assert_eq!(flight.duration_seconds, 125);
    assert_eq!(flight.drone_guid, None);
    assert_eq!(flight.equipment_guids, vec!["e1", "e2"]);
}

#[test_case(json!(600.0), 600 ; "whole float")]
#[test_case(json!("600.0"), 600 ; "whole float string")]
#[test_case(json!(" 42 "), 42 ; "padded string")]
#[test_case(json!(null), 0 ; "null")]
fn test_flight_duration_leniency(duration: Value, expected: u64) {
    let flight = Flight::from_json(&json!({"guid": "f1", "duration_seconds": duration})).unwrap();
    assert_eq!(flight.duration_seconds, expected);
}

#[test_case(json!(600.5) ; "fractional")]
#[test_case(json!("12.25") ; "fractional string")]
#[test_case(json!("NaN") ; "not a number")]
fn test_flight_duration_rejects_fractions(duration: Value) {
    let err = Flight::from_json(&json!({"guid": "f1", "duration_seconds": duration})).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_flight_rejects_bad_records() {
    assert!(matches!(
        Flight::from_json(&json!({"personnel": "x"})).unwrap_err(),
        Error::MalformedResponse { .. }
    ));
    assert!(matches!(
        Flight::from_json(&json!({"guid": "f1", "duration_seconds": -5})).unwrap_err(),
        Error::MalformedResponse { .. }
    ));
    assert!(matches!(
        Flight::from_json(&json!(["not", "an", "object"])).unwrap_err(),
        Error::MalformedResponse { .. }
    ));
}

#[test]
fn test_flight_display() {
    let mut flight = flight_at("f1", "2020-01-01T00:00:00.000Z");
    assert_eq!(
        flight.to_string(),
        "Flight launched on 2020-01-01 00:00:00 UTC at location Kessler Field"
    );

    flight.drone = Some(
        Drone::from_json(&json!({
            "guid": "d1", "brand": "DJI", "model": "M600",
            "identification_number": "N1", "notes": ""
        }))
        .unwrap(),
    );
    assert!(flight.to_string().ends_with("using DJI M600 N1"));
}

// ============================================================================
// Drone
// ============================================================================

#[test]
fn test_drone_notes_split_on_line_breaks() {
    let drone = Drone::from_json(&json!({
        "guid": "d1",
        "brand": "DJI",
        "model": "M600",
        "identification_number": "FA3XYZ",
        "notes": "line one\r\nline two\nline three"
    }))
    .unwrap();

    assert_eq!(drone.notes, vec!["line one", "line two", "line three"]);
    assert_eq!(drone.to_string(), "DJI M600 FA3XYZ");
}

#[test]
fn test_drone_null_notes() {
    let drone = Drone::from_json(&json!({"guid": "d1", "notes": null})).unwrap();
    assert!(drone.notes.is_empty());
    assert_eq!(drone.brand, "");
}

// ============================================================================
// Place
// ============================================================================

#[test]
fn test_place_parses_string_numbers() {
    let place = Place::from_json(&json!({
        "guid": "p1",
        "altitude": "350.5",
        "latitude": "35.18",
        "longitude": -97.44,
        "name": "Kessler Field",
        "address": "Washington, OK"
    }))
    .unwrap();

    assert_eq!(place.altitude, 350.5);
    assert_eq!(place.latitude, 35.18);
    assert_eq!(place.longitude, -97.44);
    assert_eq!(place.address, "Washington, OK");
}

#[test]
fn test_place_blank_altitude_is_zero() {
    let place = Place::from_json(&json!({
        "guid": "p1", "altitude": "", "latitude": "1", "longitude": "2"
    }))
    .unwrap();
    assert_eq!(place.altitude, 0.0);
}

#[test]
fn test_place_bad_coordinates() {
    let err = Place::from_json(&json!({
        "guid": "p1", "latitude": "north", "longitude": "2"
    }))
    .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));

    let err = Place::from_json(&json!({"guid": "p1", "longitude": "2"})).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

// ============================================================================
// Project
// ============================================================================

#[test]
fn test_project_keeps_raw_payload() {
    let payload = json!({"whatever": {"the": "schema"}});
    let project = Project::from_json("pr1", &payload).unwrap();
    assert_eq!(project.guid, "pr1");
    assert_eq!(project.raw, payload);
    assert!(Project::from_json("pr1", &Value::Null).is_err());
}

// ============================================================================
// Equipment
// ============================================================================

#[test]
fn test_equipment_scoop_derivation() {
    let scoop = Equipment::from_parts(
        None,
        "Scoop Alpha-7".to_string(),
        "Sensor".to_string(),
        vec!["iMet,1234,5678".to_string(), "HYT,9876".to_string()],
        Value::Null,
    );

    assert_eq!(scoop.scoop_label.as_deref(), Some("Alpha-7"));
    assert_eq!(scoop.imet_serials, Some(vec!["1234".to_string(), "5678".to_string()]));
    assert_eq!(scoop.hyt_serials, Some(vec!["9876".to_string()]));
    assert!(scoop.is_scoop());
    assert_eq!(scoop.sensor_serials(), vec!["1234", "5678", "9876"]);
}

#[test]
fn test_equipment_derived_fields_absent() {
    let charger = equipment("Battery Charger", "Bought 2019\r\nWorks fine");

    assert_eq!(charger.scoop_label, None);
    assert_eq!(charger.imet_serials, None);
    assert_eq!(charger.hyt_serials, None);
    assert!(!charger.is_scoop());
    assert!(charger.sensor_serials().is_empty());
}

#[test]
fn test_equipment_serials_drop_blank_tokens() {
    let scoop = equipment("SCOOP B", "IMET, 1111, ,2222,\r\nhyt , 3333");

    assert_eq!(scoop.scoop_label.as_deref(), Some("B"));
    assert_eq!(
        scoop.imet_serials,
        Some(vec!["1111".to_string(), "2222".to_string()])
    );
    assert_eq!(scoop.hyt_serials, Some(vec!["3333".to_string()]));
}

#[test]
fn test_equipment_tag_without_serials_is_present_but_empty() {
    let scoop = equipment("Scoop C", "iMet");
    assert_eq!(scoop.imet_serials, Some(Vec::new()));
    assert_eq!(scoop.hyt_serials, None);
}

#[test]
fn test_equipment_last_qualifying_note_wins() {
    let scoop = equipment("Scoop D", "iMet,1\r\niMet,2,3");
    assert_eq!(scoop.imet_serials, Some(vec!["2".to_string(), "3".to_string()]));
}

#[test]
fn test_equipment_requires_name() {
    let err = Equipment::from_json(&json!({"equipment_type": "Sensor"})).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

// ============================================================================
// Lenient flags
// ============================================================================

#[test]
fn test_lenient_bool() {
    assert!(lenient_bool(&json!(true)));
    assert!(lenient_bool(&json!("TRUE")));
    assert!(!lenient_bool(&json!(0)));
    assert!(!lenient_bool(&json!("no")));
    assert!(!lenient_bool(&Value::Null));
}
