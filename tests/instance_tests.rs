//! Instance adapter tests — read a Forge instance and extract board data.

use fretlib::{
    build_standard_tuning, fretboard_from_instance, parse_instance, render_fretboard,
    AdapterOptions, BoardConfig, FretError, FretPosition, Instance, IntervalKind, StringOrder,
    Tuning,
};
use pretty_assertions::assert_eq;

const GUITAR: &str = include_str!("data/guitar_instance.xml");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn reads_standard_tuning_from_string_start() {
    init_logging();
    let board = parse_instance(GUITAR).expect("Failed to adapt guitar instance");

    assert_eq!(board.tuning, build_standard_tuning());
    let atoms: Vec<&str> = board
        .strings
        .iter()
        .map(|s| s.atom.as_deref().unwrap())
        .collect();
    // stringPos 1 is the high E, so the lowest string comes last in the model.
    assert_eq!(atoms, vec!["String5", "String4", "String3", "String2", "String1", "String0"]);
}

#[test]
fn played_notes_become_positions() {
    let board = parse_instance(GUITAR).unwrap();
    assert_eq!(
        board.played,
        vec![
            FretPosition::new(0, 3),
            FretPosition::new(2, 2),
            FretPosition::new(5, 0),
        ]
    );
    let names: Vec<String> = board
        .played_notes()
        .unwrap()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["G2", "E3", "E4"]);
}

#[test]
fn interval_marks_carry_steps() {
    let board = parse_instance(GUITAR).unwrap();
    let frets: Vec<u8> = board.intervals.iter().map(|m| m.position.fret).collect();
    assert_eq!(frets, vec![0, 2, 3]);
    assert!(board.intervals.iter().all(|m| m.position.string_index == 0));
    let kinds: Vec<Option<IntervalKind>> = board.intervals.iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        vec![None, Some(IntervalKind::WholeStep), Some(IntervalKind::HalfStep)]
    );
    assert_eq!(board.intervals[0].label, "Interval4");
}

#[test]
fn lowest_first_order_reverses_strings() {
    let instance = Instance::parse(GUITAR).unwrap();
    let options = AdapterOptions {
        order: StringOrder::LowestFirst,
        ..Default::default()
    };
    let board = fretboard_from_instance(&instance, &options).unwrap();
    assert_eq!(board.strings[0].atom.as_deref(), Some("String0"));
    // Same open notes, but now read from the other end.
    assert_eq!(board.tuning.offsets(), &[4, 11, 7, 2, 9, 4]);
}

const NO_STRING_START: &str = r#"<alloy>
<instance bitwidth="5">
  <sig label="this/String" ID="4" parentID="2">
    <atom label="String0"/><atom label="String1"/><atom label="String2"/>
    <atom label="String3"/><atom label="String4"/><atom label="String5"/>
  </sig>
  <sig label="this/PlayedNote" ID="5" parentID="2">
    <atom label="PlayedNote0"/><atom label="PlayedNote1"/>
  </sig>
  <field label="string" ID="10" parentID="5">
    <tuple><atom label="PlayedNote0"/><atom label="String5"/></tuple>
  </field>
  <field label="fret" ID="11" parentID="5">
    <tuple><atom label="PlayedNote0"/><atom label="12"/></tuple>
    <tuple><atom label="PlayedNote1"/><atom label="1"/></tuple>
  </field>
</instance>
</alloy>"#;

#[test]
fn models_without_string_start_use_fallback_tuning() {
    init_logging();
    // No stringPos either: atom suffixes order the strings. PlayedNote1
    // has no string and is skipped.
    let board = parse_instance(NO_STRING_START).unwrap();
    assert_eq!(board.tuning, build_standard_tuning());
    assert_eq!(board.strings[0].atom.as_deref(), Some("String5"));
    assert_eq!(board.played, vec![FretPosition::new(0, 12)]);
    assert_eq!(board.played_notes().unwrap()[0].to_string(), "E3");
}

#[test]
fn fallback_tuning_must_match_string_count() {
    let instance = Instance::parse(NO_STRING_START).unwrap();
    let options = AdapterOptions {
        fallback_tuning: Tuning::with_base_octaves(vec![7, 0, 4, 9], vec![4, 4, 4, 4]).unwrap(),
        ..Default::default()
    };
    assert!(matches!(
        fretboard_from_instance(&instance, &options),
        Err(FretError::InvalidTuning(_))
    ));
}

#[test]
fn explicit_base_octaves_override_inference() {
    let instance = Instance::parse(GUITAR).unwrap();
    let options = AdapterOptions {
        base_octaves: Some(vec![1, 1, 2, 2, 2, 3]),
        ..Default::default()
    };
    let board = fretboard_from_instance(&instance, &options).unwrap();
    assert_eq!(board.tuning.open_note(0).unwrap().to_string(), "E1");
}

#[test]
fn out_of_range_fret_is_rejected() {
    let xml = NO_STRING_START.replace(r#"<atom label="12"/>"#, r#"<atom label="15"/>"#);
    assert!(matches!(
        parse_instance(&xml),
        Err(FretError::OutOfRange { what: "fret", .. })
    ));
}

#[test]
fn missing_string_start_on_one_string_is_reported() {
    let xml = GUITAR.replace(
        r#"<tuple> <atom label="String2"/> <atom label="Interval7"/> </tuple>"#,
        "",
    );
    assert!(matches!(
        parse_instance(&xml),
        Err(FretError::MissingAtom { .. })
    ));
}

#[test]
fn fretboard_json_round_trips() {
    let board = parse_instance(GUITAR).unwrap();
    let json = fretlib::fretboard_to_json(&board).unwrap();
    assert!(json.contains(r#""offsets""#));
    let back = fretlib::fretboard_from_json(&json).unwrap();
    assert_eq!(back, board);
}

/// The sample board as a JSON value, for corrupting one field at a time.
fn board_json() -> serde_json::Value {
    let board = parse_instance(GUITAR).unwrap();
    serde_json::from_str(&fretlib::fretboard_to_json(&board).unwrap()).unwrap()
}

#[test]
fn json_interval_steps_are_recomputed() {
    let mut json = board_json();
    json["intervals"] = serde_json::json!([
        {"position": {"string_index": 0, "fret": 3}, "label": "Interval0", "step": 1}
    ]);
    let board = fretlib::fretboard_from_json(&json.to_string()).unwrap();
    assert_eq!(board.intervals[0].step, None);
    assert_eq!(board.intervals[0].kind(), None);

    let rendering = render_fretboard(&board, &BoardConfig::default()).unwrap();
    assert!(rendering.svg.contains("</svg>"));
}

#[test]
fn json_positions_off_the_board_are_rejected() {
    let mut json = board_json();
    json["played"] = serde_json::json!([{"string_index": 9, "fret": 0}]);
    assert!(matches!(
        fretlib::fretboard_from_json(&json.to_string()),
        Err(FretError::OutOfRange { what: "string", value: 9, max: 5 })
    ));

    let mut json = board_json();
    json["played"] = serde_json::json!([{"string_index": 0, "fret": 20}]);
    assert!(matches!(
        fretlib::fretboard_from_json(&json.to_string()),
        Err(FretError::OutOfRange { what: "fret", value: 20, max: 12 })
    ));

    let mut json = board_json();
    json["intervals"] = serde_json::json!([
        {"position": {"string_index": 6, "fret": 1}, "label": "Interval0", "step": null}
    ]);
    assert!(matches!(
        fretlib::fretboard_from_json(&json.to_string()),
        Err(FretError::OutOfRange { what: "string", .. })
    ));
}

#[test]
fn json_played_positions_are_sorted() {
    let mut json = board_json();
    json["played"] = serde_json::json!([
        {"string_index": 5, "fret": 0},
        {"string_index": 0, "fret": 3},
        {"string_index": 5, "fret": 0}
    ]);
    let board = fretlib::fretboard_from_json(&json.to_string()).unwrap();
    assert_eq!(
        board.played,
        vec![FretPosition::new(0, 3), FretPosition::new(5, 0)]
    );
    assert!(board.is_played(FretPosition::new(0, 3)));
}

#[test]
fn json_string_count_must_match_tuning() {
    let mut json = board_json();
    json["strings"].as_array_mut().unwrap().pop();
    assert!(matches!(
        fretlib::fretboard_from_json(&json.to_string()),
        Err(FretError::InvalidTuning(_))
    ));
}
