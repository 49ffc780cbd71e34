//! Integration tests for form state reduction
//!
//! These tests drive the reducer through whole sessions: initialization,
//! value changes with pruning, model swaps, and validation resolution.

use std::cell::RefCell;
use std::rc::Rc;

use formstate_rs::{
    reduce, reduce_with, Action, DiagnosticSink, FormState, FormStore, Model, ModelLoader,
    ValuePath,
};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

// ============================================================================
// Fixtures
// ============================================================================

/// Sink that records every diagnostic it receives
#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<String>>>);

impl SharedSink {
    fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl DiagnosticSink for SharedSink {
    fn error(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

static DEAD_WOOD_MODEL: Lazy<Model> = Lazy::new(|| {
    parse_model(
        r#"
type: object
properties:
  foo:
    type: object
    properties:
      bar:
        type: object
        properties:
          baz:
            type: "null"
          qux:
            type: number
      waldo:
        type: "null"
      buzz:
        type: boolean
      fizz:
        type: boolean
"#,
    )
});

static NESTED_ARRAY_MODEL: Lazy<Model> = Lazy::new(|| {
    parse_model(
        r#"
type: object
properties:
  a:
    type: object
    properties:
      b1:
        type: array
      b2:
        type: array
"#,
    )
});

static REQUIRED_OBJECTS_MODEL: Lazy<Model> = Lazy::new(|| {
    parse_model(
        r#"
type: object
properties:
  foo:
    type: object
  bar:
    type: object
    properties:
      baz:
        type: object
    required:
      - baz
required:
  - foo
"#,
    )
});

static REQUIRED_ARRAYS_MODEL: Lazy<Model> = Lazy::new(|| {
    parse_model(
        r#"
type: object
properties:
  foo:
    type: array
    item:
      type: string
  bar:
    type: object
    properties:
      baz:
        type: array
        item:
          type: string
    required:
      - baz
required:
  - foo
"#,
    )
});

fn parse_model(yaml: &str) -> Model {
    serde_yaml::from_str(yaml).expect("Failed to parse model")
}

fn path(raw: &str) -> ValuePath {
    ValuePath::parse(raw).expect("Failed to parse path")
}

fn state_with(value: Value, model: Option<Model>) -> FormState {
    FormState {
        value,
        base_model: model,
        ..FormState::default()
    }
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_init_produces_canonical_state() {
    let state = reduce(FormState::default(), Action::Init);

    assert_eq!(
        serde_json::to_value(&state).expect("Failed to serialize"),
        json!({
            "errors": {},
            "validationResult": {"warnings": [], "errors": []},
            "value": null,
        })
    );
}

#[test]
fn test_init_does_not_clobber_existing_fields() {
    let before = FormState {
        errors: json!({"name": ["too short"]}),
        validation_result: json!({"warnings": [], "errors": ["too short"]}),
        value: json!({"name": "x"}),
        ..FormState::default()
    };
    let after = reduce(before.clone(), Action::Init);
    assert_eq!(after, before);
}

// ============================================================================
// Unknown Action Tests
// ============================================================================

#[test]
fn test_unknown_action_reports_once_and_changes_nothing() {
    let sink = SharedSink::default();
    let before = state_with(json!({"foo": 12}), None);

    let after = reduce_with(before.clone(), Action::unknown("bolt"), &sink);

    assert_eq!(after, before);
    assert_eq!(sink.messages(), vec!["Do not recognize action bolt"]);
}

#[test]
fn test_recognized_actions_stay_quiet() {
    let sink = SharedSink::default();
    let state = reduce_with(FormState::default(), Action::Init, &sink);
    let _ = reduce_with(state, Action::change_value(path("a"), json!(1)), &sink);

    assert!(sink.messages().is_empty());
}

// ============================================================================
// Value Change Tests
// ============================================================================

#[test]
fn test_sets_a_deeply_nested_value() {
    let state = state_with(json!({"foo": 12}), None);
    let state = reduce(state, Action::change_value(path("bar.qux"), json!("wine")));

    assert_eq!(state.value, json!({"foo": 12, "bar": {"qux": "wine"}}));
}

#[test]
fn test_removes_an_empty_value() {
    let state = state_with(json!({"foo": 12, "bar": {"qux": "cheese"}}), None);
    let state = reduce(state, Action::change_value(path("bar.qux"), json!("")));

    assert_eq!(state.value, json!({"foo": 12, "bar": {}}));
}

#[test]
fn test_sets_the_root_value() {
    let state = state_with(json!({"foo": 12}), None);
    let state = reduce(state, Action::change_value(path(""), json!({"baz": 22})));

    assert_eq!(state.value, json!({"baz": 22}));
}

#[test]
fn test_change_value_touches_only_the_value() {
    let before = FormState {
        value: json!({"foo": 12}),
        errors: json!({"foo": ["stale"]}),
        validation_result: json!({"warnings": [], "errors": []}),
        ..FormState::default()
    };
    let after = reduce(
        before.clone(),
        Action::change_value(path("foo"), json!(13)),
    );

    assert_eq!(after.value, json!({"foo": 13}));
    assert_eq!(after.errors, before.errors);
    assert_eq!(after.validation_result, before.validation_result);
    assert_eq!(after.last_action, None);
}

// ============================================================================
// Pruning Tests
// ============================================================================

#[test]
fn test_removes_dead_wood_from_the_tree() {
    let state = state_with(Value::Null, Some(DEAD_WOOD_MODEL.clone()));
    let state = reduce(
        state,
        Action::change_value(
            path(""),
            json!({
                "foo": {
                    "bar": {"baz": null, "qux": 12},
                    "waldo": null,
                    "buzz": true,
                    "fizz": false,
                }
            }),
        ),
    );

    assert_eq!(
        state.value,
        json!({
            "foo": {
                "bar": {"qux": 12},
                "buzz": true,
                "fizz": false,
            }
        })
    );
}

#[test]
fn test_prunes_inside_arrays_without_dropping_elements() {
    let state = state_with(Value::Null, Some(NESTED_ARRAY_MODEL.clone()));
    let state = reduce(
        state,
        Action::change_value(
            path(""),
            json!({
                "a": {
                    "b1": [{"c1": {"d": null}}, {"c2": 12}, {"c3": [1, 2, 3]}],
                    "b2": [],
                }
            }),
        ),
    );

    assert_eq!(
        state.value,
        json!({
            "a": {
                "b1": [{"c1": {}}, {"c2": 12}, {"c3": [1, 2, 3]}],
            }
        })
    );
}

#[test]
fn test_keeps_a_required_empty_object_at_the_root() {
    let model = parse_model(
        r#"
type: object
properties:
  foo:
    type: object
required:
  - foo
"#,
    );
    let state = state_with(Value::Null, Some(model));
    let state = reduce(state, Action::change_value(path(""), json!({"foo": {}})));

    assert_eq!(state.value, json!({"foo": {}}));
}

#[test]
fn test_preserves_empty_required_objects() {
    let start = json!({"foo": {"fooProp": "test"}, "bar": {"baz": {"bazProp": "test"}}});

    let state = state_with(start.clone(), Some(REQUIRED_OBJECTS_MODEL.clone()));
    let state = reduce(state, Action::change_value(path("foo"), json!({})));
    assert_eq!(
        state.value,
        json!({"foo": {}, "bar": {"baz": {"bazProp": "test"}}})
    );

    let state = state_with(start, Some(REQUIRED_OBJECTS_MODEL.clone()));
    let state = reduce(state, Action::change_value(path("bar.baz"), json!({})));
    assert_eq!(
        state.value,
        json!({"foo": {"fooProp": "test"}, "bar": {"baz": {}}})
    );
}

#[test]
fn test_preserves_empty_required_arrays() {
    let start = json!({"foo": ["foo item"], "bar": {"baz": ["baz item"]}});

    let state = state_with(start.clone(), Some(REQUIRED_ARRAYS_MODEL.clone()));
    let state = reduce(state, Action::change_value(path("foo"), json!([])));
    assert_eq!(state.value, json!({"foo": [], "bar": {"baz": ["baz item"]}}));

    let state = state_with(start, Some(REQUIRED_ARRAYS_MODEL.clone()));
    let state = reduce(state, Action::change_value(path("bar.baz"), json!([])));
    assert_eq!(state.value, json!({"foo": ["foo item"], "bar": {"baz": []}}));
}

// ============================================================================
// Model Change Tests
// ============================================================================

#[test]
fn test_change_model_installs_the_model() {
    let state = reduce(
        FormState::default(),
        Action::change_model(DEAD_WOOD_MODEL.clone()),
    );

    assert_eq!(state.base_model.as_ref(), Some(&*DEAD_WOOD_MODEL));
    assert_eq!(state.model.as_ref(), Some(&*DEAD_WOOD_MODEL));
    assert_eq!(state.value, Value::Null);
}

#[test]
fn test_installed_model_governs_later_changes() {
    let model = parse_model(
        r#"
type: object
properties:
  name:
    type: string
required:
  - name
"#,
    );
    let state = reduce(FormState::default(), Action::change_model(model));
    let state = reduce(state, Action::change_value(path("name"), json!("")));

    // Required, so the empty string is written instead of removed
    assert_eq!(state.value, json!({"name": ""}));
}

// ============================================================================
// Validation Resolution Tests
// ============================================================================

#[test]
fn test_validation_resolved_replaces_payloads_and_stamps() {
    let before = FormState {
        errors: json!(["this is broken"]),
        validation_result: json!(["this sucks"]),
        value: json!({}),
        base_model: Some(Model::default()),
        ..FormState::default()
    };
    let after = reduce(
        before,
        Action::validation_resolved(json!([]), json!(["you look kinda fat"])),
    );

    assert_eq!(
        serde_json::to_value(&after).expect("Failed to serialize"),
        json!({
            "errors": [],
            "lastAction": "VALIDATION_RESOLVED",
            "validationResult": ["you look kinda fat"],
            "value": {},
            "baseModel": {},
        })
    );
}

#[test]
fn test_only_validation_resolution_stamps_last_action() {
    let mut store = FormStore::new();
    store.dispatch(Action::Init);
    store.dispatch(Action::change_model(Model::default()));
    store.dispatch(Action::change_value(path("a"), json!(1)));
    assert_eq!(store.state().last_action, None);

    store.dispatch(Action::validation_resolved(json!({}), json!({})));
    assert_eq!(
        store.state().last_action.map(|k| k.as_str()),
        Some("VALIDATION_RESOLVED")
    );
}

// ============================================================================
// Whole Session Tests
// ============================================================================

#[test]
fn test_full_session_through_the_store() {
    let sink = SharedSink::default();
    let mut store = FormStore::with_sink(Box::new(sink.clone()));

    store.dispatch_all(vec![
        Action::Init,
        Action::change_model(REQUIRED_OBJECTS_MODEL.clone()),
        Action::change_value(path("foo.fooProp"), json!("hello")),
        Action::change_value(path("bar.baz.bazProp"), json!("there")),
        Action::unknown("bolt"),
        Action::change_value(path("bar.baz.bazProp"), json!("")),
        Action::validation_resolved(
            json!({}),
            json!({"warnings": [], "errors": []}),
        ),
    ]);

    let state = store.state();
    // bazProp was removed, baz itself survives because bar requires it
    assert_eq!(
        state.value,
        json!({"foo": {"fooProp": "hello"}, "bar": {"baz": {}}})
    );
    assert_eq!(state.errors, json!({}));
    assert_eq!(
        state.last_action.map(|k| k.as_str()),
        Some("VALIDATION_RESOLVED")
    );
    assert_eq!(sink.messages(), vec!["Do not recognize action bolt"]);
}

#[test]
fn test_replaying_a_loaded_action_file() {
    let yaml = r#"
- type: INIT
- type: CHANGE_MODEL
  model:
    type: object
    properties:
      name:
        type: string
      nickname:
        type: string
    required:
      - name
- type: CHANGE_VALUE
  path: name
  value: Ada
- type: CHANGE_VALUE
  path: nickname
  value: ""
- type: CHANGE_VALUE
  path: name
  value: ""
"#;
    let actions = ModelLoader::parse_actions_yaml(yaml).expect("Failed to parse actions");

    let mut store = FormStore::new();
    store.dispatch_all(actions);

    // nickname was dropped as empty; name is required and stays
    assert_eq!(store.state().value, json!({"name": ""}));
}
