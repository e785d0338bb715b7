use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

fn segments(path: &str) -> Vec<String> {
    path.split('.').map(str::to_string).collect()
}

#[test]
fn lookup_objects_and_arrays() {
    let data = json!({ "rows": [{ "name": "a" }, { "name": "b" }], "n": 1 });
    assert_eq!(lookup(&data, &segments("rows.1.name")), Some(&json!("b")));
    assert_eq!(lookup(&data, &segments("n")), Some(&json!(1)));
    assert_eq!(lookup(&data, &[]), Some(&data));
    assert_eq!(lookup(&data, &segments("rows.2")), None);
    assert_eq!(lookup(&data, &segments("rows.x")), None);
    assert_eq!(lookup(&data, &segments("n.value")), None);
}

#[test]
fn stringify_scalars() {
    assert_eq!(stringify(&json!("hi")), "hi");
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&Value::Null), "");
    assert_eq!(stringify(&json!(42)), "42");
    assert_eq!(stringify(&json!(-7)), "-7");
    assert_eq!(stringify(&json!(1.5)), "1.5");
    assert_eq!(stringify(&json!(2.0)), "2");
}

#[test]
fn stringify_collections_as_compact_json() {
    assert_eq!(stringify(&json!([1, "a", null])), r#"[1,"a",null]"#);
    assert_eq!(stringify(&json!({ "b": 1, "a": [] })), r#"{"a":[],"b":1}"#);
}

#[test]
fn kind_names() {
    assert_eq!(kind_name(&json!(1)), "number");
    assert_eq!(kind_name(&json!("s")), "string");
    assert_eq!(kind_name(&json!({})), "object");
}
