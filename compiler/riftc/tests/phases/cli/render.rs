//! `riftc render`.

use std::fs;

use pretty_assertions::assert_eq;

use crate::common::{riftc, stderr, stdout};

#[test]
fn prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.rift"), r#"<div id="x">Hello</div>"#).unwrap();

    let output = riftc(dir.path(), &["render", "index.rift", "--mode=minify"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<!DOCTYPE html><div id=\"x\">Hello</div>\n"
    );
}

#[test]
fn reads_data_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("list.rift"),
        "<ul>@for (post of posts) {<li>{{ post.title }}</li>}</ul>",
    )
    .unwrap();
    fs::write(
        dir.path().join("site.json"),
        r#"{ "posts": [{ "title": "A" }, { "title": "B" }] }"#,
    )
    .unwrap();

    let output = riftc(
        dir.path(),
        &["render", "list.rift", "--data=site.json", "--mode=minify"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<!DOCTYPE html><ul><li>A</li><li>B</li></ul>\n"
    );
}

#[test]
fn writes_each_unit_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rift"), "<p>a</p>").unwrap();
    fs::write(dir.path().join("b.rift"), "<p>b</p>").unwrap();

    let output = riftc(dir.path(), &["render", "a.rift", "b.rift", "--out=dist"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        fs::read_to_string(dir.path().join("dist/a.html")).unwrap(),
        "<!DOCTYPE html>\n<p>\n  a\n</p>\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("dist/b.html")).unwrap(),
        "<!DOCTYPE html>\n<p>\n  b\n</p>\n"
    );
}

#[test]
fn same_stem_in_out_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("blog")).unwrap();
    fs::write(dir.path().join("index.rift"), "<p>home</p>").unwrap();
    fs::write(dir.path().join("blog/index.rift"), "<p>blog</p>").unwrap();

    let output = riftc(
        dir.path(),
        &["render", "index.rift", "blog/index.rift", "--out=dist"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: 'index.rift' and 'blog/index.rift' would both be written to 'dist/index.html'\n"
    );
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn same_stem_is_fine_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("blog")).unwrap();
    fs::write(dir.path().join("index.rift"), "<p>home</p>").unwrap();
    fs::write(dir.path().join("blog/index.rift"), "<p>blog</p>").unwrap();

    let output = riftc(
        dir.path(),
        &["render", "index.rift", "blog/index.rift", "--mode=minify", "--no-doctype"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "<p>home</p>\n<p>blog</p>\n");
}

#[test]
fn stdout_follows_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..8).map(|i| format!("t{i}.rift")).collect();
    for (i, name) in names.iter().enumerate() {
        fs::write(dir.path().join(name), format!("<i>{i}</i>")).unwrap();
    }

    let mut args = vec!["render", "--mode=minify", "--no-doctype"];
    args.extend(names.iter().map(String::as_str));
    let output = riftc(dir.path(), &args);
    assert!(output.status.success(), "{}", stderr(&output));

    let expected: String = (0..8).map(|i| format!("<i>{i}</i>\n")).collect();
    assert_eq!(stdout(&output), expected);
}

#[test]
fn emits_vdom_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p.rift"), "<p>{{ name }}</p>").unwrap();
    fs::write(dir.path().join("data.json"), r#"{ "name": "Rift" }"#).unwrap();

    let output = riftc(
        dir.path(),
        &["render", "p.rift", "--data=data.json", "--emit=vdom"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let tree: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tree["children"][0]["kind"], "element");
    assert_eq!(tree["children"][0]["name"], "p");
    assert_eq!(tree["children"][0]["children"][0]["text"], "Rift");
}

#[test]
fn failing_unit_reports_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.rift"), "<p></p><!DOCTYPE html>").unwrap();

    let output = riftc(dir.path(), &["render", "bad.rift"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");

    let err = stderr(&output);
    assert!(
        err.starts_with("error[E1005]: declarations must be the first node\n  --> bad.rift:1:8\n"),
        "{err}"
    );
    assert!(err.ends_with("error: aborting due to previous error\n"), "{err}");
}

#[test]
fn good_units_still_render_next_to_a_failing_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.rift"), "<p>ok</p>").unwrap();
    fs::write(dir.path().join("bad.rift"), "<p>{{ missing }}</p>").unwrap();
    fs::write(dir.path().join("worse.rift"), "<p>").unwrap();

    let output = riftc(
        dir.path(),
        &["render", "bad.rift", "good.rift", "worse.rift", "--mode=minify"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "<!DOCTYPE html><p>ok</p>\n");

    let err = stderr(&output);
    assert!(err.contains("error[E2001]"), "{err}");
    assert!(err.contains("--> bad.rift:"), "{err}");
    assert!(err.contains("error[E1004]"), "{err}");
    assert!(err.contains("--> worse.rift:"), "{err}");
    assert!(err.ends_with("error: aborting due to 2 previous errors\n"), "{err}");
}

#[test]
fn missing_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = riftc(dir.path(), &["render", "nope.rift"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: cannot find file 'nope.rift'\n");
}

#[test]
fn invalid_data_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p.rift"), "<p></p>").unwrap();
    fs::write(dir.path().join("data.json"), "{ not json").unwrap();

    let output = riftc(dir.path(), &["render", "p.rift", "--data=data.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).starts_with("error: invalid JSON in 'data.json':"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn bad_flag_prints_render_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = riftc(dir.path(), &["render", "p.rift", "--mode=loud"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: unknown render mode `loud`"), "{err}");
    assert!(err.contains("Usage: riftc render"), "{err}");
}
