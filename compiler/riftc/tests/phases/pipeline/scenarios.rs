//! End-to-end behavior of one template through parse, evaluate and render.

use pretty_assertions::assert_eq;
use rift_diagnostic::{ErrorCode, Stage};
use serde_json::json;

use rift_ir::Source;
use rift_vdom::{render_node, RenderMode, RenderSettings};
use riftc::{compile, evaluate_source};

use crate::common::{compile_minified, document};

#[test]
fn element_with_attribute_and_text() {
    assert_eq!(
        compile_minified(r#"<div id="x">Hello</div>"#, &json!({})).unwrap(),
        document(r#"<div id="x">Hello</div>"#)
    );

    let source = Source::new("test.rift", r#"<div id="x">Hello</div>"#);
    let evaluated = evaluate_source(&source, &json!({})).unwrap();
    assert_eq!(
        render_node(
            &evaluated.document.children[0],
            &RenderSettings::new(RenderMode::Minify)
        ),
        r#"<div id="x">Hello</div>"#
    );
}

#[test]
fn declaration_after_content_fails() {
    let diagnostic = compile_minified("<p></p><!DOCTYPE html>", &json!({})).unwrap_err();
    assert_eq!(diagnostic.stage, Stage::Parser);
    assert_eq!(diagnostic.code, ErrorCode::E1005);
    assert_eq!(diagnostic.message, "declarations must be the first node");
}

#[test]
fn loop_without_wrapper() {
    let data = json!({ "posts": [{ "title": "A" }, { "title": "B" }] });
    assert_eq!(
        compile_minified(
            "<ul>@for (post of posts) {<li>{{ post.title }}</li>}</ul>",
            &data
        )
        .unwrap(),
        document("<ul><li>A</li><li>B</li></ul>")
    );
}

#[test]
fn unterminated_attribute_string_fails_in_lexer() {
    let diagnostic = compile_minified("<p>\n  <a href=\"/home>Home</a>\n</p>", &json!({})).unwrap_err();
    assert_eq!(diagnostic.stage, Stage::Lexer);
    assert_eq!(diagnostic.code, ErrorCode::E0001);
    let position = diagnostic.position.unwrap();
    assert_eq!((position.line, position.column), (2, 11));
}

#[test]
fn empty_loop_contributes_nothing() {
    assert_eq!(
        compile_minified("<ul>@for (x of xs) {<li>{{ x }}</li>}</ul>", &json!({ "xs": [] })).unwrap(),
        document("<ul/>")
    );
}

#[test]
fn nested_loops_see_outer_alias() {
    let data = json!({
        "groups": [
            { "name": "a", "items": [1, 2] },
            { "name": "b", "items": [3] }
        ]
    });
    assert_eq!(
        compile_minified(
            "@for (g of groups) {<ol>@for (i of g.items) {<li>{{ g.name }}{{ i }}</li>}</ol>}",
            &data
        )
        .unwrap(),
        document("<ol><li>a1</li><li>a2</li></ol><ol><li>b3</li></ol>")
    );
}

#[test]
fn loop_index_counts_duplicates() {
    assert_eq!(
        compile_minified(
            "@for (x of xs) {<i>{{ $index }}</i>}",
            &json!({ "xs": ["same", "same", "same"] })
        )
        .unwrap(),
        document("<i>0</i><i>1</i><i>2</i>")
    );
}

#[test]
fn front_matter_does_not_render() {
    assert_eq!(
        compile_minified("---\ntitle: \"Home\"\n---\n<h1>Home</h1>", &json!({})).unwrap(),
        document("<h1>Home</h1>")
    );
}

#[test]
fn void_elements_need_no_close() {
    assert_eq!(
        compile_minified(r#"<p>a<br>b<img src="x.png"></p>"#, &json!({})).unwrap(),
        document(r#"<p>a<br/>b<img src="x.png"/></p>"#)
    );
}

#[test]
fn interpolated_values_stringify() {
    let data = json!({ "n": 3.0, "f": 1.5, "ok": true, "none": null });
    assert_eq!(
        compile_minified("<p>{{ n }}|{{ f }}|{{ ok }}|{{ none }}</p>", &data).unwrap(),
        document("<p>3|1.5|true|</p>")
    );
}

#[test]
fn style_string_escapes_pass_through() {
    let style = r#".q::before { content: "\201C"; } .i { content: '\f101' }"#;
    assert_eq!(
        compile_minified(&format!("<style>{style}</style>"), &json!({})).unwrap(),
        document(&format!("<style>{style}</style>"))
    );
}

#[test]
fn script_comment_with_apostrophe() {
    let script = "\n// don't do this\nlet x = 1;\n";
    assert_eq!(
        compile_minified(&format!("<script>{script}</script>"), &json!({})).unwrap(),
        document(&format!("<script>{script}</script>"))
    );
}

#[test]
fn front_matter_string_may_contain_delimiter() {
    let source = Source::new("test.rift", "---\ndesc: \"a\n---\nb\"\n---\n<p>x</p>");
    let compiled = compile(&source, &json!({}), &RenderSettings::new(RenderMode::Minify)).unwrap();
    assert_eq!(compiled.front_matter, "desc: \"a\n---\nb\"");
    assert_eq!(compiled.output, document("<p>x</p>"));
}
