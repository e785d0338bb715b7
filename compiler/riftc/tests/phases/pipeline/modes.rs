//! Output modes over the same evaluated tree.

use pretty_assertions::assert_eq;
use rift_ir::Source;
use rift_vdom::{RenderMode, RenderSettings};
use riftc::compile;
use serde_json::json;

use crate::common::compile_with;

const LIST: &str = "<ul>\n  <li>A</li>\n  <li>B</li>\n</ul>";

/// Pretty output with the whitespace around tags removed.
fn strip_between_tags(pretty: &str) -> String {
    pretty.lines().map(str::trim).collect()
}

#[test]
fn pretty_indents_by_depth() {
    assert_eq!(
        compile_with(LIST, &json!({}), RenderMode::Pretty).unwrap(),
        "<!DOCTYPE html>\n<ul>\n  <li>\n    A\n  </li>\n  <li>\n    B\n  </li>\n</ul>\n"
    );
}

#[test]
fn minify_is_pretty_without_inter_tag_whitespace() {
    let pretty = compile_with(LIST, &json!({}), RenderMode::Pretty).unwrap();
    let minified = compile_with(LIST, &json!({}), RenderMode::Minify).unwrap();
    assert_eq!(minified, "<!DOCTYPE html><ul><li>A</li><li>B</li></ul>");
    assert_eq!(strip_between_tags(&pretty), minified);
}

#[test]
fn preserve_keeps_text_untrimmed() {
    assert_eq!(
        compile_with("<p> Hi </p>", &json!({}), RenderMode::Preserve).unwrap(),
        "<!DOCTYPE html>\n<p>   Hi \n</p>"
    );
}

#[test]
fn raw_text_content_is_identical_in_every_mode() {
    let pre = "  keep\n    this ";
    let style = "\n  a { color: red }\n";
    let script = r#"let s = "<b>"; if (a < b) {}"#;
    let template = format!(
        "<div><pre>{pre}</pre><style>{style}</style><script>{script}</script></div>"
    );

    for mode in RenderMode::ALL {
        let output = compile_with(&template, &json!({}), mode).unwrap();
        assert!(output.contains(&format!("<pre>{pre}</pre>")), "{mode}: {output}");
        assert!(output.contains(&format!("<style>{style}</style>")), "{mode}: {output}");
        assert!(output.contains(&format!("<script>{script}</script>")), "{mode}: {output}");
    }
}

#[test]
fn markup_inside_raw_text_is_verbatim() {
    for mode in RenderMode::ALL {
        let output = compile_with("<pre>a <b>bold</b> c</pre>", &json!({}), mode).unwrap();
        assert!(
            output.contains("<pre>a <b>bold</b> c</pre>"),
            "{mode}: {output:?}"
        );
    }
}

#[test]
fn declared_doctype_replaces_the_default() {
    let source = Source::new("test.rift", "<!DOCTYPE svg>\n<svg></svg>");
    let settings = RenderSettings::new(RenderMode::Minify);
    assert_eq!(
        compile(&source, &json!({}), &settings).unwrap().output,
        "<!DOCTYPE svg><svg/>"
    );
}

#[test]
fn indent_width_is_configurable() {
    let source = Source::new("test.rift", "<p><b>x</b></p>");
    let settings = RenderSettings::new(RenderMode::Pretty).with_indent(4);
    assert_eq!(
        compile(&source, &json!({}), &settings).unwrap().output,
        "<!DOCTYPE html>\n<p>\n    <b>\n        x\n    </b>\n</p>\n"
    );
}
