use pretty_assertions::assert_eq;
use rift_ir::SourcePosition;

use super::*;

#[test]
fn caret_under_point_position() {
    let source = "<ul>\n  <li class=\"a>One</li>\n</ul>";
    let excerpt = Excerpt::build(
        source,
        SourcePosition::new(2, 13, 17),
        &ExcerptConfig::default(),
    );
    assert_eq!(
        excerpt.render_plain(),
        "  1 | <ul>\n\
         > 2 |   <li class=\"a>One</li>\n\
         \x20   |             ^\n\
         \x20 3 | </ul>\n"
    );
}

#[test]
fn carets_span_the_length() {
    let source = "<p>}</p>";
    let excerpt = Excerpt::build(
        source,
        SourcePosition::new(1, 4, 3).with_length(1),
        &ExcerptConfig::default(),
    );
    let hl = excerpt.lines[0].highlight.unwrap();
    assert_eq!(hl, Highlight { start: 3, width: 1 });

    let wide = Excerpt::build(
        "<span></div>",
        SourcePosition::new(1, 7, 6).with_length(6),
        &ExcerptConfig::default(),
    );
    assert!(wide.render_plain().ends_with("|       ^^^^^^\n"));
}

#[test]
fn context_lines_are_bounded() {
    let source: String = (1..=20).map(|n| format!("line {n}\n")).collect();
    let config = ExcerptConfig {
        context_before: 2,
        context_after: 1,
        ..ExcerptConfig::default()
    };
    let excerpt = Excerpt::build(&source, SourcePosition::new(10, 1, 0), &config);
    let numbers: Vec<u32> = excerpt.lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![8, 9, 10, 11]);
    assert_eq!(excerpt.gutter_width, 2);
}

#[test]
fn long_context_lines_are_truncated() {
    let long = "x".repeat(30);
    let source = format!("{long}\nerror here");
    let config = ExcerptConfig {
        max_line_width: 10,
        ..ExcerptConfig::default()
    };
    let excerpt = Excerpt::build(&source, SourcePosition::new(2, 1, 31), &config);
    assert!(excerpt.lines[0].truncated);
    assert_eq!(excerpt.lines[0].text, "x".repeat(10));
    assert!(excerpt.render_plain().starts_with(&format!("  1 | {} ...\n", "x".repeat(10))));
}

#[test]
fn error_line_is_windowed_around_the_span() {
    let line = format!("{}!{}", "a".repeat(100), "b".repeat(100));
    let config = ExcerptConfig {
        horizontal_context: 5,
        ..ExcerptConfig::default()
    };
    let excerpt = Excerpt::build(&line, SourcePosition::new(1, 101, 100), &config);
    let error = &excerpt.lines[0];
    assert_eq!(error.text, "aaaaa!bbbbb");
    assert_eq!(error.highlight, Some(Highlight { start: 5, width: 1 }));
    assert!(error.truncated);
    assert_eq!(
        excerpt.render_plain(),
        "> 1 | aaaaa!bbbbb ...\n    |      ^\n"
    );
}

#[test]
fn error_line_cut_on_one_side_is_truncated() {
    let config = ExcerptConfig {
        horizontal_context: 3,
        ..ExcerptConfig::default()
    };
    let head = Excerpt::build("ab!cdefgh", SourcePosition::new(1, 3, 2), &config);
    assert_eq!(head.lines[0].text, "ab!cde");
    assert!(head.lines[0].truncated);

    let tail = Excerpt::build("abcdefg!h", SourcePosition::new(1, 8, 7), &config);
    assert_eq!(tail.lines[0].text, "efg!h");
    assert!(tail.lines[0].truncated);

    let whole = Excerpt::build("ab!cd", SourcePosition::new(1, 3, 2), &config);
    assert_eq!(whole.lines[0].text, "ab!cd");
    assert!(!whole.lines[0].truncated);
}

#[test]
fn position_at_end_of_input() {
    let source = "<div>";
    let excerpt = Excerpt::build(
        source,
        SourcePosition::new(1, 6, 5),
        &ExcerptConfig::default(),
    );
    assert_eq!(
        excerpt.render_plain(),
        "> 1 | <div>\n    |      ^\n"
    );
}
