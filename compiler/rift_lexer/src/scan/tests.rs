use pretty_assertions::assert_eq;
use rift_ir::TokenKind as K;

use crate::{LexErrorKind, LexMode, Lexer};

fn lex(mode: LexMode, src: &str) -> Vec<K> {
    let mut lexer = Lexer::new(src);
    lexer.push_mode(mode);
    lexer
        .collect_tokens()
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn lex_err(mode: LexMode, src: &str) -> crate::LexError {
    let mut lexer = Lexer::new(src);
    lexer.push_mode(mode);
    lexer.collect_tokens().unwrap_err()
}

fn ws(s: &str) -> K {
    K::Whitespace(s.to_string())
}

fn text(s: &str) -> K {
    K::Text(s.to_string())
}

fn ident(s: &str) -> K {
    K::Identifier(s.to_string())
}

// === HtmlText ===

#[test]
fn html_text_runs_and_boundaries() {
    assert_eq!(
        lex(LexMode::HtmlText, "Hi there<b>"),
        vec![
            text("Hi"),
            ws(" "),
            text("there"),
            K::TagOpen,
            text("b"),
            K::TagClose
        ]
    );
}

#[test]
fn html_text_braces_and_interpolation() {
    assert_eq!(
        lex(LexMode::HtmlText, "@for{ {{"),
        vec![
            K::At,
            text("for"),
            K::LeftBrace,
            ws(" "),
            K::InterpolationStart
        ]
    );
    assert_eq!(lex(LexMode::HtmlText, "}"), vec![K::RightBrace]);
}

#[test]
fn html_text_entities() {
    assert_eq!(
        lex(LexMode::HtmlText, "a&amp;b&#39;"),
        vec![
            text("a"),
            K::Entity("&amp;".to_string()),
            text("b"),
            K::Entity("&#39;".to_string())
        ]
    );
}

#[test]
fn unterminated_entity_is_fatal() {
    let err = lex_err(LexMode::HtmlText, "Tom & Jerry");
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidEntity {
            text: "&".to_string()
        }
    );
    assert_eq!(err.position.column, 5);

    let err = lex_err(LexMode::HtmlText, "&amp");
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidEntity {
            text: "&amp".to_string()
        }
    );
}

#[test]
fn html_comments() {
    assert_eq!(
        lex(LexMode::HtmlText, "<!-- note -->x"),
        vec![K::HtmlComment(" note ".to_string()), text("x")]
    );
    let err = lex_err(LexMode::HtmlText, "a\n<!-- open");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!((err.position.line, err.position.column), (2, 1));
}

// === HtmlTag ===

#[test]
fn tag_attributes_and_bindings() {
    assert_eq!(
        lex(LexMode::HtmlTag, r#"div id="x" [(value)]="m" *if/>"#),
        vec![
            ident("div"),
            ws(" "),
            ident("id"),
            K::Equals,
            K::String("x".to_string()),
            ws(" "),
            K::LeftBracket,
            K::LeftParen,
            ident("value"),
            K::RightParen,
            K::RightBracket,
            K::Equals,
            K::String("m".to_string()),
            ws(" "),
            K::Star,
            ident("if"),
            K::Slash,
            K::TagClose
        ]
    );
}

#[test]
fn tag_identifiers_keep_dashes_colons_and_dots() {
    assert_eq!(
        lex(LexMode::HtmlTag, "data-id xml:lang on.click"),
        vec![
            ident("data-id"),
            ws(" "),
            ident("xml:lang"),
            ws(" "),
            ident("on.click")
        ]
    );
}

#[test]
fn tag_literals() {
    assert_eq!(
        lex(LexMode::HtmlTag, "TRUE false 12.5"),
        vec![
            K::Boolean(true),
            ws(" "),
            K::Boolean(false),
            ws(" "),
            K::Number(12.5)
        ]
    );
}

#[test]
fn tag_rejects_unknown_characters() {
    let err = lex_err(LexMode::HtmlTag, "a %");
    assert_eq!(
        err.kind,
        LexErrorKind::UnexpectedChar {
            found: '%',
            mode: LexMode::HtmlTag
        }
    );
    assert_eq!(err.position.column, 3);
}

// === Expression ===

#[test]
fn expression_paths_and_end() {
    assert_eq!(
        lex(LexMode::Expression, " post.title }}"),
        vec![
            ws(" "),
            ident("post"),
            K::Dot,
            ident("title"),
            ws(" "),
            K::InterpolationEnd
        ]
    );
    assert_eq!(lex(LexMode::Expression, "$index"), vec![ident("$index")]);
}

#[test]
fn expression_operators_longest_first() {
    assert_eq!(
        lex(LexMode::Expression, "=== !== == != <= >= = !"),
        vec![
            K::EqEqEq,
            ws(" "),
            K::NotEqEq,
            ws(" "),
            K::EqEq,
            ws(" "),
            K::NotEq,
            ws(" "),
            K::LtEq,
            ws(" "),
            K::GtEq,
            ws(" "),
            K::Equals,
            ws(" "),
            K::Bang
        ]
    );
}

#[test]
fn expression_literals() {
    assert_eq!(
        lex(LexMode::Expression, "'a' 3 `t${x}` True"),
        vec![
            K::String("a".to_string()),
            ws(" "),
            K::Number(3.0),
            ws(" "),
            K::TemplateLiteral("t${x}".to_string()),
            ws(" "),
            K::Boolean(true)
        ]
    );
}

#[test]
fn expression_rejects_unknown_characters() {
    let err = lex_err(LexMode::Expression, "a ~");
    assert_eq!(
        err.kind,
        LexErrorKind::UnexpectedChar {
            found: '~',
            mode: LexMode::Expression
        }
    );
}

// === Css ===

#[test]
fn css_rules() {
    assert_eq!(
        lex(LexMode::Css, "a{color:#fff;margin:1.5em 2px}"),
        vec![
            K::CssIdentifier("a".to_string()),
            K::LeftBrace,
            K::CssIdentifier("color".to_string()),
            K::Colon,
            K::CssHexColor("fff".to_string()),
            K::Semicolon,
            K::CssIdentifier("margin".to_string()),
            K::Colon,
            K::CssDimension {
                value: 1.5,
                unit: "em".to_string()
            },
            ws(" "),
            K::CssDimension {
                value: 2.0,
                unit: "px".to_string()
            },
            K::RightBrace
        ]
    );
}

#[test]
fn css_unknown_unit_rewinds_to_number() {
    assert_eq!(
        lex(LexMode::Css, "2s"),
        vec![K::Number(2.0), K::CssIdentifier("s".to_string())]
    );
}

#[test]
fn css_hash_that_is_not_a_color() {
    assert_eq!(
        lex(LexMode::Css, "#main"),
        vec![K::Hash, K::CssIdentifier("main".to_string())]
    );
}

#[test]
fn css_comments_strings_and_end() {
    assert_eq!(
        lex(LexMode::Css, "/* c */'x'</STYLE>"),
        vec![
            K::CssComment(" c ".to_string()),
            K::String("x".to_string()),
            K::StyleEnd
        ]
    );
    let err = lex_err(LexMode::Css, "a /* open");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.position.column, 3);
}

#[test]
fn css_strings_keep_escapes() {
    assert_eq!(
        lex(LexMode::Css, r#"content:"\201C" '\f101'"#),
        vec![
            K::CssIdentifier("content".to_string()),
            K::Colon,
            K::String(r"\201C".to_string()),
            ws(" "),
            K::String(r"\f101".to_string())
        ]
    );
    assert_eq!(
        lex(LexMode::Css, r#""a\"b""#),
        vec![K::String(r#"a\"b"#.to_string())]
    );
    let err = lex_err(LexMode::Css, r#"x "\201C"#);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position.column, 3);
}

// === Script ===

#[test]
fn script_code_then_end() {
    assert_eq!(
        lex(LexMode::Script, "let a = 1;</script>"),
        vec![K::ScriptCode("let a = 1;".to_string()), K::ScriptEnd]
    );
}

#[test]
fn script_end_inside_string_is_code() {
    let code = r#"let s = "</script>"; f('{{x}}')"#;
    assert_eq!(
        lex(LexMode::Script, &format!("{code}</script>")),
        vec![K::ScriptCode(code.to_string()), K::ScriptEnd]
    );
}

#[test]
fn script_interpolation_delimiters() {
    assert_eq!(
        lex(LexMode::Script, "a({{"),
        vec![K::ScriptCode("a(".to_string()), K::InterpolationStart]
    );
    assert_eq!(
        lex(LexMode::Script, "}})"),
        vec![K::InterpolationEnd, K::ScriptCode(")".to_string())]
    );
}

#[test]
fn script_comments_do_not_open_strings() {
    let code = "\n// don't do this\nlet x = 1;\n/* it's \"fine\" */ y();\n";
    assert_eq!(
        lex(LexMode::Script, &format!("{code}</script>")),
        vec![K::ScriptCode(code.to_string()), K::ScriptEnd]
    );
}

#[test]
fn script_end_closes_an_open_comment() {
    assert_eq!(
        lex(LexMode::Script, "a(); // tail</script>"),
        vec![K::ScriptCode("a(); // tail".to_string()), K::ScriptEnd]
    );
    assert_eq!(
        lex(LexMode::Script, "/* open</script>"),
        vec![K::ScriptCode("/* open".to_string()), K::ScriptEnd]
    );
}

#[test]
fn script_quotes_end_at_line_break() {
    let code = "let s = 'it\nf({{";
    assert_eq!(
        lex(LexMode::Script, code),
        vec![
            K::ScriptCode("let s = 'it\nf(".to_string()),
            K::InterpolationStart
        ]
    );
}

#[test]
fn script_template_literal_spans_lines() {
    let code = "let t = `a\n{{ b }}\n`;";
    assert_eq!(
        lex(LexMode::Script, &format!("{code}</script>")),
        vec![K::ScriptCode(code.to_string()), K::ScriptEnd]
    );
}

#[test]
fn empty_script_yields_no_code_token() {
    assert_eq!(lex(LexMode::Script, "</script>"), vec![K::ScriptEnd]);
    assert_eq!(lex(LexMode::Script, ""), Vec::<K>::new());
}

// === Matter ===

fn matter(src: &str) -> (String, String) {
    let mut lexer = Lexer::new(src);
    lexer.push_mode(LexMode::Matter);
    let token = lexer.next().unwrap().unwrap();
    assert_eq!(lexer.next().unwrap(), None);
    lexer.pop_mode();
    let content = match token.kind {
        K::MatterContent(content) => content,
        other => panic!("expected front matter, got {other:?}"),
    };
    let rest = lexer
        .collect_tokens()
        .unwrap()
        .iter()
        .map(|t| match &t.kind {
            K::Text(s) | K::Whitespace(s) => s.clone(),
            other => other.display_name().to_string(),
        })
        .collect();
    (content, rest)
}

#[test]
fn matter_block_is_extracted() {
    let (content, rest) = matter("---\ntitle: Home\nn: 2\n---\nbody");
    assert_eq!(content, "title: Home\nn: 2");
    assert_eq!(rest, "body");
}

#[test]
fn matter_with_crlf() {
    let (content, rest) = matter("---\r\na: 1\r\n---\r\nx");
    assert_eq!(content, "a: 1");
    assert_eq!(rest, "x");
}

#[test]
fn empty_matter_block() {
    assert_eq!(matter("---\n---\n").0, "");
}

#[test]
fn no_matter_yields_empty_content() {
    let (content, rest) = matter("hello");
    assert_eq!(content, "");
    assert_eq!(rest, "hello");
}

#[test]
fn delimiter_inside_template_literal_is_content() {
    let (content, _) = matter("---\nconst t = `\n---\n`;\n---\n");
    assert_eq!(content, "const t = `\n---\n`;");
}

#[test]
fn apostrophe_does_not_swallow_terminator() {
    let (content, _) = matter("---\ntitle: Don't\n---\n");
    assert_eq!(content, "title: Don't");
}

#[test]
fn quoted_value_spans_lines() {
    let (content, rest) = matter("---\ndesc: \"a\n---\nb\"\n---\nbody");
    assert_eq!(content, "desc: \"a\n---\nb\"");
    assert_eq!(rest, "body");
}

#[test]
fn single_quoted_value_spans_lines() {
    let (content, _) = matter("---\nnote: 'one\n---\ntwo'\nname: Don't\n---\n");
    assert_eq!(content, "note: 'one\n---\ntwo'\nname: Don't");
}

#[test]
fn unterminated_matter_points_at_opening() {
    let err = lex_err(LexMode::Matter, "---\ntitle: x\n");
    assert_eq!(err.kind, LexErrorKind::UnterminatedMatter);
    assert_eq!(err.position.offset, 0);
}
