use anyhow::Result;
use kstring::KString;
use sl::buffered_chars::buffered_chars;
use sl::node::Node;
use sl::parse::{ParseError, Parser};
use sl::pos::Pos;
use sl::read::{read_one, read_str};
use sl::settings::{Settings, DEFAULT_SETTINGS};

fn read(s: &str) -> Result<Node> {
    Ok(read_str(s)?.expect("a node"))
}

fn read_err(s: &str) -> ParseError {
    read_str(s).expect_err("a parse error").err
}

fn int(n: i64) -> Node {
    Node::IntLiteral { value: n, raw: KString::from_string(n.to_string()) }
}

#[test]
fn nested_arithmetic() -> Result<()> {
    let n = read("(+ 1 (* 2 3))")?;
    assert_eq!(n, Node::List(vec![
        Node::Symbol("+".into()),
        int(1),
        Node::List(vec![Node::Symbol("*".into()), int(2), int(3)]),
    ]));
    assert_eq!(n.to_string(), "( + 1 ( * 2 3 ) )");
    Ok(())
}

#[test]
fn absent_input() -> Result<()> {
    assert!(read_str("")?.is_none());
    assert!(read_str("  ,\t")?.is_none());
    Ok(())
}

#[test]
fn close_paren_at_top_level() -> Result<()> {
    let mut p = Parser::new(buffered_chars(" )".as_bytes()), &DEFAULT_SETTINGS);
    assert!(p.parse()?.is_none());
    assert!(p.pending_close());

    let mut p = Parser::new(buffered_chars("".as_bytes()), &DEFAULT_SETTINGS);
    assert!(p.parse()?.is_none());
    assert!(!p.pending_close());
    Ok(())
}

#[test]
fn only_the_first_form_is_read() -> Result<()> {
    assert_eq!(read("1 2")?, int(1));
    assert_eq!(read("(a) )")?.to_string(), "( a )");
    Ok(())
}

#[test]
fn nesting() -> Result<()> {
    for depth in 1..=50 {
        let s = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        let mut n = read(&s)?;
        for _ in 1..depth {
            assert_eq!(n.children().len(), 1);
            n = n.children()[0].clone();
        }
        assert_eq!(n, Node::List(vec![]));
    }
    Ok(())
}

#[test]
fn nesting_too_deep() -> Result<()> {
    let settings = Settings { depth_fuel: 3, ..DEFAULT_SETTINGS };
    assert!(read_one("((()))".as_bytes(), &settings)?.is_some());
    let e = read_one("(((())))".as_bytes(), &settings).unwrap_err();
    assert!(matches!(e.err, ParseError::NestingTooDeep));
    assert_eq!(e.pos, Pos { line: 0, offset: 4 });
    Ok(())
}

#[test]
fn basics_ignore_case() -> Result<()> {
    for s in ["nil", "NIL", "Nil"] {
        let n = read(s)?;
        assert_eq!(n, Node::Basic(s.into()));
        assert_eq!(n.to_string(), "NIL");
    }
    assert_eq!(read("tRUE")?.to_string(), "TRUE");
    assert_eq!(read("false")?.to_string(), "FALSE");
    Ok(())
}

#[test]
fn string_escapes() -> Result<()> {
    let n = read(r#""a\nb""#)?;
    assert_eq!(n, Node::StringLiteral("a\nb".into()));
    assert_eq!(n.to_string(), r#""a\nb""#);
    assert_eq!(read(r#""\"\\""#)?, Node::StringLiteral("\"\\".into()));
    assert_eq!(read(r#""(not a list)""#)?,
               Node::StringLiteral("(not a list)".into()));
    assert_eq!(read(r#""""#)?, Node::StringLiteral("".into()));
    Ok(())
}

#[test]
fn strings_inside_lists() -> Result<()> {
    let n = read(r#"("a b" "c")"#)?;
    assert_eq!(n, Node::List(vec![Node::StringLiteral("a b".into()),
                                  Node::StringLiteral("c".into())]));
    Ok(())
}

#[test]
fn negative_integers_and_minus() -> Result<()> {
    let n = read("-42")?;
    assert_eq!(n, int(-42));
    assert_eq!(read("- ")?, Node::Symbol("-".into()));
    assert_eq!(read("-")?, Node::Symbol("-".into()));
    assert_eq!(read("(- 1)")?.children()[0], Node::Symbol("-".into()));
    Ok(())
}

#[test]
fn integer_range() -> Result<()> {
    assert_eq!(read("9223372036854775807")?, int(i64::MAX));
    assert_eq!(read("-9223372036854775808")?, int(i64::MIN));
    assert!(matches!(read_err("9223372036854775808"),
                     ParseError::InvalidIntLiteral(_)));
    assert!(matches!(read_err("1-2"), ParseError::InvalidIntLiteral(_)));
    Ok(())
}

#[test]
fn int_keeps_raw_text() -> Result<()> {
    let n = read("007")?;
    assert_eq!(n, Node::IntLiteral { value: 7, raw: "007".into() });
    assert_eq!(n.to_string(), "007");
    Ok(())
}

#[test]
fn generic_literals() -> Result<()> {
    assert_eq!(read("foo-bar")?, Node::GenericLiteral("foo-bar".into()));
    assert_eq!(read("-x")?, Node::GenericLiteral("-x".into()));
    Ok(())
}

#[test]
fn comments() -> Result<()> {
    assert_eq!(read("; hello")?, Node::Comment(" hello".into()));
    let skip = Settings { keep_comments: false, ..DEFAULT_SETTINGS };
    assert!(read_one("; hello".as_bytes(), &skip)?.is_none());
    assert_eq!(read_one("; hello\n7".as_bytes(), &skip)?, Some(int(7)));
    Ok(())
}

#[test]
fn errors() {
    assert!(matches!(read_err("\"abc"), ParseError::UnterminatedString));
    assert!(matches!(read_err("\"ab\\"), ParseError::UnterminatedString));
    assert!(matches!(read_err("(+ 1 2"), ParseError::UnterminatedList));
    assert!(matches!(read_err("("), ParseError::UnterminatedList));
    assert!(matches!(read_err(r#""a\qb""#), ParseError::InvalidEscape('q')));
    assert!(matches!(read_err("1.5"), ParseError::IllegalToken(_)));
    assert!(matches!(read_err("(1 #)"), ParseError::IllegalToken(_)));
    assert!(matches!(read_err(":"), ParseError::IllegalToken(_)));
}

#[test]
fn error_messages() {
    let e = read_str("(+ 1 2").unwrap_err();
    assert_eq!(e.pos, Pos { line: 0, offset: 6 });
    assert_eq!(e.to_string(), "Invalid list. Missing closing parens \")\" (0:6)");
    let e = read_str("(1 #)").unwrap_err();
    assert_eq!(e.to_string(), "Invalid token \"#\" (0:4)");
    let e = read_str(r#""x\qy""#).unwrap_err();
    assert_eq!(e.to_string(),
               r#"Invalid escaped STRING character "q". Only \n, \", and \\ are allowed. (0:4)"#);
    let e = read_str("(\n\"abc").unwrap_err();
    assert_eq!(e.to_string(), "Invalid STRING. Missing closing '\"' (1:4)");
}
