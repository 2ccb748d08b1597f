use anyhow::Result;
use sl::read::read_str;
use std::fmt::Write;

const INPUT: &str = include_str!("t-input.sl");
const EXPECTED: &str = include_str!("t-expected.txt");

// What the interactive front end shows for one line.
fn transcript(line: &str) -> String {
    match read_str(line) {
        Ok(Some(node)) => node.to_string(),
        Ok(None) => String::new(),
        Err(e) => format!("error: {e}"),
    }
}

#[test]
fn t1() -> Result<()> {
    let mut out = String::new();
    for line in INPUT.lines() {
        writeln!(out, "{}", transcript(line))?;
    }
    assert_eq!(out, EXPECTED);
    Ok(())
}
