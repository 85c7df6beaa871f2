use crate::sequence::prelude::*;

#[test]
fn display() {
    let sequence = crate::sequence!["a", "b", "c"];
    assert_eq!(sequence.to_string(), "[a b c]");

    let numbers = crate::sequence![1, 2, 3];
    assert_eq!(format!("{numbers}"), "[1 2 3]");
}

#[test]
fn display_empty() {
    let sequence: Sequence<i32> = Sequence::new();
    assert_eq!(sequence.to_string(), "[]");
}

#[test]
fn display_single() {
    let sequence = crate::sequence![7];
    assert_eq!(sequence.to_string(), "[7]");
}

#[test]
fn display_tracks_mutation() -> anyhow::Result<()> {
    let mut sequence = crate::sequence!["x", "y"];
    sequence.remove(0)?;
    assert_eq!(sequence.to_string(), "[y]");

    sequence.clear();
    assert_eq!(sequence.to_string(), "[]");

    Ok(())
}
