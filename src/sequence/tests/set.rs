use crate::sequence::{traits::*, *};

#[test]
fn set() -> anyhow::Result<()> {
    let mut sequence = crate::sequence![10, 20, 30];

    sequence.set(0, 42)?;
    assert_eq!(sequence.get(0)?, &42);
    assert_eq!(sequence.as_slice(), &[42, 20, 30]);

    Ok(())
}

#[test]
fn set_on_empty() {
    // length is 0, so no index is settable
    let mut sequence: Sequence<i32> = Sequence::new();
    let result = sequence.set(0, 42);
    assert!(result.is_err(), "setting on an empty sequence must error");
}

#[test]
fn set_does_not_resize() -> anyhow::Result<()> {
    let mut sequence = crate::sequence![1, 2, 3];
    sequence.set(2, 9)?;
    assert_eq!(sequence.len(), 3);
    Ok(())
}

#[test]
#[should_panic]
fn set_error() {
    let mut sequence = crate::sequence![1, 2];

    // cannot set at an out-of-bounds index
    let _ = sequence.set(10, 42).unwrap();
}
