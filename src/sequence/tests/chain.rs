use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::sequence::prelude::*;

// one fluent chain, applied strictly left to right
#[test]
fn chain() -> anyhow::Result<()> {
    let mut sequence = Sequence::new();

    sequence
        .append([4, 5])
        .prepend([1, 3])
        .insert(2, [2])?
        .set(4, 50)?
        .swap(0, 1)?
        .reverse();

    assert_eq!(sequence.as_slice(), &[50, 4, 2, 1, 3]);

    Ok(())
}

#[test]
fn chain_of_transforms() {
    let mut sequence: Sequence<i64> = (1..=10).collect();

    sequence
        .map(|value| value * 3)
        .filter(|value| value % 2 == 0)
        .sort(|a, b| a > b);

    assert_eq!(sequence.as_slice(), &[30, 24, 18, 12, 6]);
    assert_eq!(sequence.reduce(|accumulator, value| accumulator + value), 90);
}

// a failed link reports the error and the chain stops cleanly
#[test]
fn chain_stops_at_the_failing_link() {
    let mut sequence = crate::sequence![1, 2, 3];

    let result = sequence.reverse().swap(0, 9);
    assert!(result.is_err());

    // the reverse before the failing swap still applied
    assert_eq!(sequence.as_slice(), &[3, 2, 1]);
}

#[test]
fn chain_with_shuffle() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut sequence: Sequence<i32> = (0..20).collect();

    sequence.shuffle(&mut rng).sort(|a, b| a < b);
    assert_eq!(sequence.to_vec(), (0..20).collect::<Vec<i32>>());
}
