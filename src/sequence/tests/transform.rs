use crate::sequence::prelude::*;

#[test]
fn map() {
    let mut sequence = crate::sequence![1, 2, 3];
    sequence.map(|value| value * value);
    assert_eq!(sequence.as_slice(), &[1, 4, 9]);

    let mut empty: Sequence<i32> = Sequence::new();
    empty.map(|value| value + 1);
    assert!(empty.is_empty());
}

#[test]
fn filter() {
    let mut sequence = crate::sequence![1, 2, 3, 4, 5, 6];
    sequence.filter(|value| value % 2 == 0);
    assert_eq!(sequence.as_slice(), &[2, 4, 6]);

    sequence.filter(|_| false);
    assert!(sequence.is_empty());
}

// map then filter over strings, applied left to right
#[test]
fn map_then_filter() {
    let mut sequence: Sequence<String> =
        ["a", "b", "c"].into_iter().map(String::from).collect();

    sequence
        .map(|part| part + "!")
        .filter(|part| !part.contains('b'));

    assert_eq!(sequence.to_vec(), vec!["a!".to_string(), "c!".to_string()]);
}

#[test]
fn reduce() {
    let sequence = crate::sequence![1, 2, 3, 4];
    assert_eq!(sequence.reduce(|accumulator, value| accumulator + value), 10);

    // left fold: the accumulator starts as the first element
    let sequence = crate::sequence![10, 1, 2];
    assert_eq!(sequence.reduce(|accumulator, value| accumulator - value), 7);

    let single = crate::sequence![42];
    assert_eq!(single.reduce(|accumulator, value| accumulator * value), 42);
}

#[test]
fn reduce_on_empty_yields_default() {
    let numbers: Sequence<i32> = Sequence::new();
    assert_eq!(numbers.reduce(|accumulator, value| accumulator + value), 0);

    let words: Sequence<String> = Sequence::new();
    assert_eq!(
        words.reduce(|accumulator, word| accumulator + &word),
        String::new()
    );
}

#[test]
fn for_each() {
    let sequence = crate::sequence![1, 2, 3];

    let mut visited = Vec::new();
    sequence.for_each(|value| visited.push(*value));
    assert_eq!(visited, vec![1, 2, 3]);

    // visiting does not mutate the sequence
    assert_eq!(sequence.as_slice(), &[1, 2, 3]);
}
