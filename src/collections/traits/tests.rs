#![cfg(test)]

use super::*;
use crate::collections::binary_tree::TreeDictionary;
use crate::collections::hash::HashDictionary;

// Every check in this file takes `impl Dictionary` and runs once per
// implementation: the contract is what's under test, not the structures.

fn check_roundtrip(dict: &mut impl Dictionary<String, u32>) {
    assert!(dict.is_empty());

    for index in 0..50_u32 {
        assert_eq!(dict.insert(format!("key-{index:02}"), index), None);
    }
    assert_eq!(dict.len(), 50);

    for index in 0..50_u32 {
        assert_eq!(dict.get(&format!("key-{index:02}")), Ok(&index));
    }

    assert_eq!(dict.insert(String::from("key-07"), 700), Some(7));
    assert_eq!(dict.len(), 50, "Overwriting must not change the size.");
    assert_eq!(dict.get(&String::from("key-07")), Ok(&700));
}

fn check_absence(dict: &mut impl Dictionary<String, u32>) {
    let ghost = String::from("never-inserted");
    assert!(!dict.contains(&ghost));
    assert_eq!(dict.get(&ghost), Err(KeyNotFound));
    assert_eq!(dict.remove(&ghost), Err(KeyNotFound));

    dict.insert(ghost.clone(), 1);
    assert_eq!(dict.remove(&ghost), Ok(1));
    assert!(
        !dict.contains(&ghost),
        "A removed key must be indistinguishable from one never inserted."
    );
    assert_eq!(dict.get(&ghost), Err(KeyNotFound));
}

fn check_size_tracking(dict: &mut impl Dictionary<String, u32>) {
    for index in 0..20_u32 {
        dict.insert(index.to_string(), index);
    }
    for index in 0..10_u32 {
        dict.remove(&index.to_string()).expect("inserted above");
    }
    assert_eq!(
        dict.len(),
        10,
        "Size must be insertions of distinct keys minus successful removals."
    );
}

fn check_iteration(dict: &mut impl Dictionary<String, u32>) {
    for index in 0..10_u32 {
        dict.insert(index.to_string(), index);
    }

    let mut total = 0;
    dict.for_each(|_, value| {
        total += value;
        true
    });
    assert_eq!(total, 45);

    let mut visited = 0;
    dict.for_each(|_, _| {
        visited += 1;
        visited < 4
    });
    assert_eq!(visited, 4, "The callback returning false must stop the traversal.");

    let mut cursor = dict.iter();
    let mut stepped = 0;
    while cursor.has_next() {
        cursor.current().expect("has_next implies a current entry");
        cursor.advance().expect("has_next implies a step");
        stepped += 1;
    }
    assert_eq!(stepped, 10);
    assert_eq!(cursor.current(), Err(IteratorExhausted));

    assert_eq!(dict.iter().count(), 10, "The cursor also drives plain iteration.");
}

/// Mixes both failure kinds behind one `?`, the way calling code does.
fn smallest_value<D: Dictionary<String, u32>>(dict: &D) -> Result<u32, DictionaryError> {
    let mut smallest = *dict.iter().current()?.1;
    dict.for_each(|_, value| {
        smallest = smallest.min(*value);
        true
    });
    Ok(smallest)
}

fn take_value<D: Dictionary<String, u32>>(
    dict: &mut D,
    key: &String,
) -> Result<u32, DictionaryError> {
    let value = dict.remove(key)?;
    Ok(value)
}

#[test]
fn test_contract_hash() {
    check_roundtrip(&mut HashDictionary::<String, u32>::new());
    check_absence(&mut HashDictionary::<String, u32>::new());
    check_size_tracking(&mut HashDictionary::<String, u32>::new());
    check_iteration(&mut HashDictionary::<String, u32>::new());
}

#[test]
fn test_contract_tree() {
    check_roundtrip(&mut TreeDictionary::new());
    check_absence(&mut TreeDictionary::new());
    check_size_tracking(&mut TreeDictionary::new());
    check_iteration(&mut TreeDictionary::new());
}

#[test]
fn test_error_union() {
    let mut dict: HashDictionary<String, u32> = HashDictionary::new();

    let error = smallest_value(&dict).expect_err("an empty dictionary has no smallest value");
    assert!(error.is_iterator_exhausted());

    let error = take_value(&mut dict, &String::from("missing"))
        .expect_err("nothing has been inserted yet");
    assert!(error.is_key_not_found());
    assert_eq!(error.to_string(), "Key not present in the dictionary!");
    let narrowed: Result<KeyNotFound, _> = error.try_into();
    assert!(narrowed.is_ok(), "The union should narrow back to the variant it wraps.");

    dict.insert(String::from("a"), 3);
    dict.insert(String::from("b"), 1);
    assert_eq!(smallest_value(&dict).expect("two entries are present"), 1);
    assert_eq!(take_value(&mut dict, &String::from("b")).expect("b is present"), 1);
}

#[test]
fn test_ordered_contract() {
    fn check(dict: &mut impl OrderedDictionary<u32, u32>) {
        for key in [5_u32, 2, 8, 1, 3, 7, 9] {
            dict.insert(key, key * 10);
        }

        let keys = dict
            .range(Some(&2), Some(&8))
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();
        assert_eq!(keys, [2, 3, 5, 7, 8], "Range bounds are inclusive on both sides.");

        let mut visited = Vec::new();
        dict.for_each_range(Some(&3), None, |key, _| {
            visited.push(*key);
            true
        });
        assert_eq!(visited, [3, 5, 7, 8, 9]);
    }

    check(&mut TreeDictionary::new());
}
