#![cfg(test)]

// Property tests for Table kept inside the crate so they can check bucket
// placement against the private bucket array.

use crate::error::TableError;
use crate::fnv::{bucket_index, fnv1a64};
use crate::key::{HashKey, IntKey, StrKey};
use crate::table::{Table, LOAD_FACTOR_THRESHOLD};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Model key mirroring the two concrete key kinds.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
enum MKey {
    Int(i64),
    Str(String),
}

impl MKey {
    fn boxed(&self) -> Box<dyn HashKey> {
        match self {
            MKey::Int(i) => Box::new(IntKey(*i)),
            MKey::Str(s) => Box::new(StrKey(s.clone())),
        }
    }

    fn set_into(&self, t: &mut Table<i32>, v: i32) -> Option<i32> {
        match self {
            MKey::Int(i) => t.set(IntKey(*i), v),
            MKey::Str(s) => t.set(StrKey(s.clone()), v),
        }
    }

    fn of(k: &dyn HashKey) -> MKey {
        if let Some(i) = k.as_any().downcast_ref::<IntKey>() {
            MKey::Int(i.0)
        } else if let Some(s) = k.as_any().downcast_ref::<StrKey>() {
            MKey::Str(s.0.clone())
        } else {
            unreachable!("only IntKey and StrKey are stored")
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Delete(usize),
    Dump,
}

// Small ints encode to a single ASCII byte; when that byte is printable the
// pool also gets a string key with identical hash bytes.
fn arb_scenario() -> impl Strategy<Value = (Vec<MKey>, Vec<Op>)> {
    (
        proptest::collection::vec(-64i64..64, 1..=6),
        proptest::collection::vec("[a-z]{0,4}", 0..=6),
    )
        .prop_flat_map(|(ints, strs)| {
            let mut pool: Vec<MKey> = Vec::new();
            for i in ints {
                let bytes = IntKey(i).hash_bytes().into_owned();
                pool.push(MKey::Int(i));
                if bytes.iter().all(|b| b.is_ascii_graphic()) {
                    pool.push(MKey::Str(String::from_utf8_lossy(&bytes).into_owned()));
                }
            }
            pool.extend(strs.into_iter().map(MKey::Str));
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
                2 => idx.clone().prop_map(Op::Get),
                2 => idx.clone().prop_map(Op::Delete),
                1 => Just(Op::Dump),
            ];
            proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
        })
}

fn check_structure(t: &Table<i32>) -> Result<(), TestCaseError> {
    let n = t.bucket_count();
    let mut total = 0;
    for (i, bucket) in t.buckets.iter().enumerate() {
        for e in bucket {
            let idx = bucket_index(fnv1a64(&e.key.hash_bytes()), n);
            prop_assert_eq!(idx, i, "entry {} mis-bucketed", e.key);
        }
        for (a, ea) in bucket.iter().enumerate() {
            for eb in &bucket[a + 1..] {
                prop_assert!(!ea.key.key_eq(eb.key.as_ref()), "duplicate key {}", ea.key);
            }
        }
        total += bucket.len();
    }
    prop_assert_eq!(total, t.len());
    prop_assert!(t.load_factor() <= LOAD_FACTOR_THRESHOLD);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` overwrites equal keys and returns the previous value.
// - Int and string keys with identical hash bytes stay independent.
// - `delete` returns the stored value or `NotFound` when absent.
// - Every entry sits in the bucket its hash selects; no duplicates per chain.
// - `len` parity with the model and load factor at most 0.5 after each op.
// - The dump and `iter` enumerate each live entry exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: Table<i32> = Table::with_buckets(1).unwrap();
        let mut model: HashMap<MKey, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let k = &pool[i];
                    let prev = k.set_into(&mut sut, v);
                    prop_assert_eq!(prev, model.insert(k.clone(), v));
                }
                Op::Get(i) => {
                    let k = pool[i].boxed();
                    prop_assert_eq!(sut.get(k.as_ref()), model.get(&pool[i]));
                    prop_assert_eq!(sut.contains_key(k.as_ref()), model.contains_key(&pool[i]));
                }
                Op::Delete(i) => {
                    let k = pool[i].boxed();
                    match (sut.delete(k.as_ref()), model.remove(&pool[i])) {
                        (Ok(v), Some(mv)) => prop_assert_eq!(v, mv),
                        (Err(TableError::NotFound { key }), None) => {
                            prop_assert_eq!(key, k.to_string());
                        }
                        (got, want) => {
                            prop_assert!(false, "delete mismatch: {:?} vs {:?}", got, want);
                        }
                    }
                }
                Op::Dump => {
                    let text = sut.display().to_string();
                    let lines: Vec<&str> = text.lines().collect();
                    prop_assert_eq!(lines.len(), 1 + sut.bucket_count());
                    let header = format!("length = {}", model.len());
                    prop_assert_eq!(lines[0], header.as_str());
                    let mut listed = 0;
                    for (view, line) in sut.buckets().zip(&lines[1..]) {
                        let prefix = format!("bucket {:3}:", view.index());
                        prop_assert!(line.starts_with(prefix.as_str()));
                        for (k, v) in view.entries() {
                            let pair = format!("{}:{}", k, v);
                            prop_assert!(line.contains(pair.as_str()));
                            listed += 1;
                        }
                    }
                    prop_assert_eq!(listed, model.len());
                }
            }

            check_structure(&sut)?;
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let s_keys: BTreeSet<MKey> = sut.iter().map(|(k, _)| MKey::of(k)).collect();
            let m_keys: BTreeSet<MKey> = model.keys().cloned().collect();
            prop_assert_eq!(s_keys, m_keys);
            prop_assert_eq!(sut.iter().count(), model.len());
        }
    }
}
