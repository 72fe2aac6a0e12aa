//! Unit and property tests for the disjoint-set strategies.

use proptest::prelude::*;
use rstest::rstest;

use super::{Strategy, UnionFind};
use crate::error::UnionFindError;

fn engine(strategy: Strategy, n: usize) -> Box<dyn UnionFind> {
    strategy.build(n)
}

#[rstest]
#[case::quick_find(Strategy::QuickFind)]
#[case::quick_union(Strategy::QuickUnion)]
#[case::weighted(Strategy::Weighted)]
#[case::weighted_compressed(Strategy::WeightedCompressed)]
fn fresh_universe_is_all_singletons(#[case] strategy: Strategy) {
    let mut uf = engine(strategy, 8);
    assert_eq!(uf.len(), 8);
    assert_eq!(uf.count(), 8);
    for i in 0..8 {
        assert!(uf.connected(i, i).expect("id is in range"));
    }
    for i in 1..8 {
        assert!(!uf.connected(0, i).expect("ids are in range"));
    }
}

#[rstest]
#[case::quick_find(Strategy::QuickFind)]
#[case::quick_union(Strategy::QuickUnion)]
#[case::weighted(Strategy::Weighted)]
#[case::weighted_compressed(Strategy::WeightedCompressed)]
fn union_connects_and_decrements_count(#[case] strategy: Strategy) {
    let mut uf = engine(strategy, 6);

    assert!(uf.union(0, 1).expect("ids are in range"));
    assert!(uf.connected(0, 1).expect("ids are in range"));
    assert!(uf.connected(1, 0).expect("ids are in range"));
    assert_eq!(uf.count(), 5);

    // Redundant union is a valid no-op and must not touch the count.
    assert!(!uf.union(1, 0).expect("ids are in range"));
    assert_eq!(uf.count(), 5);

    assert!(uf.union(2, 3).expect("ids are in range"));
    assert!(uf.union(1, 3).expect("ids are in range"));
    assert_eq!(uf.count(), 3);
    assert!(uf.connected(0, 2).expect("ids are in range"));
}

#[rstest]
#[case::quick_find(Strategy::QuickFind)]
#[case::quick_union(Strategy::QuickUnion)]
#[case::weighted(Strategy::Weighted)]
#[case::weighted_compressed(Strategy::WeightedCompressed)]
fn out_of_range_ids_are_rejected(#[case] strategy: Strategy) {
    let mut uf = engine(strategy, 4);

    let err = uf.find(4).expect_err("id 4 is out of range");
    assert_eq!(err, UnionFindError::OutOfRange { id: 4, len: 4 });

    let err = uf.union(0, 9).expect_err("id 9 is out of range");
    assert_eq!(err, UnionFindError::OutOfRange { id: 9, len: 4 });

    let err = uf.connected(17, 0).expect_err("id 17 is out of range");
    assert_eq!(err, UnionFindError::OutOfRange { id: 17, len: 4 });

    // A failed operation leaves the structure untouched.
    assert_eq!(uf.count(), 4);
}

#[rstest]
#[case::quick_find(Strategy::QuickFind)]
#[case::quick_union(Strategy::QuickUnion)]
#[case::weighted(Strategy::Weighted)]
#[case::weighted_compressed(Strategy::WeightedCompressed)]
fn fully_merged_universe_has_one_component(#[case] strategy: Strategy) {
    let mut uf = engine(strategy, 16);
    for i in 1..16 {
        assert!(uf.union(i - 1, i).expect("ids are in range"));
    }
    assert_eq!(uf.count(), 1);
    assert!(uf.connected(0, 15).expect("ids are in range"));
}

#[test]
fn compression_never_changes_membership() {
    let mut plain = Strategy::Weighted.build(32);
    let mut compressed = Strategy::WeightedCompressed.build(32);

    let pairs = [(0, 1), (1, 2), (2, 3), (8, 9), (9, 10), (3, 10), (30, 31)];
    for (p, q) in pairs {
        plain.union(p, q).expect("ids are in range");
        compressed.union(p, q).expect("ids are in range");
    }

    // Query every pair twice so compressed lookups run over already
    // flattened paths as well.
    for _ in 0..2 {
        for p in 0..32 {
            for q in 0..32 {
                assert_eq!(
                    plain.connected(p, q).expect("ids are in range"),
                    compressed.connected(p, q).expect("ids are in range"),
                    "membership diverged for ({p}, {q})"
                );
            }
        }
    }
}

#[test]
fn empty_universe_reports_empty() {
    let mut uf = Strategy::WeightedCompressed.build(0);
    assert!(uf.is_empty());
    assert_eq!(uf.count(), 0);
    assert!(uf.find(0).is_err());
}

proptest! {
    /// `connected` stays an equivalence relation under arbitrary unions:
    /// reflexive, symmetric, and transitive on sampled triples.
    #[test]
    fn connected_is_an_equivalence_relation(
        unions in prop::collection::vec((0..24usize, 0..24usize), 0..40),
        triple in (0..24usize, 0..24usize, 0..24usize),
    ) {
        let mut uf = Strategy::WeightedCompressed.build(24);
        for (p, q) in unions {
            uf.union(p, q).expect("ids are in range");
        }

        let (a, b, c) = triple;
        prop_assert!(uf.connected(a, a).expect("id is in range"));
        prop_assert_eq!(
            uf.connected(a, b).expect("ids are in range"),
            uf.connected(b, a).expect("ids are in range"),
        );
        if uf.connected(a, b).expect("ids are in range")
            && uf.connected(b, c).expect("ids are in range")
        {
            prop_assert!(uf.connected(a, c).expect("ids are in range"));
        }
    }

    /// All four strategies agree on every `connected` answer and on the
    /// component count after the same union sequence.
    #[test]
    fn strategies_are_observationally_equivalent(
        unions in prop::collection::vec((0..16usize, 0..16usize), 0..32),
    ) {
        let mut engines: Vec<Box<dyn UnionFind>> = Strategy::all()
            .into_iter()
            .map(|strategy| strategy.build(16))
            .collect();

        for (p, q) in unions {
            let outcomes: Vec<bool> = engines
                .iter_mut()
                .map(|uf| uf.union(p, q).expect("ids are in range"))
                .collect();
            prop_assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
        }

        let counts: Vec<usize> = engines.iter().map(|uf| uf.count()).collect();
        prop_assert!(counts.windows(2).all(|w| w[0] == w[1]));

        for p in 0..16 {
            for q in 0..16 {
                let answers: Vec<bool> = engines
                    .iter_mut()
                    .map(|uf| uf.connected(p, q).expect("ids are in range"))
                    .collect();
                prop_assert!(answers.windows(2).all(|w| w[0] == w[1]));
            }
        }
    }
}
