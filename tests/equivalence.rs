//! Property tests: representation equivalence, variant agreement and
//! pairing invariants on randomized filtrations.

use std::collections::{BTreeMap, BTreeSet};

use homology_kernel::{
    compute, compute_pairing, BoundaryMatrix, Filtration, HashColumn, ListColumn, PersistencePairing,
    ReductionAlgorithm, ReductionConfig, Representation, RepresentationKind, SetColumn,
    StandardReduction, TwistReduction, VectorColumn,
};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Generators
// ─────────────────────────────────────────────────────────────────────────────

/// Random clique-style complex on `n` vertices, up to tetrahedra.
///
/// Each simplex is present if its mask bit is set and all its faces are
/// present. Values are `max(face values) + weight`, and simplices are
/// ordered by `(value, dimension, vertices)`, which keeps faces first.
fn clique_filtration(n: usize, mask: &[bool], weights: &[u8]) -> Filtration<u32> {
    let bit = |k: usize| mask[k % mask.len()];
    let weight = |k: usize| weights[k % weights.len()] as u32;

    let mut values: BTreeMap<Vec<usize>, u32> = BTreeMap::new();
    let mut counter = 0usize;

    for v in 0..n {
        values.insert(vec![v], weight(counter));
        counter += 1;
    }
    for size in 2..=4 {
        let candidates: Vec<Vec<usize>> = combinations(n, size);
        for simplex in candidates {
            counter += 1;
            let faces = faces_of(&simplex);
            if !bit(counter) || !faces.iter().all(|f| values.contains_key(f)) {
                continue;
            }
            let value = faces.iter().map(|f| values[f]).max().unwrap_or(0) + weight(counter);
            values.insert(simplex, value);
        }
    }

    let mut ordered: Vec<(u32, usize, Vec<usize>)> = values
        .iter()
        .map(|(s, &v)| (v, s.len() - 1, s.clone()))
        .collect();
    ordered.sort();

    let mut position: BTreeMap<Vec<usize>, usize> = BTreeMap::new();
    let mut filtration = Filtration::new();
    for (value, _, simplex) in ordered {
        let boundary: Vec<usize> = if simplex.len() == 1 {
            Vec::new()
        } else {
            faces_of(&simplex).iter().map(|f| position[f]).collect()
        };
        let index = filtration.push_simplex(boundary, value);
        position.insert(simplex, index);
    }
    filtration
}

fn combinations(n: usize, size: usize) -> Vec<Vec<usize>> {
    fn go(start: usize, n: usize, size: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for v in start..n {
            current.push(v);
            go(v + 1, n, size, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    go(0, n, size, &mut Vec::new(), &mut out);
    out
}

fn faces_of(simplex: &[usize]) -> Vec<Vec<usize>> {
    (0..simplex.len())
        .map(|skip| {
            simplex
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Cycle graph on `n` vertices with edges added in the given order.
fn cyclic_graph(n: usize, order: &[usize]) -> Filtration<u32> {
    let mut filtration = Filtration::new();
    for _ in 0..n {
        filtration.push_vertex(0);
    }
    for (step, &edge) in order.iter().enumerate() {
        let (a, b) = (edge, (edge + 1) % n);
        filtration.push_simplex(vec![a.min(b), a.max(b)], step as u32 + 1);
    }
    filtration
}

fn arb_clique_filtration() -> impl Strategy<Value = Filtration<u32>> {
    (1usize..7, prop::collection::vec(any::<bool>(), 1..64), prop::collection::vec(0u8..4, 1..32))
        .prop_map(|(n, mask, weights)| clique_filtration(n, &mask, &weights))
}

fn arb_cyclic_graph() -> impl Strategy<Value = (usize, Filtration<u32>)> {
    (3usize..12)
        .prop_flat_map(|n| (Just(n), Just((0..n).collect::<Vec<_>>()).prop_shuffle()))
        .prop_map(|(n, order)| (n, cyclic_graph(n, &order)))
}

fn pairing_for<R: Representation>(filtration: &Filtration<u32>, config: &ReductionConfig) -> PersistencePairing {
    compute::<R, _>(filtration, config).unwrap().pairing
}

fn check_invariants(filtration: &Filtration<u32>, pairing: &PersistencePairing) -> Result<(), TestCaseError> {
    let mut seen = vec![0usize; filtration.len()];
    for pair in pairing {
        seen[pair.birth] += 1;
        prop_assert_eq!(Some(pair.dimension), filtration.dimension_of(pair.birth));
        if let Some(death) = pair.death {
            seen[death] += 1;
            prop_assert!(pair.birth < death, "birth {} not before death {}", pair.birth, death);
            prop_assert_eq!(filtration.dimension_of(death), Some(pair.dimension + 1));
            prop_assert!(filtration.value_of(pair.birth) <= filtration.value_of(death));
        }
    }
    prop_assert!(seen.iter().all(|&count| count == 1), "every position appears exactly once");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Representation equivalence
// ─────────────────────────────────────────────────────────────────────────────

fn apply<R: Representation<Index = u32>>(columns: &[BTreeSet<u32>], ops: &[(usize, usize)]) -> Vec<(Option<u32>, bool, Vec<u32>)> {
    let mut state: Vec<R> = columns
        .iter()
        .map(|c| R::from_entries(&c.iter().copied().collect::<Vec<_>>()))
        .collect();
    let mut trace = Vec::with_capacity(ops.len());
    for &(target, source) in ops {
        let (target, source) = (target % state.len(), source % state.len());
        let other = state[source].clone();
        state[target].add(&other);
        trace.push((state[target].low(), state[target].is_empty(), state[target].entries()));
    }
    trace
}

proptest! {
    #[test]
    fn prop_representations_agree_on_add_sequences(
        columns in prop::collection::vec(prop::collection::btree_set(0u32..48, 0..12), 1..8),
        ops in prop::collection::vec((0usize..8, 0usize..8), 0..40),
    ) {
        let expected = apply::<VectorColumn<u32>>(&columns, &ops);
        prop_assert_eq!(&apply::<SetColumn<u32>>(&columns, &ops), &expected);
        prop_assert_eq!(&apply::<ListColumn<u32>>(&columns, &ops), &expected);
        prop_assert_eq!(&apply::<HashColumn<u32>>(&columns, &ops), &expected);
    }

    #[test]
    fn prop_representations_agree_on_pivots(filtration in arb_clique_filtration()) {
        let config = ReductionConfig::standard();
        let expected = compute::<VectorColumn<u32>, _>(&filtration, &config).unwrap();
        prop_assert_eq!(&compute::<SetColumn<u16>, _>(&filtration, &config).unwrap().pivots, &expected.pivots);
        prop_assert_eq!(&compute::<ListColumn<u64>, _>(&filtration, &config).unwrap().pivots, &expected.pivots);
        prop_assert_eq!(&compute::<HashColumn<usize>, _>(&filtration, &config).unwrap().pivots, &expected.pivots);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Variant agreement and pairing invariants
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn prop_twist_matches_standard(filtration in arb_clique_filtration()) {
        let mut standard: BoundaryMatrix<VectorColumn<u32>> = BoundaryMatrix::from_filtration(&filtration).unwrap();
        let mut twisted = standard.clone();

        let expected = StandardReduction.reduce(&mut standard);
        let outcome = TwistReduction.reduce(&mut twisted);

        prop_assert_eq!(&outcome.pivots, &expected.pivots);
        prop_assert!(outcome.stats.column_additions <= expected.stats.column_additions);
        prop_assert!(twisted.has_unique_lows());
    }

    #[test]
    fn prop_all_pipelines_agree(filtration in arb_clique_filtration()) {
        let expected = pairing_for::<VectorColumn<u32>>(&filtration, &ReductionConfig::standard());
        for base in [ReductionConfig::twist(), ReductionConfig::cohomology()] {
            for kind in RepresentationKind::ALL {
                let config = base.clone().with_representation(kind);
                let pairing = compute_pairing(&filtration, &config).unwrap();
                prop_assert_eq!(&pairing, &expected, "pipeline {}", config.pipeline_id());
            }
        }
    }

    #[test]
    fn prop_pairing_invariants(filtration in arb_clique_filtration()) {
        let result = compute::<VectorColumn<u32>, _>(&filtration, &ReductionConfig::twist()).unwrap();
        prop_assert!(result.pivots.is_consistent());
        prop_assert!(result.matrix.has_unique_lows());
        check_invariants(&filtration, &result.pairing)?;
    }

    #[test]
    fn prop_reduction_is_idempotent(filtration in arb_clique_filtration()) {
        let mut matrix: BoundaryMatrix<SetColumn<u32>> = BoundaryMatrix::from_filtration(&filtration).unwrap();
        let first = StandardReduction.reduce(&mut matrix);
        let snapshot = matrix.snapshot();

        let again = StandardReduction.reduce(&mut matrix);
        prop_assert_eq!(&again.pivots, &first.pivots);
        prop_assert_eq!(again.stats.column_additions, 0);
        prop_assert_eq!(matrix.snapshot(), snapshot);

        let twisted = TwistReduction.reduce(&mut matrix);
        prop_assert_eq!(&twisted.pivots, &first.pivots);
    }

    #[test]
    fn prop_cyclic_graph_has_one_loop((n, filtration) in arb_cyclic_graph()) {
        for config in [ReductionConfig::standard(), ReductionConfig::twist(), ReductionConfig::cohomology()] {
            let pairing = compute_pairing(&filtration, &config).unwrap();
            prop_assert_eq!(pairing.betti_numbers(), vec![1, 1]);
            prop_assert_eq!(pairing.finite().count(), n - 1);
            check_invariants(&filtration, &pairing)?;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed complexes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_hollow_tetrahedron_encloses_void() {
    // Full tetrahedron sorts its 3-simplex last; dropping it leaves the
    // boundary sphere (4 vertices, 6 edges, 4 triangles).
    let full = clique_filtration(4, &[true], &[0]);
    assert_eq!(full.len(), 15);
    let filtration: Filtration<u32> = full.iter().take(14).cloned().collect();

    let pairing = compute_pairing(&filtration, &ReductionConfig::twist()).unwrap();
    assert_eq!(pairing.betti_numbers(), vec![1, 0, 1]);
}

#[test]
fn test_solid_tetrahedron_is_contractible() {
    let filtration = clique_filtration(4, &[true], &[1, 0, 2]);
    for kind in RepresentationKind::ALL {
        let config = ReductionConfig::cohomology().with_representation(kind);
        let pairing = compute_pairing(&filtration, &config).unwrap();
        assert_eq!(pairing.betti_numbers(), vec![1]);
    }
}
