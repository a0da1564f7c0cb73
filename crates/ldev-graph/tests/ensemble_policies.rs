use ldev_core::RngHandle;
use ldev_graph::{EnsemblePolicy, ErPolicy, SbmPolicy};

#[test]
fn er_policy_is_monotone_in_connectivity() {
    let n = 20;
    let always = ErPolicy::new(2.0 * n as f64, n);
    let never = ErPolicy::new(0.0, n);
    let mut rng = RngHandle::from_seed(1);
    for _ in 0..100 {
        assert!(always.should_insert(0, 1, &mut rng));
    }
    // p = 0 can only pass on a draw of exactly zero, which the uniform
    // source does not produce for these seeds.
    let mut hits = 0;
    for _ in 0..100 {
        if never.should_insert(0, 1, &mut rng) {
            hits += 1;
        }
    }
    assert_eq!(hits, 0);
    assert_eq!(always.connectivity(), 40.0);
}

#[test]
fn sbm_labeling_is_deterministic_per_seed() {
    let mut rng_a = RngHandle::from_seed(77);
    let mut rng_b = RngHandle::from_seed(77);
    let a = SbmPolicy::new(0.1, 5.0, 3, 50, &mut rng_a).unwrap();
    let b = SbmPolicy::new(0.1, 5.0, 3, 50, &mut rng_b).unwrap();
    assert_eq!(a.labeling(), b.labeling());
}

#[test]
fn sbm_block_sizes_partition_the_vertices() {
    let mut rng = RngHandle::from_seed(13);
    let policy = SbmPolicy::new(0.1, 5.0, 4, 200, &mut rng).unwrap();
    assert_eq!(policy.block_sizes().iter().sum::<usize>(), 200);
    assert_eq!(policy.labeling().len(), 200);
    assert!(policy.labeling().iter().all(|&block| block < 4));
    // A uniform draw over four blocks of 200 vertices leaves no block empty.
    assert!(policy.block_sizes().iter().all(|&size| size > 0));
}

#[test]
fn sbm_intra_beats_inter_when_connectivities_do() {
    let n = 40;
    let mut rng = RngHandle::from_seed(3);
    let policy = SbmPolicy::new(0.0, 2.0 * n as f64, 2, n, &mut rng).unwrap();
    let labels = policy.labeling().to_vec();
    let (mut intra_hits, mut intra_total) = (0usize, 0usize);
    let (mut inter_hits, mut inter_total) = (0usize, 0usize);
    for u in 0..n {
        for v in 0..u {
            let hit = policy.should_insert(u, v, &mut rng);
            if labels[u] == labels[v] {
                intra_total += 1;
                intra_hits += usize::from(hit);
            } else {
                inter_total += 1;
                inter_hits += usize::from(hit);
            }
        }
    }
    assert_eq!(intra_hits, intra_total);
    assert_eq!(inter_hits, 0);
    assert!(inter_total > 0);
}

#[test]
fn sbm_requires_at_least_one_block() {
    let mut rng = RngHandle::from_seed(1);
    let err = SbmPolicy::new(0.1, 1.0, 0, 10, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "no-blocks");
}
