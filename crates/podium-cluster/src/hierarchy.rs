//! Agglomerative hierarchical clustering with a fixed-count cut.

use kodama::{Method, linkage};

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Ward-linkage clustering of observation vectors, cut so that exactly
/// `target` clusters remain (clamped to the observation count).
///
/// Returns one 1-based cluster id per observation. Ids are numbered by
/// first appearance in observation order, so sorting observations by id is
/// deterministic and stable.
pub fn ward_cluster(vectors: &[Vec<f64>], target: usize) -> Vec<usize> {
    let n = vectors.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![1],
        _ => {}
    }
    let target = target.clamp(1, n);

    let mut condensed = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n - 1 {
        for j in (i + 1)..n {
            condensed.push(euclidean(&vectors[i], &vectors[j]));
        }
    }
    let dendrogram = linkage(&mut condensed, n, Method::Ward);

    // Each merge reduces the cluster count by one; stopping before the
    // last `target - 1` merges leaves exactly `target` clusters.
    let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    for step in dendrogram.steps().iter().take(n - target) {
        let mut merged = std::mem::take(&mut members[step.cluster1]);
        merged.extend(std::mem::take(&mut members[step.cluster2]));
        members.push(merged);
    }

    let mut active: Vec<Vec<usize>> = members.into_iter().filter(|m| !m.is_empty()).collect();
    active.sort_by_key(|m| m.iter().copied().min().unwrap_or(usize::MAX));

    let mut assignment = vec![0usize; n];
    for (label, cluster) in active.iter().enumerate() {
        for &observation in cluster {
            assignment[observation] = label + 1;
        }
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_groups_split_cleanly() {
        let vectors = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
        ];
        let ids = ward_cluster(&vectors, 2);
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], ids[3]);
        assert_ne!(ids[0], ids[2]);
        // First appearance numbering: observation 0 is in cluster 1.
        assert_eq!(ids[0], 1);
    }

    #[test]
    fn ids_partition_the_observations() {
        let vectors: Vec<Vec<f64>> = (0..7).map(|i| vec![f64::from(i), 0.0]).collect();
        for target in 1..=7 {
            let ids = ward_cluster(&vectors, target);
            let distinct: std::collections::BTreeSet<usize> = ids.iter().copied().collect();
            assert_eq!(distinct.len(), target);
            assert!(ids.iter().all(|id| (1..=target).contains(id)));
        }
    }

    #[test]
    fn target_is_clamped_to_observation_count() {
        let vectors = vec![vec![0.0], vec![1.0]];
        let ids = ward_cluster(&vectors, 10);
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn degenerate_shapes_do_not_reach_the_linkage() {
        assert!(ward_cluster(&[], 3).is_empty());
        assert_eq!(ward_cluster(&[vec![1.0]], 3), vec![1]);
    }
}
