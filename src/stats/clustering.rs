//! Hierarchical clustering of radicals by co-occurrence profile
//!
//! Radicals are compared by the Pearson correlation of their normalized
//! matrix rows and merged bottom-up with average linkage (UPGMA). The result
//! uses the conventional linkage layout: leaves are `0..n`, and the cluster
//! created at step `k` gets id `n + k`.

use crate::cooccurrence::CooccurrenceMatrix;
use rayon::prelude::*;
use serde::Serialize;

/// Distance used when either row has no variance
const UNCORRELATED: f64 = 1.0;

/// One merge of two clusters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkageStep {
    pub left: usize,
    pub right: usize,
    pub distance: f64,
    /// Leaves under the merged cluster
    pub size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dendrogram {
    pub labels: Vec<String>,
    pub steps: Vec<LinkageStep>,
}

impl Dendrogram {
    /// Leaves in left-to-right dendrogram order.
    pub fn leaf_order(&self) -> Vec<usize> {
        let n = self.labels.len();
        if n == 0 {
            return Vec::new();
        }
        if self.steps.is_empty() {
            return (0..n).collect();
        }

        let mut order = Vec::with_capacity(n);
        let mut stack = vec![n + self.steps.len() - 1];
        while let Some(node) = stack.pop() {
            if node < n {
                order.push(node);
            } else {
                let step = &self.steps[node - n];
                stack.push(step.right);
                stack.push(step.left);
            }
        }
        order
    }

    pub fn leaf_labels(&self) -> Vec<&str> {
        self.leaf_order()
            .into_iter()
            .map(|i| self.labels[i].as_str())
            .collect()
    }
}

/// `1 - pearson(u, v)`, in `[0, 2]`.
pub fn correlation_distance(u: &[f64], v: &[f64]) -> f64 {
    let n = u.len().min(v.len());
    if n == 0 {
        return UNCORRELATED;
    }
    let mean_u = u[..n].iter().sum::<f64>() / n as f64;
    let mean_v = v[..n].iter().sum::<f64>() / n as f64;

    let (mut dot, mut ss_u, mut ss_v) = (0.0, 0.0, 0.0);
    for (a, b) in u[..n].iter().zip(&v[..n]) {
        let (du, dv) = (a - mean_u, b - mean_v);
        dot += du * dv;
        ss_u += du * du;
        ss_v += dv * dv;
    }
    if ss_u == 0.0 || ss_v == 0.0 {
        return UNCORRELATED;
    }
    (1.0 - dot / (ss_u * ss_v).sqrt()).clamp(0.0, 2.0)
}

/// Average-linkage clustering of `rows`, labelled by `labels`.
pub fn average_linkage(labels: Vec<String>, rows: &[Vec<f64>]) -> Dendrogram {
    let n = rows.len();
    let mut dist: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0.0 } else { correlation_distance(&rows[i], &rows[j]) })
                .collect()
        })
        .collect();

    // Slot i holds (cluster id, size) while active
    let mut slots: Vec<Option<(usize, usize)>> = (0..n).map(|i| Some((i, 1))).collect();
    let mut steps = Vec::with_capacity(n.saturating_sub(1));

    for step in 0..n.saturating_sub(1) {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            if slots[i].is_none() {
                continue;
            }
            for j in i + 1..n {
                if slots[j].is_none() {
                    continue;
                }
                if best.map_or(true, |(_, _, d)| dist[i][j] < d) {
                    best = Some((i, j, dist[i][j]));
                }
            }
        }
        let Some((i, j, distance)) = best else {
            break;
        };
        let (Some((id_i, size_i)), Some((id_j, size_j))) = (slots[i], slots[j]) else {
            break;
        };

        let merged = size_i + size_j;
        for k in 0..n {
            if k == i || k == j || slots[k].is_none() {
                continue;
            }
            let d = (size_i as f64 * dist[i][k] + size_j as f64 * dist[j][k]) / merged as f64;
            dist[i][k] = d;
            dist[k][i] = d;
        }

        steps.push(LinkageStep {
            left: id_i.min(id_j),
            right: id_i.max(id_j),
            distance,
            size: merged,
        });
        slots[i] = Some((n + step, merged));
        slots[j] = None;
    }

    Dendrogram { labels, steps }
}

/// Cluster the radicals of `matrix` by their normalized rows.
pub fn cluster_radicals(matrix: &CooccurrenceMatrix) -> Dendrogram {
    average_linkage(matrix.radicals().to_vec(), &matrix.normalized())
}
