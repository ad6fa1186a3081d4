use std::cmp::Reverse;

use log::debug;
use ordered_float::OrderedFloat;

use crate::{error::Result, tree::ClusterTree};

/// Minimum cluster size [`ClusterTree::find_clusters_for_branch_length`] is usually called with.
pub const DEFAULT_BRANCH_MIN_SIZE: usize = 100;

impl<L> ClusterTree<L> {
    fn sort_by_custom_data(&self, clusters: &mut [usize]) {
        clusters.sort_by_key(|&cluster| Reverse(OrderedFloat(self.custom_data(cluster))));
    }

    /// Cuts the tree at `value`: the returned clusters are the topmost ones
    /// whose custom data is not above `value`, below a parent that is.
    ///
    /// Nothing is returned when the root itself is not above `value`. Leaves
    /// are never expanded, and a leaf above `value` is dropped.
    #[must_use]
    pub fn find_clusters_for_value(&self, value: f32) -> Vec<usize> {
        let mut result = Vec::new();
        let root = self.root();
        if value >= self.custom_data(root) {
            return result;
        }

        let mut worklist = vec![root];
        while let Some(current) = worklist.pop() {
            let Some((left, right)) = self.children(current) else {
                continue;
            };
            for child in [left, right] {
                if value >= self.custom_data(child) {
                    result.push(child);
                } else if !self.is_leaf(child) {
                    worklist.push(child);
                }
            }
        }
        result
    }

    /// Selects clusters with at least `min_size` leaves whose branch to their
    /// parent, measured in custom data, is longer than `value`. Once a cluster
    /// is selected nothing above it on the same branch is.
    #[must_use]
    pub fn find_clusters_for_branch_length(&self, value: f32, min_size: usize) -> Vec<usize> {
        // 0: untouched, 1: selected, 2: has a selected descendant
        let mut flags = vec![0u8; self.cluster_count()];
        let mut result = Vec::new();

        for cluster in self.leaf_count()..self.cluster_count() {
            let Some((left, right)) = self.children(cluster) else {
                continue;
            };
            if flags[left] > 0 || flags[right] > 0 {
                flags[cluster] = 2;
                continue;
            }

            let branch_length = self
                .parent(cluster)
                .map_or(0.0, |parent| self.custom_data(parent) - self.custom_data(cluster));
            if self.size(cluster) >= min_size && branch_length > value {
                flags[cluster] = 1;
                result.push(cluster);
            }
        }
        result
    }

    /// Splits the most energetic cluster below `root` until `number` clusters
    /// are found. The result is ordered by custom data, highest first.
    ///
    /// `number` is clamped to the size of `root`.
    pub fn find_x_clusters(&self, root: usize, number: usize) -> Result<Vec<usize>> {
        self.check(root)?;
        let number = number.min(self.size(root));

        let mut worklist = vec![root];
        while worklist.len() < number {
            let splittable = worklist
                .iter()
                .position(|&cluster| !self.is_leaf(cluster));
            let Some(position) = splittable else {
                break;
            };
            let current = worklist.remove(position);
            if let Some((left, right)) = self.children(current) {
                worklist.push(left);
                worklist.push(right);
            }
            self.sort_by_custom_data(&mut worklist);
        }

        if let Some(&front) = worklist.first() {
            debug!("energy: {}", self.custom_data(front));
        }
        Ok(worklist)
    }
}
