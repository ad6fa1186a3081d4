use std::cmp::Reverse;

use conv::ValueFrom;

use crate::{
    error::{Result, TreeError},
    tree::ClusterTree,
};

/// Share of leaves a cluster needs inside the roi by default.
pub const DEFAULT_ROI_RATIO: f32 = 0.9;

impl<L> ClusterTree<L> {
    /// One flag per leaf, set for the leaves of `cluster`.
    pub fn output_bitfield(&self, cluster: usize) -> Result<Vec<bool>> {
        self.output_bitfield_for(&[cluster])
    }

    /// One flag per leaf, set for the leaves of any of `clusters`.
    pub fn output_bitfield_for(&self, clusters: &[usize]) -> Result<Vec<bool>> {
        let mut bitfield = vec![false; self.leaf_count()];
        for &cluster in clusters {
            self.check(cluster)?;
            for &leaf in self.leaves_for_cluster(cluster) {
                bitfield[leaf] = true;
            }
        }
        Ok(bitfield)
    }

    /// Fraction of the leaves of `cluster` that are set in `roi`.
    pub fn roi_ratio(&self, cluster: usize, roi: &[bool]) -> Result<f32> {
        self.check_roi(roi)?;
        self.check(cluster)?;
        Ok(self.ratio(cluster, roi))
    }

    /// Topmost clusters with at least `ratio` of their leaves in `roi`, the
    /// biggest `number` of them, biggest first.
    pub fn best_clusters_fitting_roi(
        &self,
        roi: &[bool],
        ratio: f32,
        number: usize,
    ) -> Result<Vec<usize>> {
        self.check_roi(roi)?;
        let fits: Vec<bool> = (0..self.cluster_count())
            .map(|cluster| self.ratio(cluster, roi) >= ratio)
            .collect();

        // parents always have bigger ids than their children
        let mut covered = vec![false; self.cluster_count()];
        for cluster in (0..self.cluster_count()).rev() {
            if let Some(parent) = self.parent(cluster) {
                covered[cluster] = fits[parent] || covered[parent];
            }
        }

        let mut result: Vec<usize> = (0..self.cluster_count())
            .filter(|&cluster| fits[cluster] && !covered[cluster])
            .collect();
        result.sort_by_key(|&cluster| Reverse(self.size(cluster)));
        result.truncate(number);
        Ok(result)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn ratio(&self, cluster: usize, roi: &[bool]) -> f32 {
        let leaves = self.leaves_for_cluster(cluster);
        let inside = leaves.iter().filter(|&&leaf| roi[leaf]).count();
        let inside = f64::value_from(inside).unwrap_or(f64::MAX);
        let total = f64::value_from(leaves.len()).unwrap_or(f64::MAX);
        (inside / total) as f32
    }

    fn check_roi(&self, roi: &[bool]) -> Result<()> {
        if roi.len() != self.leaf_count() {
            return Err(TreeError::RoiLength {
                expected: self.leaf_count(),
                actual: roi.len(),
            });
        }
        Ok(())
    }
}
