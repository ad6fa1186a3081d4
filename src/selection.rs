use std::{cmp::Reverse, collections::VecDeque};

use log::{trace, warn};

use crate::{error::Result, tree::ClusterTree};

/// Number of clusters [`ClusterTree::find_x_biggest_clusters`] is usually asked for.
pub const DEFAULT_BIGGEST_CLUSTERS: usize = 10;

impl<L> ClusterTree<L> {
    /// Stable sort, biggest clusters first. Equal sizes keep their order.
    fn sort_by_size(&self, clusters: &mut VecDeque<usize>) {
        clusters
            .make_contiguous()
            .sort_by_key(|&cluster| Reverse(self.size(cluster)));
    }

    /// Descends `level` steps from the root, replacing every cluster of the
    /// work set by its two children. Leaves reached early stay in the set.
    /// With `hide_outliers` single-leaf clusters are dropped from the result.
    ///
    /// A `level` deeper than the tree is clamped to `max_level - 1`.
    #[must_use]
    pub fn down_x_levels_from_top(&self, level: usize, hide_outliers: bool) -> Vec<usize> {
        let mut level = level;
        if level > self.max_level() {
            warn!(
                "level {level} exceeds the tree height {}, clamping",
                self.max_level()
            );
            level = self.max_level().saturating_sub(1);
        }

        let mut worklist = VecDeque::from([self.root()]);
        for _ in 0..level {
            let mut next = VecDeque::with_capacity(worklist.len() * 2);
            for current in worklist {
                match self.children(current) {
                    Some((left, right)) => {
                        next.push_back(left);
                        next.push_back(right);
                    }
                    None => next.push_back(current),
                }
            }
            worklist = next;
        }
        if hide_outliers {
            worklist.retain(|&cluster| self.size(cluster) > 1);
        }

        self.sort_by_size(&mut worklist);
        worklist.into()
    }

    /// Splits `cluster` greedily until `number` sub clusters are found, then
    /// keeps replacing the biggest candidate by its children as long as a child
    /// is bigger than the smallest candidate.
    ///
    /// `number` is clamped to the size of `cluster`. The result is ordered by
    /// size, biggest first.
    pub fn find_x_biggest_clusters(&self, cluster: usize, number: usize) -> Result<Vec<usize>> {
        self.biggest_clusters(cluster, number, false)
    }

    /// Like [`ClusterTree::find_x_biggest_clusters`], but a candidate is only
    /// split during refinement when both of its children are bigger than the
    /// smallest candidate.
    pub fn find_x_biggest_clusters_balanced(
        &self,
        cluster: usize,
        number: usize,
    ) -> Result<Vec<usize>> {
        self.biggest_clusters(cluster, number, true)
    }

    fn biggest_clusters(
        &self,
        cluster: usize,
        number: usize,
        balanced: bool,
    ) -> Result<Vec<usize>> {
        self.check(cluster)?;
        let number = number.min(self.size(cluster));

        let mut worklist = VecDeque::from([cluster]);
        while worklist.len() < number {
            if let Some(current) = worklist.pop_front() {
                match self.children(current) {
                    Some((left, right)) => {
                        worklist.push_back(left);
                        worklist.push_back(right);
                    }
                    None => worklist.push_back(current),
                }
            }
        }
        self.sort_by_size(&mut worklist);

        let mut new_split = true;
        while new_split {
            new_split = false;
            let front = worklist.front().copied();
            let Some((left, right)) = front.and_then(|front| self.children(front)) else {
                break;
            };
            let smallest = |worklist: &VecDeque<usize>| {
                worklist.back().map_or(0, |&last| self.size(last))
            };

            let last = smallest(&worklist);
            if balanced && (self.size(left) <= last || self.size(right) <= last) {
                break;
            }

            if self.size(left) > last {
                trace!("replacing cluster {:?} by its left child {left}", worklist.front());
                worklist.pop_front();
                worklist.push_back(left);
                self.sort_by_size(&mut worklist);
                new_split = true;
            }

            if self.size(right) > smallest(&worklist) {
                trace!("adding right child {right}");
                if !new_split {
                    worklist.pop_front();
                }
                if worklist.len() == number {
                    worklist.pop_back();
                }
                worklist.push_back(right);
                self.sort_by_size(&mut worklist);
                new_split = true;
            }
        }

        Ok(worklist.into())
    }

    /// Walks `levels` steps down from `cluster`, only following children with
    /// at least `min_size` leaves. Leaves met on the way are kept, followed by
    /// whatever frontier is left after the last step.
    pub fn clusters_down_levels(
        &self,
        cluster: usize,
        levels: usize,
        min_size: usize,
    ) -> Result<Vec<usize>> {
        self.check(cluster)?;
        let mut result = Vec::new();
        let mut current_level = VecDeque::from([cluster]);
        for _ in 0..levels {
            let mut next_level = VecDeque::new();
            while let Some(current) = current_level.pop_front() {
                match self.children(current) {
                    Some((left, right)) => {
                        if self.size(left) >= min_size {
                            next_level.push_back(left);
                        }
                        if self.size(right) >= min_size {
                            next_level.push_back(right);
                        }
                    }
                    None => result.push(current),
                }
            }
            current_level = next_level;
        }
        result.extend(current_level);
        Ok(result)
    }
}
