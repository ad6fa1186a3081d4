use crate::{
    color::Color,
    error::{Result, TreeError},
    node::Cluster,
    tree::ClusterTree,
};

/// Collects leaves and merges bottom-up and turns them into a [`ClusterTree`].
///
/// Leaves must all be added before the first merge: leaf ids are packed at the
/// low end of the id space and every merge receives an id larger than both of
/// its children.
#[derive(Debug)]
pub struct TreeBuilder<L> {
    default_color: Color,
    leaf_count: usize,
    locked: bool,
    nodes: Vec<Cluster<L>>,
}

impl<L> TreeBuilder<L> {
    #[must_use]
    pub fn new() -> Self {
        TreeBuilder {
            default_color: Color::default(),
            leaf_count: 0,
            locked: false,
            nodes: Vec::new(),
        }
    }

    /// Reserves room for `leaves` leaves and the `leaves - 1` merges above them.
    #[must_use]
    pub fn with_capacity(leaves: usize) -> Self {
        let mut builder = Self::new();
        builder.nodes.reserve((2 * leaves).saturating_sub(1));
        builder
    }

    /// Color every cluster starts with.
    #[must_use]
    pub fn default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves in `cluster`, `None` if it does not exist yet.
    #[must_use]
    pub fn size(&self, cluster: usize) -> Option<usize> {
        self.nodes.get(cluster).map(Cluster::size)
    }

    /// True once a merge happened; no leaf can be added afterwards.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn push_leaf(&mut self, payload: L) -> Result<usize> {
        if self.locked {
            return Err(TreeError::LeavesLocked);
        }
        let id = self.nodes.len();
        self.nodes.push(Cluster::leaf(id, payload, self.default_color));
        self.leaf_count += 1;
        Ok(id)
    }

    /// Merges two existing, not yet merged clusters into a new one and returns
    /// its id. Locks further leaf insertion.
    pub fn add_cluster(
        &mut self,
        cluster1: usize,
        cluster2: usize,
        custom_data: f32,
    ) -> Result<usize> {
        let count = self.nodes.len();
        for cluster in [cluster1, cluster2] {
            if cluster >= count {
                return Err(TreeError::OutOfRange { cluster, count });
            }
        }
        if cluster1 == cluster2 {
            return Err(TreeError::SelfMerge(cluster1));
        }
        for cluster in [cluster1, cluster2] {
            if !self.nodes[cluster].is_root() {
                return Err(TreeError::AlreadyMerged(cluster));
            }
        }

        let id = count;
        let level = self.nodes[cluster1].level.max(self.nodes[cluster2].level) + 1;
        let capacity = self.nodes[cluster1].size() + self.nodes[cluster2].size();
        let mut leaves = Vec::with_capacity(capacity);
        leaves.extend_from_slice(&self.nodes[cluster1].leaves);
        leaves.extend_from_slice(&self.nodes[cluster2].leaves);

        self.nodes.push(Cluster::merge(
            id,
            level,
            (cluster1, cluster2),
            leaves,
            custom_data,
            self.default_color,
        ));
        self.nodes[cluster1].parent = id;
        self.nodes[cluster2].parent = id;
        self.locked = true;
        Ok(id)
    }

    /// Validates that exactly one cluster is left unmerged and hands out the tree.
    pub fn finish(self) -> Result<ClusterTree<L>> {
        if self.leaf_count == 0 {
            return Err(TreeError::EmptyTree);
        }
        let roots = self.nodes.iter().filter(|node| node.is_root()).count();
        if roots != 1 {
            return Err(TreeError::Unmerged { roots });
        }
        let max_level = self.nodes.iter().map(|node| node.level).max().unwrap_or(0);
        Ok(ClusterTree::from_parts(self.leaf_count, max_level, self.nodes))
    }
}

impl TreeBuilder<()> {
    /// Adds a leaf (a single fiber) and returns its id.
    pub fn add_leaf(&mut self) -> Result<usize> {
        self.push_leaf(())
    }
}

impl TreeBuilder<usize> {
    /// Adds a leaf carrying the caller's voxel number and returns its id.
    pub fn add_leaf(&mut self, voxel_num: usize) -> Result<usize> {
        self.push_leaf(voxel_num)
    }
}

impl<L> Default for TreeBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
