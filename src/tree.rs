use crate::{
    color::Color,
    error::{Result, TreeError},
    node::Cluster,
};

/// A full binary cluster tree. Ids `0..leaf_count` are leaves, every other id
/// is a merge of two clusters with smaller ids, and the last id is the root.
///
/// Per-cluster accessors panic on an id outside `0..cluster_count`, like slice
/// indexing does; [`ClusterTree::cluster`] is the checked variant.
#[derive(Clone, Debug)]
pub struct ClusterTree<L> {
    leaf_count: usize,
    max_level: usize,
    nodes: Vec<Cluster<L>>,
}

/// Tree over fibers, leaves carry no payload.
pub type FiberTree = ClusterTree<()>;

impl<L> ClusterTree<L> {
    pub(crate) fn from_parts(leaf_count: usize, max_level: usize, nodes: Vec<Cluster<L>>) -> Self {
        ClusterTree {
            leaf_count,
            max_level,
            nodes,
        }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.nodes.len()
    }

    /// Level of the root cluster.
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    #[must_use]
    pub fn root(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn cluster(&self, cluster: usize) -> Result<&Cluster<L>> {
        self.nodes.get(cluster).ok_or(TreeError::OutOfRange {
            cluster,
            count: self.nodes.len(),
        })
    }

    pub(crate) fn check(&self, cluster: usize) -> Result<()> {
        self.cluster(cluster).map(|_| ())
    }

    pub fn clusters(&self) -> impl Iterator<Item = &Cluster<L>> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn level(&self, cluster: usize) -> usize {
        self.nodes[cluster].level
    }

    /// The cluster `cluster` was merged into, `None` for the root.
    #[must_use]
    pub fn parent(&self, cluster: usize) -> Option<usize> {
        let node = &self.nodes[cluster];
        (!node.is_root()).then_some(node.parent)
    }

    #[must_use]
    pub fn children(&self, cluster: usize) -> Option<(usize, usize)> {
        self.nodes[cluster].children
    }

    /// Merge cost the clustering algorithm assigned, `0.0` for leaves.
    #[must_use]
    pub fn custom_data(&self, cluster: usize) -> f32 {
        self.nodes[cluster].custom_data
    }

    #[must_use]
    pub fn color(&self, cluster: usize) -> Color {
        self.nodes[cluster].color
    }

    pub fn set_color(&mut self, cluster: usize, color: Color) {
        self.nodes[cluster].color = color;
    }

    /// Leaf ids contained in `cluster`, left subtree first.
    #[must_use]
    pub fn leaves_for_cluster(&self, cluster: usize) -> &[usize] {
        &self.nodes[cluster].leaves
    }

    /// Number of leaves in `cluster`.
    #[must_use]
    pub fn size(&self, cluster: usize) -> usize {
        self.nodes[cluster].size()
    }

    #[must_use]
    pub fn is_leaf(&self, cluster: usize) -> bool {
        cluster < self.leaf_count
    }

    /// Payload the leaf was created with, `None` if `cluster` is not a leaf.
    #[must_use]
    pub fn payload(&self, cluster: usize) -> Option<&L> {
        self.nodes[cluster].payload.as_ref()
    }

    /// Colors `cluster` and every cluster below it, parents before children.
    pub fn color_cluster(&mut self, cluster: usize, color: Color) -> Result<()> {
        self.check(cluster)?;
        let mut stack = vec![cluster];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current];
            node.color = color;
            if let Some((left, right)) = node.children {
                stack.push(right);
                stack.push(left);
            }
        }
        Ok(())
    }
}
