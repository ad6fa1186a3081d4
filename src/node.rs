use crate::color::Color;

/// A single cluster of the tree, either a leaf or the merge of two clusters.
#[derive(Clone, Debug)]
pub struct Cluster<L> {
    pub id: usize,
    pub level: usize,
    pub parent: usize,
    pub children: Option<(usize, usize)>,
    pub custom_data: f32,
    pub color: Color,
    pub leaves: Vec<usize>,
    pub payload: Option<L>,
}

impl<L> Cluster<L> {
    #[must_use]
    pub fn leaf(id: usize, payload: L, color: Color) -> Cluster<L> {
        Cluster {
            id,
            level: 0,
            parent: usize::MAX,
            children: None,
            custom_data: 0.0,
            color,
            leaves: vec![id],
            payload: Some(payload),
        }
    }

    #[must_use]
    pub fn merge(
        id: usize,
        level: usize,
        children: (usize, usize),
        leaves: Vec<usize>,
        custom_data: f32,
        color: Color,
    ) -> Cluster<L> {
        Cluster {
            id,
            level,
            parent: usize::MAX,
            children: Some(children),
            custom_data,
            color,
            leaves,
            payload: None,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent == usize::MAX
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.leaves.len()
    }
}
