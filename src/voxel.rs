use crate::tree::ClusterTree;

/// Tree over voxels, every leaf carries the voxel number it was created with.
pub type VoxelTree = ClusterTree<usize>;

impl ClusterTree<usize> {
    /// Voxel numbers of the leaves in `cluster`, in the leaf order.
    #[must_use]
    pub fn voxels_for_cluster(&self, cluster: usize) -> Vec<usize> {
        self.leaves_for_cluster(cluster)
            .iter()
            .map(|&leaf| self.voxel_num(leaf))
            .collect()
    }

    /// # Panics
    ///
    /// If `leaf` is not a leaf of the tree.
    #[must_use]
    pub fn voxel_num(&self, leaf: usize) -> usize {
        match self.payload(leaf) {
            Some(&voxel_num) => voxel_num,
            None => panic!("cluster {leaf} is not a leaf"),
        }
    }
}

/// Dimensions of the regular grid voxel numbers refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridDims {
    #[must_use]
    pub fn new(nx: usize, ny: usize, nz: usize) -> GridDims {
        GridDims { nx, ny, nz }
    }

    /// Flat voxel number of `(x, y, z)`, `None` outside the grid.
    #[must_use]
    pub fn voxel_num(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if x >= self.nx || y >= self.ny || z >= self.nz {
            return None;
        }
        Some(x + y * self.nx + z * self.nx * self.ny)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridDims, VoxelTree};
    use crate::builder::TreeBuilder;

    #[test]
    fn voxels() {
        let mut builder = TreeBuilder::<usize>::new();
        for voxel in [12, 3, 40] {
            builder.add_leaf(voxel).unwrap();
        }
        builder.add_cluster(2, 0, 0.5).unwrap();
        builder.add_cluster(1, 3, 0.8).unwrap();
        let tree: VoxelTree = builder.finish().unwrap();

        assert_eq!(tree.voxel_num(1), 3);
        assert_eq!(tree.voxels_for_cluster(3), vec![40, 12]);
        assert_eq!(tree.voxels_for_cluster(4), vec![3, 40, 12]);
    }

    #[test]
    #[should_panic(expected = "not a leaf")]
    fn voxel_num_of_merge() {
        let mut builder = TreeBuilder::<usize>::new();
        builder.add_leaf(1).unwrap();
        builder.add_leaf(2).unwrap();
        builder.add_cluster(0, 1, 0.5).unwrap();
        let tree = builder.finish().unwrap();
        let _ = tree.voxel_num(2);
    }

    #[test]
    fn grid() {
        let grid = GridDims::new(4, 3, 2);
        assert_eq!(grid.voxel_num(0, 0, 0), Some(0));
        assert_eq!(grid.voxel_num(3, 2, 1), Some(3 + 2 * 4 + 12));
        assert_eq!(grid.voxel_num(4, 0, 0), None);
        assert_eq!(grid.voxel_num(0, 0, 2), None);
    }
}
