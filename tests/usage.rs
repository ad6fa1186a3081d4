use hctree::{Color, TreeBuilder, TreeError, VoxelTree};

fn build() -> VoxelTree {
    let mut builder = TreeBuilder::<usize>::new();
    for voxel in [10, 20, 30, 40] {
        builder.add_leaf(voxel).unwrap();
    }
    builder.add_cluster(0, 1, 0.5).unwrap();
    builder.add_cluster(2, 3, 0.7).unwrap();
    builder.add_cluster(4, 5, 1.0).unwrap();
    builder.finish().unwrap()
}

#[test]
fn four_voxels() {
    let tree = build();
    assert_eq!(tree.cluster_count(), 7);
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.max_level(), 2);
    assert_eq!(tree.root(), 6);
    assert_eq!(tree.leaves_for_cluster(6), &[0, 1, 2, 3]);
    assert_eq!(tree.voxels_for_cluster(6), vec![10, 20, 30, 40]);
    assert_eq!(tree.voxels_for_cluster(5), vec![30, 40]);

    // 0.7 > 0.6, so cluster 5 is cut into its leaves
    let mut cut = tree.find_clusters_for_value(0.6);
    cut.sort_unstable();
    assert_eq!(cut, vec![2, 3, 4]);

    let mut cut = tree.find_clusters_for_value(0.8);
    cut.sort_unstable();
    assert_eq!(cut, vec![4, 5]);

    assert_eq!(tree.find_x_biggest_clusters(6, 2).unwrap(), vec![4, 5]);
    assert_eq!(tree.find_x_clusters(6, 2).unwrap(), vec![5, 4]);
    assert_eq!(tree.find_clusters_for_branch_length(0.4, 2), vec![4]);
    assert_eq!(tree.down_x_levels_from_top(1, false), vec![4, 5]);
}

#[test]
fn leaves_after_merge_are_rejected() {
    let mut builder = TreeBuilder::<usize>::new();
    builder.add_leaf(1).unwrap();
    builder.add_leaf(2).unwrap();
    builder.add_cluster(0, 1, 1.0).unwrap();
    assert!(matches!(builder.add_leaf(3), Err(TreeError::LeavesLocked)));

    let tree = builder.finish().unwrap();
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.cluster_count(), 3);
}

#[test]
fn coloring_for_display() {
    let mut tree = build();
    let highlight = Color::new(0.9, 0.1, 0.1, 1.0);

    tree.color_cluster(tree.root(), Color::GRAY).unwrap();
    for cluster in tree.find_x_biggest_clusters(6, 2).unwrap() {
        tree.color_cluster(cluster, highlight).unwrap();
    }
    assert_eq!(tree.color(6), Color::GRAY);
    assert!((0..6).all(|cluster| tree.color(cluster) == highlight));

    let bitfield = tree.output_bitfield(4).unwrap();
    assert_eq!(bitfield, vec![true, true, false, false]);
}

#[test]
fn cluster_records() {
    let tree = build();
    let merges: Vec<usize> = tree
        .clusters()
        .filter(|cluster| !cluster.is_leaf())
        .map(|cluster| cluster.id)
        .collect();
    assert_eq!(merges, vec![4, 5, 6]);
    assert!(tree.cluster(6).unwrap().is_root());
    assert!(matches!(
        tree.cluster(7),
        Err(TreeError::OutOfRange { cluster: 7, count: 7 })
    ));
}
