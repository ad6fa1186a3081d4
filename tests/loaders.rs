use std::{env, fs, io::Cursor};

use hctree::{
    loader::{load_fiber_tree, load_voxel_tree, read_fiber_tree, read_voxel_tree},
    GridDims, TreeError,
};

const FIBER_TREE: &str = "\
(0,(0))
(0,(1))
(0,(2))
(1,(0,1),(0,1),0.25)
( 2, (2, 0, 1), (2, 3), 0.75 )
";

#[test]
fn fiber_tree() {
    let tree = read_fiber_tree(Cursor::new(FIBER_TREE)).unwrap();
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.cluster_count(), 5);
    assert_eq!(tree.max_level(), 2);
    assert_eq!(tree.children(4), Some((2, 3)));
    assert_eq!(tree.custom_data(3), 0.25);
    assert_eq!(tree.leaves_for_cluster(4), &[2, 0, 1]);
}

#[test]
fn fiber_tree_errors() {
    let missing_bracket = "(0,(0))\n(0,(1))\n(1,(0,1),(0,1),0.25\n";
    assert!(matches!(
        read_fiber_tree(Cursor::new(missing_bracket)),
        Err(TreeError::Parse { line: 3, .. })
    ));

    let wrong_leaves = "(0,(0))\n(0,(1))\n(1,(0),(0,1),0.25)\n";
    assert!(matches!(
        read_fiber_tree(Cursor::new(wrong_leaves)),
        Err(TreeError::Parse { line: 3, .. })
    ));

    let unknown_cluster = "(0,(0))\n(0,(1))\n(1,(0,1),(0,7),0.25)\n";
    assert!(matches!(
        read_fiber_tree(Cursor::new(unknown_cluster)),
        Err(TreeError::Parse { line: 3, .. })
    ));

    let forest = "(0,(0))\n(0,(1))\n";
    assert!(matches!(
        read_fiber_tree(Cursor::new(forest)),
        Err(TreeError::Unmerged { roots: 2 })
    ));
}

const VOXEL_TREE: &str = "\
header line
#coordinates
0,0,0
1,0,0
2,1,0
1,1,1
#endcoordinates
#clusters
1,2,0.5
3,4,0.7
5,6,1.0
#endclusters
";

#[test]
fn voxel_tree() {
    let grid = GridDims::new(3, 2, 2);
    let tree = read_voxel_tree(Cursor::new(VOXEL_TREE), grid).unwrap();
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.cluster_count(), 7);
    assert_eq!(tree.voxels_for_cluster(6), vec![0, 1, 5, 10]);
    assert_eq!(tree.children(6), Some((4, 5)));
    assert_eq!(tree.custom_data(5), 0.7);
}

#[test]
fn voxel_tree_errors() {
    let grid = GridDims::new(2, 2, 2);
    let outside = "#coordinates\n0,0,0\n5,0,0\n#endcoordinates\n";
    assert!(matches!(
        read_voxel_tree(Cursor::new(outside), grid),
        Err(TreeError::Parse { line: 3, .. })
    ));

    let zero_id = "#coordinates\n0,0,0\n1,0,0\n#endcoordinates\n#clusters\n0,1,0.5\n#endclusters\n";
    assert!(matches!(
        read_voxel_tree(Cursor::new(zero_id), grid),
        Err(TreeError::Parse { line: 6, .. })
    ));

    assert!(matches!(
        read_voxel_tree(Cursor::new("no sections here\n"), grid),
        Err(TreeError::EmptyTree)
    ));
}

#[test]
fn load_from_path() {
    let path = env::temp_dir().join(format!("hctree-fiber-{}.txt", std::process::id()));
    fs::write(&path, FIBER_TREE).unwrap();
    let tree = load_fiber_tree(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(tree.unwrap().cluster_count(), 5);

    let missing = env::temp_dir().join("hctree-no-such-tree.txt");
    assert!(matches!(load_fiber_tree(&missing), Err(TreeError::Io(_))));
    assert!(matches!(
        load_voxel_tree(&missing, GridDims::new(2, 2, 2)),
        Err(TreeError::Io(_))
    ));
}
