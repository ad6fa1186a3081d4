mod builder;
mod color;
mod cut;
mod error;
pub mod loader;
mod node;
mod roi;
mod selection;
mod tree;
mod voxel;

pub use builder::TreeBuilder;
pub use color::Color;
pub use cut::DEFAULT_BRANCH_MIN_SIZE;
pub use error::{Result, TreeError};
pub use node::Cluster;
pub use roi::DEFAULT_ROI_RATIO;
pub use selection::DEFAULT_BIGGEST_CLUSTERS;
pub use tree::{ClusterTree, FiberTree};
pub use voxel::{GridDims, VoxelTree};
