//! Readers for the two plain-text tree formats.
//!
//! Fiber trees list one cluster per line, leaves first:
//!
//! ```text
//! (0,(0))
//! (0,(1))
//! (1,(0,1),(0,1),0.25)
//! ```
//!
//! A merge line holds the level, the contained leaves, the two merged
//! clusters and the merge cost. Whitespace is ignored.
//!
//! Voxel trees hold a `#coordinates` section with one `x,y,z` voxel per leaf
//! and a `#clusters` section with one `cluster1,cluster2,value` merge per line,
//! cluster ids counted from 1.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    iter::Peekable,
    path::Path,
    str::{FromStr, Split},
};

use log::debug;

use crate::{
    builder::TreeBuilder,
    error::{Result, TreeError},
    tree::FiberTree,
    voxel::{GridDims, VoxelTree},
};

pub fn load_fiber_tree(path: impl AsRef<Path>) -> Result<FiberTree> {
    read_fiber_tree(BufReader::new(File::open(path)?))
}

pub fn load_voxel_tree(path: impl AsRef<Path>, grid: GridDims) -> Result<VoxelTree> {
    read_voxel_tree(BufReader::new(File::open(path)?), grid)
}

pub fn read_fiber_tree<R: BufRead>(reader: R) -> Result<FiberTree> {
    debug!("start parsing tree file");
    let mut builder = TreeBuilder::<()>::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            continue;
        }
        let spaced = compact.replace('(', "(,").replace(')', ",)");
        let mut tokens = Tokens::new(number, spaced.split(','));

        tokens.expect("(")?;
        let level: usize = tokens.parse("level")?;
        tokens.expect("(")?;
        if level == 0 {
            builder
                .add_leaf()
                .map_err(|err| TreeError::parse(number, err.to_string()))?;
            continue;
        }

        let mut listed = 0;
        while tokens.peek() != Some(")") {
            let _: usize = tokens.parse("leaf")?;
            listed += 1;
        }
        tokens.expect(")")?;
        tokens.expect("(")?;
        let cluster1: usize = tokens.parse("cluster")?;
        let cluster2: usize = tokens.parse("cluster")?;
        tokens.expect(")")?;
        let data: f32 = tokens.parse("custom data")?;
        tokens.expect(")")?;

        let cluster = builder
            .add_cluster(cluster1, cluster2, data)
            .map_err(|err| TreeError::parse(number, err.to_string()))?;
        let size = builder.size(cluster).unwrap_or_default();
        if listed != size {
            return Err(TreeError::parse(
                number,
                format!("cluster lists {listed} leaves, its children hold {size}"),
            ));
        }
    }

    let tree = builder.finish()?;
    debug!("{} clusters created", tree.cluster_count());
    Ok(tree)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Coordinates,
    BetweenSections,
    Clusters,
    Done,
}

pub fn read_voxel_tree<R: BufRead>(reader: R, grid: GridDims) -> Result<VoxelTree> {
    let mut builder = TreeBuilder::<usize>::new();
    let mut section = Section::Preamble;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let line = line.trim();

        match (section, line) {
            (Section::Preamble, "#coordinates") => {
                debug!("coordinates tag at line {number}");
                section = Section::Coordinates;
            }
            (Section::Coordinates, "#endcoordinates") => {
                debug!("endcoordinates tag at line {number}");
                section = Section::BetweenSections;
            }
            (Section::BetweenSections, "#clusters") => {
                debug!("clusters tag at line {number}");
                section = Section::Clusters;
            }
            (Section::Clusters, "#endclusters") => {
                debug!("endclusters tag at line {number}");
                section = Section::Done;
            }
            (Section::Coordinates, line) if !line.is_empty() => {
                let mut tokens = Tokens::new(number, line.split(','));
                let x = tokens.parse("x coordinate")?;
                let y = tokens.parse("y coordinate")?;
                let z = tokens.parse("z coordinate")?;
                let voxel_num = grid.voxel_num(x, y, z).ok_or_else(|| {
                    TreeError::parse(number, format!("voxel ({x}, {y}, {z}) lies outside the grid"))
                })?;
                builder
                    .add_leaf(voxel_num)
                    .map_err(|err| TreeError::parse(number, err.to_string()))?;
            }
            (Section::Clusters, line) if !line.is_empty() => {
                let mut tokens = Tokens::new(number, line.split(','));
                let cluster1 = one_based(number, tokens.parse("cluster")?)?;
                let cluster2 = one_based(number, tokens.parse("cluster")?)?;
                let value: f32 = tokens.parse("value")?;
                builder
                    .add_cluster(cluster1, cluster2, value)
                    .map_err(|err| TreeError::parse(number, err.to_string()))?;
            }
            _ => {}
        }
    }

    let tree = builder.finish()?;
    debug!("{} clusters created", tree.cluster_count());
    Ok(tree)
}

fn one_based(line: usize, cluster: usize) -> Result<usize> {
    cluster
        .checked_sub(1)
        .ok_or_else(|| TreeError::parse(line, "cluster ids start at 1"))
}

struct Tokens<'a> {
    line: usize,
    tokens: Peekable<Split<'a, char>>,
}

impl<'a> Tokens<'a> {
    fn new(line: usize, tokens: Split<'a, char>) -> Self {
        Tokens {
            line,
            tokens: tokens.peekable(),
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.tokens.peek().copied()
    }

    fn take(&mut self, what: &str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| TreeError::parse(self.line, format!("missing {what}")))
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        let found = self.take(token)?;
        if found != token {
            return Err(TreeError::parse(
                self.line,
                format!("expected {token:?}, found {found:?}"),
            ));
        }
        Ok(())
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T>
    where
        T::Err: std::fmt::Display,
    {
        let token = self.take(what)?;
        token
            .trim()
            .parse()
            .map_err(|err| TreeError::parse(self.line, format!("invalid {what} {token:?}: {err}")))
    }
}
