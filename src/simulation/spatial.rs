//! Spatial indexing for predator/moth collision queries.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

use super::moth::Moth;

/// Type alias for 2D spatial KD-tree used for efficient neighbor queries.
pub type Tree2D = KdTree<f32, usize, Vec<f32>>;

/// Result of a spatial radius query: (`distance_squared`, index) pairs.
pub type SpatialQueryResult = Vec<(f32, usize)>;

/// KD-tree over moth positions, storing indices into the moth slice it was
/// built from.
pub struct SpatialIndex {
    moths: Tree2D,
}

impl SpatialIndex {
    /// Builds the index from the current moth positions.
    pub fn build(moths: &[Moth]) -> Result<Self, KdTreeError> {
        let moths = build_tree(moths, |moth| moth.pos.to_vec())?;
        Ok(Self { moths })
    }

    /// Number of indexed moths.
    pub fn len(&self) -> usize {
        self.moths.size()
    }

    /// Checks whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moths whose centre lies within `radius` of `pos`, sorted by index.
    pub fn query_moths(&self, pos: &Array1<f32>, radius: f32) -> SpatialQueryResult {
        let mut hits: SpatialQueryResult = self
            .moths
            .within(&pos.to_vec(), radius.powi(2), &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .map(|(dist, &idx)| (dist, idx))
            .collect();
        hits.sort_unstable_by_key(|&(_, idx)| idx);
        hits
    }
}

/// Helper function to build a KD-tree from a collection of items.
fn build_tree<T>(items: &[T], get_pos: impl Fn(&T) -> Vec<f32>) -> Result<Tree2D, KdTreeError> {
    let mut tree = KdTree::with_capacity(2, items.len().max(1));
    for (i, item) in items.iter().enumerate() {
        tree.add(get_pos(item), i)?;
    }
    Ok(tree)
}
