//! Vertex-to-vertex mappings produced by the search entry points.

use itertools::Itertools;

/// A total mapping from source vertices `0..len` into target vertices.
///
/// Isomorphism searches return bijections; homomorphism searches may return
/// non-injective maps, so injectivity is a query, not an invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexMap {
    to_target: Vec<usize>,
}

impl VertexMap {
    /// Wrap an image array: `images[v]` is the target of source vertex `v`.
    pub fn from_images(images: Vec<usize>) -> Self {
        VertexMap { to_target: images }
    }

    /// Number of source vertices covered.
    pub fn len(&self) -> usize {
        self.to_target.len()
    }

    /// Whether the map covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.to_target.is_empty()
    }

    /// Image of `v`; panics if `v` is outside the domain.
    pub fn target(&self, v: usize) -> usize {
        self.to_target[v]
    }

    /// Image of `v`, if `v` is in the domain.
    pub fn get(&self, v: usize) -> Option<usize> {
        self.to_target.get(v).copied()
    }

    /// The raw image array.
    pub fn images(&self) -> &[usize] {
        &self.to_target
    }

    /// Iterate `(source, target)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.to_target.iter().copied().enumerate()
    }

    /// Whether no two sources share an image.
    pub fn is_injective(&self) -> bool {
        self.to_target.iter().all_unique()
    }

    /// The inverse map, when this is a bijection onto `0..len`.
    pub fn inverted(&self) -> Option<VertexMap> {
        let n = self.to_target.len();
        let mut back = vec![usize::MAX; n];
        for (v, &image) in self.to_target.iter().enumerate() {
            if image >= n || back[image] != usize::MAX {
                return None;
            }
            back[image] = v;
        }
        Some(VertexMap::from_images(back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_the_image_array_as_given() {
        let map = VertexMap::from_images(vec![4, 0, 2]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.images(), &[4, 0, 2]);
        assert_eq!(map.get(2), Some(2));
        assert_eq!(map.get(3), None);
    }

    #[test]
    fn inversion_round_trips() {
        let map = VertexMap::from_images(vec![2, 0, 1]);
        let back = map.inverted().unwrap();
        assert_eq!(back.images(), &[1, 2, 0]);
        assert!(map.is_injective());
    }

    #[test]
    fn non_injective_maps_have_no_inverse() {
        let map = VertexMap::from_images(vec![1, 1, 0]);
        assert!(!map.is_injective());
        assert!(map.inverted().is_none());
    }
}
