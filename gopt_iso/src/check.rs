//! O(V+E) membership checks for candidate mappings.
//!
//! Structural malformation (wrong domain size, image outside the target) is
//! an error; a well-formed mapping that simply fails to be an isomorphism or
//! homomorphism is an ordinary `Ok(false)`. No solver is involved.

use gopt_common::Graph;
use tracing::trace;

use crate::error::MappingError;
use crate::mapping::VertexMap;

/// Verify that `map` is an isomorphism from `g` onto `h`.
///
/// With equal vertex and edge counts, injectivity plus one-directional edge
/// preservation already forces adjacency preservation both ways, so that is
/// all this checks.
pub fn verify_isomorphism(g: &Graph, h: &Graph, map: &VertexMap) -> Result<bool, MappingError> {
    well_formed(g, h, map)?;
    if g.vertex_count() != h.vertex_count() || g.edge_count() != h.edge_count() {
        trace!("candidate rejected: vertex/edge counts differ");
        return Ok(false);
    }
    if !map.is_injective() {
        trace!("candidate rejected: not injective");
        return Ok(false);
    }
    Ok(g.edges()
        .iter()
        .all(|&(u, v)| h.has_edge(map.target(u), map.target(v))))
}

/// Verify that `map` is a homomorphism from `g` into `h` (edges land on
/// edges; injectivity not required).
pub fn verify_homomorphism(g: &Graph, h: &Graph, map: &VertexMap) -> Result<bool, MappingError> {
    well_formed(g, h, map)?;
    Ok(g.edges()
        .iter()
        .all(|&(u, v)| h.has_edge(map.target(u), map.target(v))))
}

fn well_formed(g: &Graph, h: &Graph, map: &VertexMap) -> Result<(), MappingError> {
    if map.len() != g.vertex_count() {
        return Err(MappingError::DomainSizeMismatch {
            expected: g.vertex_count(),
            actual: map.len(),
        });
    }
    for (vertex, image) in map.iter() {
        if image >= h.vertex_count() {
            return Err(MappingError::TargetOutOfRange {
                vertex,
                image,
                limit: h.vertex_count(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::cycle;

    #[test]
    fn identity_is_an_isomorphism() {
        let g = cycle(5);
        let id = VertexMap::from_images((0..5).collect());
        assert_eq!(verify_isomorphism(&g, &g, &id), Ok(true));
        assert_eq!(verify_homomorphism(&g, &g, &id), Ok(true));
    }

    #[test]
    fn rotation_is_an_automorphism_of_a_cycle() {
        let g = cycle(5);
        let rot = VertexMap::from_images(vec![1, 2, 3, 4, 0]);
        assert_eq!(verify_isomorphism(&g, &g, &rot), Ok(true));
    }

    #[test]
    fn transposing_two_cycle_vertices_breaks_edges() {
        let g = cycle(5);
        let swap = VertexMap::from_images(vec![1, 0, 2, 3, 4]);
        assert_eq!(verify_isomorphism(&g, &g, &swap), Ok(false));
    }

    #[test]
    fn malformed_mappings_are_errors_not_false() {
        let g = cycle(5);
        let short = VertexMap::from_images(vec![0, 1]);
        assert_eq!(
            verify_isomorphism(&g, &g, &short),
            Err(MappingError::DomainSizeMismatch { expected: 5, actual: 2 })
        );
        let wild = VertexMap::from_images(vec![0, 1, 2, 3, 9]);
        assert_eq!(
            verify_isomorphism(&g, &g, &wild),
            Err(MappingError::TargetOutOfRange { vertex: 4, image: 9, limit: 5 })
        );
    }
}
