use super::{ConvexPart, ConvexPartBuilder};
use crate::math::Point;
use crate::shape::Polytope;
use std::collections::VecDeque;

/// Decomposes a star-shaped polytope by growing convex parts over adjacent facets.
///
/// Each part starts from the first facet not covered yet and grows breadth-first
/// through the facet adjacency, only crossing into facets the part accepts.
/// Every facet ends up in exactly one part.
pub fn flood_fill_decomposition(polytope: &Polytope) -> Vec<ConvexPart> {
    let mut used = vec![false; polytope.num_facets()];
    let mut parts = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..polytope.num_facets() {
        if used[seed] {
            continue;
        }

        used[seed] = true;
        let mut builder = match ConvexPartBuilder::new(polytope, seed) {
            Some(builder) => builder,
            None => {
                log::debug!(
                    "The facet {} of {} is coplanar with the origin.",
                    seed,
                    polytope.name()
                );
                let facet = &polytope.facets()[seed];
                parts.push(ConvexPart {
                    vertices: vec![Point::origin(), facet[0], facet[1], facet[2]],
                    facets: vec![seed],
                });
                continue;
            }
        };

        queue.clear();
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for neighbor in polytope.neighbors(current) {
                if !used[*neighbor] && builder.try_add_facet(*neighbor) {
                    used[*neighbor] = true;
                    queue.push_back(*neighbor);
                }
            }
        }

        parts.push(ConvexPart {
            vertices: builder.vertices(),
            facets: builder.facets().to_vec(),
        });
    }

    parts
}
