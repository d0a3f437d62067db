//! Subdivided icosahedron wireframe.
//!
//! The mesh starts from the 12 canonical icosahedron vertices and 20 faces.
//! Each subdivision pass splits every triangle into four through its edge
//! midpoints; midpoints are memoised per unordered vertex pair so a shared
//! edge yields one new vertex. Only the deduplicated edge list survives, faces
//! are dropped once the edges have been extracted.
//!
//! | level | vertices | edges | faces |
//! |-------|----------|-------|-------|
//! | 0     | 12       | 30    | 20    |
//! | 1     | 42       | 120   | 80    |
//! | 2     | 162      | 480   | 320   |

use crate::constants::MAX_SUBDIVISION_LEVEL;
use crate::error::ConfigError;
use fnv::{FnvHashMap, FnvHashSet};
use glam::DVec3;

const T: f64 = 1.618_033_988_749_895; // golden ratio

#[rustfmt::skip]
const BASE_VERTICES: [[f64; 3]; 12] = [
    [-1.0,  T,   0.0], [ 1.0,  T,   0.0], [-1.0, -T,   0.0], [ 1.0, -T,   0.0],
    [ 0.0, -1.0,  T ], [ 0.0,  1.0,  T ], [ 0.0, -1.0, -T ], [ 0.0,  1.0, -T ],
    [ T,   0.0, -1.0], [ T,   0.0,  1.0], [-T,   0.0, -1.0], [-T,   0.0,  1.0],
];

#[rustfmt::skip]
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11, 5], [0, 5, 1],  [0, 1, 7],   [0, 7, 10], [0, 10, 11],
    [1, 5, 9],  [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4],  [3, 4, 2],  [3, 2, 6],   [3, 6, 8],  [3, 8, 9],
    [4, 9, 5],  [2, 4, 11], [6, 2, 10],  [8, 6, 7],  [9, 8, 1],
];

/// Unordered vertex pair stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            a: a.min(b),
            b: a.max(b),
        }
    }
}

/// Immutable wireframe: vertices on a sphere of `radius` plus unique edges.
#[derive(Clone, Debug)]
pub struct Icosphere {
    pub radius: f64,
    pub subdivision_level: u32,
    pub vertices: Vec<DVec3>,
    pub edges: Vec<Edge>,
}

impl Icosphere {
    /// Build the mesh. Deterministic for a given `(radius, subdivision_level)`.
    pub fn generate(radius: f64, subdivision_level: u32) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if subdivision_level > MAX_SUBDIVISION_LEVEL {
            return Err(ConfigError::SubdivisionTooDeep {
                level: subdivision_level,
                max: MAX_SUBDIVISION_LEVEL,
            });
        }

        let mut vertices: Vec<DVec3> = BASE_VERTICES.iter().map(|v| DVec3::from_array(*v)).collect();
        let mut faces: Vec<[u32; 3]> = BASE_FACES.to_vec();

        for _ in 0..subdivision_level {
            let mut midpoints: FnvHashMap<Edge, u32> = FnvHashMap::default();
            let mut next = Vec::with_capacity(faces.len() * 4);
            for &[v0, v1, v2] in &faces {
                let a = midpoint(&mut vertices, &mut midpoints, v0, v1);
                let b = midpoint(&mut vertices, &mut midpoints, v1, v2);
                let c = midpoint(&mut vertices, &mut midpoints, v2, v0);
                next.push([v0, a, c]);
                next.push([v1, b, a]);
                next.push([v2, c, b]);
                next.push([a, b, c]);
            }
            faces = next;
        }

        for v in &mut vertices {
            *v = v.normalize() * radius;
        }

        let edges = unique_edges(&faces);
        log::debug!(
            "[geometry] level={} vertices={} edges={} faces={}",
            subdivision_level,
            vertices.len(),
            edges.len(),
            faces.len()
        );

        Ok(Self {
            radius,
            subdivision_level,
            vertices,
            edges,
        })
    }
}

fn midpoint(
    vertices: &mut Vec<DVec3>,
    cache: &mut FnvHashMap<Edge, u32>,
    i: u32,
    j: u32,
) -> u32 {
    *cache.entry(Edge::new(i, j)).or_insert_with(|| {
        let mid = (vertices[i as usize] + vertices[j as usize]) * 0.5;
        vertices.push(mid);
        (vertices.len() - 1) as u32
    })
}

// Edge order follows first appearance while walking the faces, which keeps
// primitive indices stable between runs.
fn unique_edges(faces: &[[u32; 3]]) -> Vec<Edge> {
    let mut seen: FnvHashSet<Edge> = FnvHashSet::default();
    let mut edges = Vec::with_capacity(faces.len() * 3 / 2);
    for &[a, b, c] in faces {
        for edge in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    edges
}
