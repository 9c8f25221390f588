//! Procedural icosphere meshes used for the sun, planets and stars.

use std::collections::HashMap;

use glam::Vec3;

use crate::mesh::MeshData;

/// Generate an icosphere of the given radius, white.
///
/// Each subdivision splits every triangle into four, so the mesh has
/// `20 * 4^n` triangles and `10 * 4^n + 2` vertices. Triangles wind
/// counter-clockwise seen from outside. Normals are the unit directions.
pub fn generate_icosphere(subdivisions: u32, radius: f32) -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let mut directions: Vec<Vec3> = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(Vec3::normalize)
    .collect();

    let mut indices: Vec<u32> = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, 1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7,
        1, 8, 3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, 4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9,
        8, 1,
    ];

    for _ in 0..subdivisions {
        indices = subdivide(&mut directions, &indices);
    }

    MeshData {
        positions: directions.iter().map(|d| (*d * radius).to_array()).collect(),
        normals: directions.iter().map(|d| d.to_array()).collect(),
        indices,
        color: [1.0, 1.0, 1.0, 1.0],
    }
}

/// Split each triangle into four at its edge midpoints, pushed back onto the
/// unit sphere. Shared edges reuse the same midpoint vertex.
fn subdivide(directions: &mut Vec<Vec3>, indices: &[u32]) -> Vec<u32> {
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let mut out = Vec::with_capacity(indices.len() * 4);

    let mut midpoint = |a: u32, b: u32, directions: &mut Vec<Vec3>| -> u32 {
        let key = (a.min(b), a.max(b));
        *midpoints.entry(key).or_insert_with(|| {
            let mid = (directions[a as usize] + directions[b as usize]).normalize();
            directions.push(mid);
            (directions.len() - 1) as u32
        })
    };

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = midpoint(a, b, directions);
        let bc = midpoint(b, c, directions);
        let ca = midpoint(c, a, directions);

        out.extend_from_slice(&[a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
    }

    out
}
