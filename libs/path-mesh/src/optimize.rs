//! # Mesh Optimization
//!
//! Welds vertices with identical attributes and drops triangles that
//! collapse as a result. The surviving triangles keep their positions,
//! normals and colors.

use crate::mesh::Mesh;
use config::constants::COLOR_MERGE_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    position: [i128; 3],
    normal: [i128; 3],
    color: [i128; 4],
}

/// Largest magnitude a quantized coordinate may have before the key falls
/// back to the exact bit pattern of the coordinate.
const MAX_QUANTIZED: f64 = (1u64 << 62) as f64;

/// Offset that keeps exact-bit keys disjoint from quantized keys.
const EXACT_KEY_OFFSET: i128 = 1 << 100;

/// Quantizes `value` onto a grid of spacing `1 / inv_tol`.
///
/// Values whose grid index is not representable (far from the origin, or a
/// tolerance so small the scale overflows) are keyed by their exact bits, so
/// they only merge with bitwise-identical values.
fn quantize(value: f64, inv_tol: f64) -> i128 {
    let scaled = (value * inv_tol).round();
    if scaled.is_finite() && scaled.abs() < MAX_QUANTIZED {
        scaled as i128
    } else {
        EXACT_KEY_OFFSET + value.to_bits() as i128
    }
}

fn quantize3(v: DVec3, inv_tol: f64) -> [i128; 3] {
    [
        quantize(v.x, inv_tol),
        quantize(v.y, inv_tol),
        quantize(v.z, inv_tol),
    ]
}

fn quantize_color(c: [f32; 4]) -> [i128; 4] {
    let inv_tol = 1.0 / COLOR_MERGE_EPSILON as f64;
    c.map(|channel| quantize(channel as f64, inv_tol))
}

/// Merges vertices whose position, normal and color agree within
/// `epsilon` (colors within [`COLOR_MERGE_EPSILON`]).
///
/// Vertices keep their first-seen order. Triangles that end up with a
/// repeated index are removed.
///
/// # Example
///
/// ```rust
/// use path_mesh::optimize::weld_vertices;
/// use path_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// for p in [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::X, DVec3::Y, DVec3::ONE] {
///     mesh.add_vertex(p);
/// }
/// mesh.add_triangle(0, 1, 2);
/// mesh.add_triangle(3, 5, 4);
///
/// let welded = weld_vertices(&mesh, 1e-8);
/// assert_eq!(welded.vertex_count(), 4);
/// assert_eq!(welded.triangle(1), [1, 3, 2]);
/// ```
pub fn weld_vertices(mesh: &Mesh, epsilon: f64) -> Mesh {
    let inv_tol = 1.0 / epsilon;
    let normals = mesh.normals();
    let colors = mesh.colors();

    let mut seen: HashMap<VertexKey, u32> = HashMap::with_capacity(mesh.vertex_count());
    let mut remap = Vec::with_capacity(mesh.vertex_count());
    let mut result = Mesh::with_capacity(mesh.vertex_count(), mesh.triangle_count());
    let mut out_normals = normals.map(|_| Vec::new());
    let mut out_colors = colors.map(|_| Vec::new());

    for (i, &position) in mesh.vertices().iter().enumerate() {
        let normal = normals.map(|n| n[i]);
        let color = colors.map(|c| c[i]);

        let key = VertexKey {
            position: quantize3(position, inv_tol),
            normal: normal.map_or([0; 3], |n| quantize3(n, inv_tol)),
            color: color.map_or([0; 4], quantize_color),
        };

        let index = *seen.entry(key).or_insert_with(|| {
            if let (Some(out), Some(n)) = (&mut out_normals, normal) {
                out.push(n);
            }
            if let (Some(out), Some(c)) = (&mut out_colors, color) {
                out.push(c);
            }
            result.add_vertex(position)
        });
        remap.push(index);
    }

    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| remap[i as usize]);
        if a != b && b != c && a != c {
            result.add_triangle(a, b, c);
        }
    }

    if let Some(normals) = out_normals {
        result.set_normals(normals);
    }
    if let Some(colors) = out_colors {
        result.set_colors(colors);
    }

    result
}
