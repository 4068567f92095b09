use config::constants::DEFAULT_TEMPLATE_SEGMENTS;
use glam::DVec3;
use path_mesh::template::{unit_joint, unit_segment};
use path_mesh::{Color, InstanceKind, Mesh, MeshError, PathMeshBuilder};

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One-triangle joint stamp around the origin.
fn tiny_joint() -> Mesh {
    let positions = vec![
        DVec3::new(0.5, 0.0, 0.0),
        DVec3::new(0.0, 0.5, 0.0),
        DVec3::new(0.0, 0.0, 0.5),
    ];
    let normals = vec![DVec3::ONE.normalize(); 3];
    Mesh::from_buffers(positions, Some(normals), &[0, 1, 2]).unwrap()
}

/// One-triangle segment stamp spanning Y in [-1, 1].
fn tiny_segment() -> Mesh {
    let positions = vec![
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.5, -1.0, 0.0),
        DVec3::new(-0.5, -1.0, 0.0),
    ];
    let normals = vec![DVec3::Z; 3];
    Mesh::from_buffers(positions, Some(normals), &[0, 1, 2]).unwrap()
}

/// Segment stamp with one vertex on each end of the local Y axis.
fn axis_segment() -> Mesh {
    let positions = vec![
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
        DVec3::new(0.5, -1.0, 0.0),
    ];
    let normals = vec![DVec3::Z; 3];
    Mesh::from_buffers(positions, Some(normals), &[0, 1, 2]).unwrap()
}

fn assert_close(a: DVec3, b: DVec3) {
    assert!((a - b).length() < 1e-9, "expected {:?}, got {:?}", b, a);
}

fn raw_builder() -> PathMeshBuilder {
    PathMeshBuilder::new().optimize(false)
}

#[test]
fn single_point_gives_one_black_joint() {
    let joint = tiny_joint();
    let mesh = raw_builder()
        .build(&[DVec3::ZERO], &joint, &tiny_segment())
        .unwrap();

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.colors().unwrap().iter().all(|c| *c == BLACK));
    // Scale 2 * radius around the origin
    assert_close(mesh.vertex(0), DVec3::new(1.0, 0.0, 0.0));
    assert_close(mesh.vertex(2), DVec3::new(0.0, 0.0, 1.0));
}

#[test]
fn two_points_along_up_axis() {
    let points = [DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)];
    let mesh = raw_builder()
        .build(&points, &tiny_joint(), &tiny_segment())
        .unwrap();
    let colors = mesh.colors().unwrap();

    // joint(0..3) segment(3..6) joint(6..9)
    assert!(colors[0..3].iter().all(|c| *c == WHITE));
    assert_eq!(colors[3], BLACK);
    assert_eq!(colors[4], WHITE);
    assert_eq!(colors[5], WHITE);
    assert!(colors[6..9].iter().all(|c| *c == BLACK));

    // Identity rotation, height 10
    assert_close(mesh.vertex(3), DVec3::new(0.0, 10.0, 0.0));
    assert_close(mesh.vertex(4), DVec3::new(1.0, 0.0, 0.0));
    assert_close(mesh.vertex(6), DVec3::new(1.0, 10.0, 0.0));
}

#[test]
fn segment_along_x_maps_template_vertices() {
    let points = [DVec3::ZERO, DVec3::X];
    let joint = tiny_joint();
    let mesh = raw_builder()
        .build(&points, &joint, &tiny_segment())
        .unwrap();

    let base = joint.vertex_count() as u32;
    assert_close(mesh.vertex(base), DVec3::X);
    assert_close(mesh.vertex(base + 1), DVec3::new(0.0, -1.0, 0.0));
    assert_close(mesh.vertex(base + 2), DVec3::new(0.0, 1.0, 0.0));

    // Template normal +Z is orthogonal to the rotation axis
    let normals = mesh.normals().unwrap();
    assert_close(normals[base as usize], DVec3::Z);
}

#[test]
fn gradient_parameter_is_monotone() {
    let points = [
        DVec3::ZERO,
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(1.0, 2.5, 3.0),
        DVec3::new(-6.0, 0.0, 1.0),
        DVec3::new(-6.0, 0.0, 9.0),
    ];
    let plan = PathMeshBuilder::new().plan(&points).unwrap();

    let mut last = 0.0;
    for instance in &plan {
        assert!(instance.t0 <= instance.t1);
        assert!(instance.t0 >= last);
        last = instance.t1;
    }
    assert_eq!(plan[0].t0, 0.0);
    assert_eq!(plan.last().unwrap().t1, 1.0);

    // Gray levels only get darker along the path
    let mut last_level = f32::INFINITY;
    for instance in &plan {
        if let InstanceKind::Joint { color } = instance.kind {
            assert!(color.r <= last_level);
            last_level = color.r;
        }
    }
}

#[test]
fn coincident_points_never_produce_nan() {
    let points = [DVec3::new(3.0, 3.0, 3.0); 4];
    let joint = unit_joint(8).unwrap();
    let segment = unit_segment(8).unwrap();
    let mesh = PathMeshBuilder::new()
        .build(&points, &joint, &segment)
        .unwrap();

    assert!(mesh
        .colors()
        .unwrap()
        .iter()
        .flatten()
        .all(|c| c.is_finite()));
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
    assert!(mesh.normals().unwrap().iter().all(|n| n.is_finite()));
}

#[test]
fn instance_count_is_two_n_minus_one() {
    let joint = tiny_joint();
    let segment = tiny_segment();

    for n in 2..8 {
        let points: Vec<DVec3> = (0..n).map(|i| DVec3::new(i as f64, (i * i) as f64, 0.0)).collect();
        let plan = PathMeshBuilder::new().plan(&points).unwrap();
        assert_eq!(plan.len(), 2 * n - 1);
        assert_eq!(plan.iter().filter(|i| i.is_joint()).count(), n);

        let mesh = raw_builder().build(&points, &joint, &segment).unwrap();
        assert_eq!(mesh.triangle_count(), 2 * n - 1);
        assert_eq!(mesh.vertex_count(), 3 * (2 * n - 1));
    }
}

#[test]
fn building_twice_is_identical() {
    let joint = unit_joint(12).unwrap();
    let segment = unit_segment(12).unwrap();
    let points = [
        DVec3::ZERO,
        DVec3::new(2.0, 1.0, 0.0),
        DVec3::new(2.0, 1.0, -4.0),
    ];
    let builder = PathMeshBuilder::new().radius(0.2);

    let first = builder.build(&points, &joint, &segment).unwrap();
    let second = builder.build(&points, &joint, &segment).unwrap();
    assert_eq!(first, second);
}

#[test]
fn weld_pass_keeps_geometry() {
    let joint = unit_joint(10).unwrap();
    let segment = unit_segment(10).unwrap();
    let points = [DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0), DVec3::new(3.0, 0.0, 5.0)];

    let raw = raw_builder().build(&points, &joint, &segment).unwrap();
    let welded = PathMeshBuilder::new().build(&points, &joint, &segment).unwrap();

    assert!(welded.vertex_count() <= raw.vertex_count());
    assert_eq!(welded.triangle_count(), raw.triangle_count());
    let (raw_min, raw_max) = raw.bounding_box();
    let (welded_min, welded_max) = welded.bounding_box();
    assert_close(welded_min, raw_min);
    assert_close(welded_max, raw_max);
}

#[test]
fn segment_pointing_down_flips_template() {
    let points = [DVec3::ZERO, DVec3::new(0.0, -3.0, 0.0)];
    let joint = tiny_joint();
    let mesh = raw_builder()
        .build(&points, &joint, &axis_segment())
        .unwrap();

    let base = joint.vertex_count() as u32;
    assert_close(mesh.vertex(base), DVec3::new(0.0, -3.0, 0.0));
    assert_close(mesh.vertex(base + 1), DVec3::ZERO);

    // The rim vertex stays at tube radius in the XZ plane
    let rim = mesh.vertex(base + 2);
    assert!(rim.y.abs() < 1e-9);
    assert!((rim.length() - 1.0).abs() < 1e-9);

    let normals = mesh.normals().unwrap();
    assert!(normals.iter().all(|n| n.is_finite()));
    assert!((normals[base as usize].length() - 1.0).abs() < 1e-9);
}

#[test]
fn weld_far_from_origin_keeps_triangles() {
    let joint = unit_joint(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let segment = unit_segment(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let points = [DVec3::new(1e11, 0.0, 0.0), DVec3::new(1e11, 5.0, 0.0)];

    let raw = raw_builder().build(&points, &joint, &segment).unwrap();
    let welded = PathMeshBuilder::new().build(&points, &joint, &segment).unwrap();

    assert_eq!(welded.triangle_count(), raw.triangle_count());
    assert!(welded.validate());
}

#[test]
fn weld_far_from_origin_keeps_bounds() {
    let joint = unit_joint(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let segment = unit_segment(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let points = [DVec3::new(1e12, 0.0, 0.0), DVec3::new(2e12, 0.0, 0.0)];
    let settings = path_mesh::BuildSettings {
        start_color: Color::WHITE,
        end_color: Color::WHITE,
        ..Default::default()
    };

    let raw = PathMeshBuilder::with_settings(settings.clone())
        .optimize(false)
        .build(&points, &joint, &segment)
        .unwrap();
    let welded = PathMeshBuilder::with_settings(settings)
        .build(&points, &joint, &segment)
        .unwrap();

    let (raw_min, raw_max) = raw.bounding_box();
    let (welded_min, welded_max) = welded.bounding_box();
    assert_eq!(welded_max.x, raw_max.x);
    assert_eq!(welded_min.x, raw_min.x);
    assert_eq!(welded.triangle_count(), raw.triangle_count());
}

#[test]
fn tube_radius_matches_builder_radius() {
    let joint = unit_joint(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let segment = unit_segment(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
    let points = [DVec3::ZERO, DVec3::new(0.0, 4.0, 0.0)];
    let mesh = PathMeshBuilder::new()
        .radius(0.5)
        .build(&points, &joint, &segment)
        .unwrap();

    let (min, max) = mesh.bounding_box();
    assert!((max.x - 0.5).abs() < 1e-9);
    assert!((min.x + 0.5).abs() < 1e-9);
    assert!(max.y <= 4.5 && max.y > 4.0);
}

#[test]
fn custom_gradient_endpoints() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let blue = Color::new(0.0, 0.0, 1.0, 1.0);
    let settings = path_mesh::BuildSettings {
        start_color: red,
        end_color: blue,
        ..Default::default()
    };

    let plan = PathMeshBuilder::with_settings(settings)
        .plan(&[DVec3::ZERO, DVec3::X])
        .unwrap();
    assert_eq!(plan[0].kind, InstanceKind::Joint { color: red });
    assert_eq!(plan[2].kind, InstanceKind::Joint { color: blue });
}

#[test]
fn invalid_input_aborts_build() {
    let joint = tiny_joint();
    let segment = tiny_segment();

    let err = raw_builder().build(&[], &joint, &segment).unwrap_err();
    assert!(matches!(err, MeshError::InvalidInput { .. }));

    let err = raw_builder()
        .build(&[DVec3::ZERO], &joint, &Mesh::new())
        .unwrap_err();
    assert!(matches!(err, MeshError::InvalidTemplate { .. }));
}
