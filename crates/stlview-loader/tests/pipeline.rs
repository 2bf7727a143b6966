//! End-to-end load tests on in-memory STL files.

use approx::assert_relative_eq;
use stlview_core::{validate, ErrorKind, SniffLimits};
use stlview_loader::{decode_stl, load_model, read_model_file};

const SAMPLE_ASCII: &str = "solid testmodel
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid testmodel
";

fn make_cube(size: f32) -> (Vec<f32>, Vec<u32>) {
    let vertices = vec![
        // Bottom face (z=0)
        0.0, 0.0, 0.0, size, 0.0, 0.0, size, size, 0.0, 0.0, size, 0.0,
        // Top face (z=size)
        0.0, 0.0, size, size, 0.0, size, size, size, size, 0.0, size, size,
    ];
    let indices = vec![
        0, 2, 1, 0, 3, 2, // bottom
        4, 5, 6, 4, 6, 7, // top
        0, 1, 5, 0, 5, 4, // front
        2, 3, 7, 2, 7, 6, // back
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ];
    (vertices, indices)
}

fn binary_stl(header: &[u8], vertices: &[f32], indices: &[u32]) -> Vec<u8> {
    let num_triangles = indices.len() / 3;
    let mut data = Vec::with_capacity(84 + num_triangles * 50);
    data.extend_from_slice(&header[..header.len().min(80)]);
    data.resize(80, b' ');
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for tri in indices.chunks(3) {
        // Normals are recomputed by readers; zero is fine here.
        data.extend_from_slice(&[0u8; 12]);
        for &idx in tri {
            let i = idx as usize * 3;
            for c in &vertices[i..i + 3] {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }
    data
}

#[test]
fn canonical_ascii_sample() {
    let bytes = SAMPLE_ASCII.as_bytes();
    assert!(validate("testmodel.stl", bytes).is_valid());

    let model = load_model("testmodel.stl", bytes).unwrap();
    assert_eq!(model.name, "testmodel.stl");
    assert_eq!(model.info.vertex_count, 3);
    assert_eq!(model.info.face_count, 1);
    assert_relative_eq!(model.info.bounding_box.x, 1.0);
    assert_relative_eq!(model.info.bounding_box.y, 1.0);
    assert_relative_eq!(model.info.bounding_box.z, 0.0);
}

#[test]
fn binary_cube() {
    let (vertices, indices) = make_cube(10.0);
    let bytes = binary_stl(b"stlview test cube", &vertices, &indices);
    assert_eq!(bytes.len(), 84 + 12 * 50);

    let model = load_model("cube.STL", &bytes).unwrap();
    assert_eq!(model.info.face_count, 12);
    assert_eq!(model.info.vertex_count, 36);
    // The decoded mesh itself keeps the shared corners.
    assert_eq!(model.mesh.num_vertices(), 8);
    assert_eq!(model.mesh.num_triangles(), 12);
    assert_relative_eq!(model.info.bounding_box.x, 10.0);
    assert_relative_eq!(model.info.bounding_box.y, 10.0);
    assert_relative_eq!(model.info.bounding_box.z, 10.0);
}

#[test]
fn binary_header_starting_with_solid() {
    let (vertices, indices) = make_cube(2.0);
    let bytes = binary_stl(b"solid exported by a CAD tool", &vertices, &indices);
    let result = validate("cube.stl", &bytes);
    assert!(result.is_valid());
    assert!(result.error().is_none());
}

#[test]
fn truncated_binary_passes_sniffing_but_not_decoding() {
    let (vertices, indices) = make_cube(1.0);
    let mut bytes = binary_stl(b"", &vertices, &indices);
    bytes.truncate(84 + 4 * 50);
    assert!(validate("cut.stl", &bytes).is_valid());

    let err = load_model("cut.stl", &bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedFile);
}

#[test]
fn soup_matches_face_count() {
    let (vertices, indices) = make_cube(1.0);
    let bytes = binary_stl(b"", &vertices, &indices);
    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.to_triangle_soup().len(), 12 * 9);
}

#[test]
fn read_from_disk() {
    let dir = std::env::temp_dir().join(format!("stlview-loader-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sample.stl");
    std::fs::write(&path, SAMPLE_ASCII).unwrap();

    let model = read_model_file(&path, &SniffLimits::default()).unwrap();
    assert_eq!(model.name, "sample.stl");
    assert_eq!(model.info.face_count, 1);

    let txt = dir.join("sample.txt");
    std::fs::write(&txt, SAMPLE_ASCII).unwrap();
    let err = read_model_file(&txt, &SniffLimits::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

    std::fs::remove_dir_all(&dir).unwrap();
}
