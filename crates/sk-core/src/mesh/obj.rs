//! OBJ loading

use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use super::{MeshBuffers, MeshError, vertex_normals};

/// Merged positions, normals and triangle indices of every model in an OBJ
/// file. Models without `vn` data get smooth computed normals.
pub fn load_obj(path: impl AsRef<Path>) -> Result<MeshBuffers, MeshError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| MeshError::Io(e.to_string()))?;
    let mut reader = BufReader::new(file);
    let mesh = load_obj_from_reader(&mut reader)?;
    tracing::debug!(
        "Loaded OBJ {:?}: {} vertices, {} triangles",
        path,
        mesh.positions.len(),
        mesh.indices.len() / 3
    );
    Ok(mesh)
}

pub fn load_obj_from_bytes(data: &[u8]) -> Result<MeshBuffers, MeshError> {
    let mut cursor = Cursor::new(data);
    load_obj_from_reader(&mut cursor)
}

fn load_obj_from_reader(reader: &mut impl BufRead) -> Result<MeshBuffers, MeshError> {
    // Materials are irrelevant; unresolved mtllib references load as empty
    let (models, _materials) = tobj::load_obj_buf(
        reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Ok(Default::default()),
    )
    .map_err(|e| MeshError::Parse(e.to_string()))?;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        let offset = positions.len() as u32;
        let model_positions: Vec<[f32; 3]> = mesh
            .positions
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        // single_index aligns normals with positions when the file has them
        if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
            normals.extend(mesh.normals.chunks_exact(3).map(|c| [c[0], c[1], c[2]]));
        } else {
            let in_range = mesh.indices.iter().all(|&i| (i as usize) < model_positions.len());
            if !in_range {
                return Err(MeshError::InvalidIndices(format!(
                    "model {:?} references missing vertices",
                    model.name
                )));
            }
            normals.extend(vertex_normals(&model_positions, &mesh.indices));
        }

        positions.extend(model_positions);
        indices.extend(mesh.indices.iter().map(|&i| offset + i));
    }

    if positions.is_empty() || indices.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    Ok(MeshBuffers {
        positions,
        normals,
        indices,
    })
}
