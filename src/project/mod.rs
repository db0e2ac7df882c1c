//! Project save/load
//!
//! Builds a [`ProjectDocument`] from live editor state and applies a parsed
//! document back onto it. Application is all-or-nothing per load: every
//! block is validated before any live buffer is touched, so a bad file
//! leaves the session exactly as it was.

pub mod document;

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::instance::{InstanceRecord, InstanceRegistry, InstanceTransform};
use crate::scene::{EnvironmentParams, RoadPath, WaterParams};
use crate::terrain::Heightfield;

pub use document::{ProjectDocument, RoadPoint, TerrainBlock, VegetationEntry, PROJECT_VERSION};

/// Snapshot the live state into a serializable document
pub fn build_document(
    heightfield: &Heightfield,
    instances: &InstanceRegistry,
    environment: &EnvironmentParams,
    water: &WaterParams,
    road: &RoadPath,
) -> ProjectDocument {
    let vegetation = instances
        .export()
        .into_iter()
        .map(|record| VegetationEntry {
            category: record.category,
            p: record.transform.position.to_array(),
            s: record.transform.scale.to_array(),
            r: record.transform.rotation.to_array(),
        })
        .collect();

    let road_points = road
        .points()
        .iter()
        .map(|p| RoadPoint { x: p.x, y: p.y, z: p.z })
        .collect();

    ProjectDocument {
        version: PROJECT_VERSION,
        timestamp: now_ms(),
        terrain: Some(TerrainBlock {
            vertices: heightfield.flatten_positions(),
            colors: heightfield.flatten_colors(),
        }),
        vegetation: Some(vegetation),
        environment: Some(*environment),
        water: Some(*water),
        road_points: Some(road_points),
    }
}

/// Apply a document onto live state. Missing blocks leave their targets
/// untouched; a present-but-invalid block fails the whole load before
/// anything is written.
pub fn apply_document(
    doc: &ProjectDocument,
    heightfield: &mut Heightfield,
    instances: &mut InstanceRegistry,
    environment: &mut EnvironmentParams,
    water: &mut WaterParams,
    road: &mut RoadPath,
) -> Result<()> {
    if doc.version == 0 || doc.version > PROJECT_VERSION {
        return Err(Error::InvalidFormat(format!(
            "unsupported project version {}",
            doc.version
        )));
    }

    let expected = heightfield.vertex_count() * 3;
    if let Some(terrain) = &doc.terrain {
        if terrain.vertices.len() != expected {
            return Err(Error::InvalidFormat(format!(
                "terrain vertex buffer has {} floats, expected {expected}",
                terrain.vertices.len()
            )));
        }
        if terrain.colors.len() != expected {
            return Err(Error::InvalidFormat(format!(
                "terrain color buffer has {} floats, expected {expected}",
                terrain.colors.len()
            )));
        }
    }

    // Validation done, start mutating.
    if let Some(terrain) = &doc.terrain {
        let positions: Vec<Vec3> = terrain
            .vertices
            .chunks_exact(3)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
            .collect();
        let colors: Vec<Vec3> = terrain
            .colors
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        heightfield.copy_buffers_from(&positions, &colors);
    }

    if let Some(vegetation) = &doc.vegetation {
        let records: Vec<InstanceRecord> = vegetation
            .iter()
            .map(|entry| InstanceRecord {
                category: entry.category,
                transform: InstanceTransform {
                    position: Vec3::from_array(entry.p),
                    scale: Vec3::from_array(entry.s),
                    rotation: Vec3::from_array(entry.r),
                },
            })
            .collect();
        instances.restore(&records);
    }

    if let Some(env) = &doc.environment {
        *environment = *env;
    }
    if let Some(w) = &doc.water {
        *water = *w;
    }
    if let Some(points) = &doc.road_points {
        road.set_points(points.iter().map(|p| Vec3::new(p.x, p.y, p.z)).collect());
    }

    log::info!(
        "loaded project v{} ({} vertices, {} instances)",
        doc.version,
        heightfield.vertex_count(),
        instances.total(),
    );
    Ok(())
}

/// Parse a document from JSON text
pub fn parse(json: &str) -> Result<ProjectDocument> {
    serde_json::from_str(json).map_err(|e| Error::InvalidFormat(e.to_string()))
}

/// Serialize a document to pretty JSON
pub fn to_json(doc: &ProjectDocument) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| Error::InvalidFormat(e.to_string()))
}

/// Write a document to disk as pretty JSON
pub fn save_to_file(doc: &ProjectDocument, path: &Path) -> Result<()> {
    fs::write(path, to_json(doc)?)?;
    log::info!("saved project to {}", path.display());
    Ok(())
}

/// Read and parse a document from disk
pub fn load_from_file(path: &Path) -> Result<ProjectDocument> {
    parse(&fs::read_to_string(path)?)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
