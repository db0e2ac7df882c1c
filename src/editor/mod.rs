//! Editor session: owns all live state and drives the tools
//!
//! The UI layer translates input into the stroke protocol here
//! (`stroke_begin` / `stroke_move` / `stroke_end` with cursor positions in
//! normalized device coordinates) plus discrete intents (undo, redo, save,
//! load, parameter updates). All mutation of terrain, instances, and
//! history flows through this type on one thread.

use std::f32::consts::PI;
use std::path::Path;

use rand::Rng;

use crate::brush::{Material, PaintParamUpdate, PaintTool, SculptParamUpdate, SculptTool};
use crate::core::camera::Camera;
use crate::core::types::{Result, Vec2, Vec3};
use crate::history::History;
use crate::instance::{Category, InstanceRegistry};
use crate::project::{self, ProjectDocument};
use crate::scene::{EnvironmentParams, EnvironmentUpdate, RoadPath, WaterParams, WaterUpdate};
use crate::terrain::{self, GeneratorParams, Heightfield};

/// The active tool; selects what a stroke does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Sculpt,
    Paint,
    Vegetation,
    Road,
}

pub struct Editor {
    pub heightfield: Heightfield,
    pub instances: InstanceRegistry,
    pub history: History,
    pub sculpt: SculptTool,
    pub paint: PaintTool,
    pub environment: EnvironmentParams,
    pub water: WaterParams,
    pub road: RoadPath,
    tool: Tool,
    vegetation_category: Category,
    stroke_active: bool,
}

impl Editor {
    /// A fresh session: default-size terrain with generated relief, and the
    /// initial state captured so the first stroke can be undone.
    pub fn new() -> Self {
        let mut heightfield = Heightfield::default();
        terrain::generate(&mut heightfield, &GeneratorParams::default());
        Self::with_heightfield(heightfield)
    }

    /// A session over a caller-built heightfield
    pub fn with_heightfield(heightfield: Heightfield) -> Self {
        let instances = InstanceRegistry::new();
        let mut history = History::new();
        history.capture(&heightfield, &instances);

        Self {
            heightfield,
            instances,
            history,
            sculpt: SculptTool::new(),
            paint: PaintTool::new(),
            environment: EnvironmentParams::default(),
            water: WaterParams::default(),
            road: RoadPath::new(),
            tool: Tool::Sculpt,
            vegetation_category: Category::Tree,
            stroke_active: false,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Category placed by the vegetation tool
    pub fn set_vegetation_category(&mut self, category: Category) {
        self.vegetation_category = category;
    }

    pub fn set_sculpt_params(&mut self, update: &SculptParamUpdate) {
        self.sculpt.set_params(update);
    }

    pub fn set_paint_params(&mut self, update: &PaintParamUpdate) {
        self.paint.set_params(update);
    }

    /// Select the paint material by its name. Unknown names are ignored
    /// and reported as false.
    pub fn set_paint_material(&mut self, name: &str) -> bool {
        match Material::parse(name) {
            Some(material) => {
                self.paint.params.material = material;
                true
            }
            None => {
                log::warn!("unknown material {name:?}");
                false
            }
        }
    }

    pub fn set_environment(&mut self, update: &EnvironmentUpdate) {
        self.environment.merge(update);
    }

    pub fn set_water(&mut self, update: &WaterUpdate) {
        self.water.merge(update);
    }

    /// Begin a stroke at the given cursor position. Captures a snapshot
    /// before anything mutates, then applies the active tool once.
    pub fn stroke_begin(&mut self, ndc: Vec2, camera: &Camera) {
        if self.stroke_active {
            return;
        }
        self.stroke_active = true;
        self.history.capture(&self.heightfield, &self.instances);
        self.apply_tool_at(ndc, camera, true);
    }

    /// Continue an active stroke; no-op when no stroke is active
    pub fn stroke_move(&mut self, ndc: Vec2, camera: &Camera) {
        if !self.stroke_active {
            return;
        }
        self.apply_tool_at(ndc, camera, false);
    }

    pub fn stroke_end(&mut self) {
        self.stroke_active = false;
    }

    fn apply_tool_at(&mut self, ndc: Vec2, camera: &Camera, first: bool) {
        let Some(hit) = terrain::project(&self.heightfield, ndc, camera) else {
            return;
        };

        match self.tool {
            Tool::Sculpt => {
                if self.sculpt.apply(&mut self.heightfield, hit.position) {
                    self.heightfield.recompute_normals();
                }
            }
            Tool::Paint => {
                self.paint.apply(&mut self.heightfield, hit.position);
            }
            Tool::Vegetation => self.scatter_vegetation(hit.position, first),
            Tool::Road => {
                // road points are placed on click, not while dragging
                if first {
                    self.road.add_point(hit.position);
                }
            }
        }
    }

    /// Drop one instance at the surface point with randomized yaw and
    /// height scale. Drag placement is density-throttled so a slow drag
    /// does not carpet the terrain.
    fn scatter_vegetation(&mut self, point: Vec3, first: bool) {
        let mut rng = rand::rng();
        if !first && rng.random::<f32>() <= 0.8 {
            return;
        }
        let scale = Vec3::new(1.0, 1.0 + rng.random::<f32>(), 1.0);
        let rotation = Vec3::new(0.0, rng.random_range(0.0..PI * 2.0), 0.0);
        self.instances.place(self.vegetation_category, point, scale, rotation);
    }

    /// Place a single instance directly (UI "add" intent, no stroke)
    pub fn place_instance(&mut self, category: Category, position: Vec3, scale: Vec3, rotation: Vec3) -> bool {
        self.instances.place(category, position, scale, rotation)
    }

    /// Undo intent; returns whether anything changed
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.heightfield, &mut self.instances) {
            Ok(()) => {
                log::info!("undo to snapshot {}", self.history.cursor());
                true
            }
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// Redo intent; returns whether anything changed
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.heightfield, &mut self.instances) {
            Ok(()) => {
                log::info!("redo to snapshot {}", self.history.cursor());
                true
            }
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// Snapshot the session into a serializable project document
    pub fn save_document(&self) -> ProjectDocument {
        project::build_document(
            &self.heightfield,
            &self.instances,
            &self.environment,
            &self.water,
            &self.road,
        )
    }

    /// Apply a project document onto the session
    pub fn load_document(&mut self, doc: &ProjectDocument) -> Result<()> {
        project::apply_document(
            doc,
            &mut self.heightfield,
            &mut self.instances,
            &mut self.environment,
            &mut self.water,
            &mut self.road,
        )
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        project::save_to_file(&self.save_document(), path)
    }

    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let doc = project::load_from_file(path)?;
        self.load_document(&doc)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
