//! Noise-based initial terrain shaping
//!
//! Runs once at startup to give the editor something better than a flat
//! plane. Everything after that is brush-driven.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::heightfield::Heightfield;

/// Parameters controlling initial terrain generation
#[derive(Clone, Debug)]
pub struct GeneratorParams {
    pub seed: u32,
    /// Horizontal feature scale in world units (larger = smoother)
    pub scale: f32,
    /// Vertical amplitude in world units
    pub height_scale: f32,
    pub octaves: u32,
    pub persistence: f32,
    pub lacunarity: f32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 40.0,
            height_scale: 3.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Write an FBM elevation into every vertex of the heightfield and
/// recompute normals. Deterministic for a fixed seed.
pub fn generate(heightfield: &mut Heightfield, params: &GeneratorParams) {
    let fbm = Fbm::<Perlin>::new(params.seed)
        .set_octaves(params.octaves as usize)
        .set_persistence(params.persistence as f64)
        .set_lacunarity(params.lacunarity as f64);

    let inv_scale = 1.0 / params.scale as f64;
    for index in 0..heightfield.vertex_count() {
        let p = heightfield.position(index);
        let sample = fbm.get([p.x as f64 * inv_scale, p.z as f64 * inv_scale]);
        heightfield.set_vertex_height(index, sample as f32 * params.height_scale);
    }

    heightfield.recompute_normals();
    log::info!(
        "generated terrain: {} vertices, seed {}, amplitude {}",
        heightfield.vertex_count(),
        params.seed,
        params.height_scale
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let params = GeneratorParams::default();
        let mut a = Heightfield::new(50.0, 50.0, 20);
        let mut b = Heightfield::new(50.0, 50.0, 20);
        generate(&mut a, &params);
        generate(&mut b, &params);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_seed_changes_output() {
        let mut a = Heightfield::new(50.0, 50.0, 20);
        let mut b = Heightfield::new(50.0, 50.0, 20);
        generate(&mut a, &GeneratorParams::default());
        generate(&mut b, &GeneratorParams { seed: 999, ..Default::default() });
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn test_amplitude_bounded() {
        let params = GeneratorParams::default();
        let mut hf = Heightfield::new(200.0, 200.0, 40);
        generate(&mut hf, &params);
        for p in hf.positions() {
            // FBM stays well inside +/- 2x the amplitude
            assert!(p.y.abs() <= params.height_scale * 2.0);
        }
    }

    #[test]
    fn test_preserves_grid_coordinates() {
        let mut hf = Heightfield::new(50.0, 50.0, 10);
        let xz: Vec<(f32, f32)> = hf.positions().iter().map(|p| (p.x, p.z)).collect();
        generate(&mut hf, &GeneratorParams::default());
        let after: Vec<(f32, f32)> = hf.positions().iter().map(|p| (p.x, p.z)).collect();
        assert_eq!(xz, after);
    }
}
