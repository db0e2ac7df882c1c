//! Shared brush falloff model

/// Distance-based influence weight of a brush.
///
/// `(1 - d/radius) ^ (hardness*2 + 1)`: 1.0 at the center, 0.0 at the rim.
/// Higher hardness sharpens the curve so the outer band drops off faster.
pub fn falloff(distance: f32, radius: f32, hardness: f32) -> f32 {
    if distance >= radius {
        return 0.0;
    }
    (1.0 - distance / radius).powf(hardness * 2.0 + 1.0)
}
