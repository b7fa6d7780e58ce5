use glam::Vec3;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct HemisphereLight {
    /// Color blended in from below the horizon.
    pub ground_color: Vec3,
}

#[derive(Debug, Clone)]
pub struct DirectionalLight {}

// High-level abstraction: light component in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    /// Sky/ground gradient fill, the usual scene decoration for overlay
    /// content that must read under arbitrary camera feeds.
    Hemisphere(HemisphereLight),
    Directional(DirectionalLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_hemisphere(color: Vec3, ground_color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Hemisphere(HemisphereLight { ground_color }),
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {}),
        }
    }
}
