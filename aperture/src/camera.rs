//! Camera descriptors and the registry of cameras competing for each focal length

use crate::error::ApertureError;
use crate::geometry::{crop_factor, equivalent_aperture};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Display color of a camera's chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraColor {
    Blue,
    Red,
    Green,
    Magenta,
    Cyan,
    Black,
    Yellow,
}

/// Sensor and lens configuration of a single camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescriptor {
    /// Unique identifier, used as the join key between results and chart series
    pub id: u32,
    /// Display name of the camera
    pub name: String,
    /// Width of the sensor area actually read out, in mm
    pub effective_width_mm: f64,
    /// Height of the sensor area actually read out, in mm
    pub effective_height_mm: f64,
    /// Native f-number of the lens
    pub native_aperture: f64,
    /// Focal length of the lens in mm; shorter focal lengths are out of range for this camera
    pub native_focal_length_mm: f64,
    /// Chart series color
    pub color: CameraColor,
}

impl CameraDescriptor {
    /// Create a new camera descriptor
    pub fn new(
        id: u32,
        name: impl Into<String>,
        effective_width_mm: f64,
        effective_height_mm: f64,
        native_aperture: f64,
        native_focal_length_mm: f64,
        color: CameraColor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            effective_width_mm,
            effective_height_mm,
            native_aperture,
            native_focal_length_mm,
            color,
        }
    }

    /// Check that every physical parameter is positive and finite
    pub fn validate(&self) -> Result<(), ApertureError> {
        let fields = [
            ("effective_width_mm", self.effective_width_mm),
            ("effective_height_mm", self.effective_height_mm),
            ("native_aperture", self.native_aperture),
            ("native_focal_length_mm", self.native_focal_length_mm),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ApertureError::InvalidCamera {
                    id: self.id,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Smallest integer focal length this camera can serve
    pub fn min_focal_length_mm(&self) -> u32 {
        self.native_focal_length_mm.ceil() as u32
    }

    /// Crop factor of this camera when cropped to the target focal length
    pub fn crop_factor_at(&self, target_focal_length_mm: f64) -> f64 {
        crop_factor(
            self.effective_width_mm,
            self.effective_height_mm,
            self.native_focal_length_mm,
            target_focal_length_mm,
        )
    }

    /// Full-frame equivalent f-number at the target focal length
    pub fn equivalent_aperture_at(&self, target_focal_length_mm: f64) -> f64 {
        equivalent_aperture(
            self.native_aperture,
            self.crop_factor_at(target_focal_length_mm),
        )
    }

    /// Legend label: camera id plus effective sensor dimensions.
    ///
    /// Keyed on `id` rather than `name` so the legend matches the CSV `Camera ID` column.
    pub fn label(&self) -> String {
        format!(
            "CMOS {} (Effective Sensor: {}mm x {}mm)",
            self.id, self.effective_width_mm, self.effective_height_mm
        )
    }
}

/// On-disk layout of a camera registry file
#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    cameras: Vec<CameraDescriptor>,
}

/// Ordered, validated collection of cameras.
///
/// Order matters: when two cameras reach exactly the same equivalent
/// aperture at a focal length, the one registered first keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRegistry {
    cameras: Vec<CameraDescriptor>,
}

impl CameraRegistry {
    /// Build a registry, rejecting the whole set if any camera is invalid
    pub fn new(cameras: Vec<CameraDescriptor>) -> Result<Self, ApertureError> {
        if cameras.is_empty() {
            return Err(ApertureError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for camera in &cameras {
            camera.validate()?;
            if !seen.insert(camera.id) {
                return Err(ApertureError::DuplicateCameraId(camera.id));
            }
        }

        Ok(Self { cameras })
    }

    /// The three-camera reference configuration
    pub fn reference() -> Self {
        Self {
            cameras: models::REFERENCE_CAMERAS.clone(),
        }
    }

    /// Cameras in registration order
    pub fn cameras(&self) -> &[CameraDescriptor] {
        &self.cameras
    }

    /// Look up a camera by id
    pub fn get(&self, id: u32) -> Option<&CameraDescriptor> {
        self.cameras.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Always false after `new`; a registry holds at least one camera
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Save as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), ApertureError> {
        let file = RegistryFile {
            cameras: self.cameras.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a registry from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ApertureError> {
        let json = std::fs::read_to_string(path)?;
        let file: RegistryFile = serde_json::from_str(&json)?;
        Self::new(file.cameras)
    }
}

/// Predefined camera models
pub mod models {
    use super::*;

    /// 14mm wide camera reading a 6.4 × 4.8mm area
    pub static CMOS_1: Lazy<CameraDescriptor> = Lazy::new(|| {
        CameraDescriptor::new(1, "CMOS 1", 6.4, 4.8, 2.2, 14.0, CameraColor::Blue)
    });

    /// 23mm main camera reading a 9.18 × 6.88mm area
    pub static CMOS_2: Lazy<CameraDescriptor> = Lazy::new(|| {
        CameraDescriptor::new(2, "CMOS 2", 9.18, 6.88, 1.6, 23.0, CameraColor::Red)
    });

    /// 70mm telephoto camera reading a 6.4 × 4.8mm area
    pub static CMOS_3: Lazy<CameraDescriptor> = Lazy::new(|| {
        CameraDescriptor::new(3, "CMOS 3", 6.4, 4.8, 2.6, 70.0, CameraColor::Green)
    });

    /// Reference registry order
    pub static REFERENCE_CAMERAS: Lazy<Vec<CameraDescriptor>> =
        Lazy::new(|| vec![CMOS_1.clone(), CMOS_2.clone(), CMOS_3.clone()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn test_camera(id: u32) -> CameraDescriptor {
        CameraDescriptor::new(id, format!("Test {id}"), 6.4, 4.8, 2.2, 14.0, CameraColor::Blue)
    }

    #[test]
    fn test_reference_registry_is_valid() {
        let reference = CameraRegistry::reference();
        assert_eq!(reference.len(), 3);

        let validated = CameraRegistry::new(models::REFERENCE_CAMERAS.clone()).unwrap();
        assert_eq!(validated, reference);

        let ids: Vec<u32> = reference.cameras().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        let mut camera = test_camera(7);
        camera.native_focal_length_mm = 0.0;
        match CameraRegistry::new(vec![test_camera(1), camera]) {
            Err(ApertureError::InvalidCamera { id, field, .. }) => {
                assert_eq!(id, 7);
                assert_eq!(field, "native_focal_length_mm");
            }
            other => panic!("expected InvalidCamera, got {other:?}"),
        }

        let mut camera = test_camera(2);
        camera.effective_height_mm = -4.8;
        assert!(matches!(
            camera.validate(),
            Err(ApertureError::InvalidCamera { field: "effective_height_mm", .. })
        ));

        let mut camera = test_camera(3);
        camera.native_aperture = f64::NAN;
        assert!(camera.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids_and_empty() {
        assert!(matches!(
            CameraRegistry::new(vec![test_camera(4), test_camera(4)]),
            Err(ApertureError::DuplicateCameraId(4))
        ));
        assert!(matches!(
            CameraRegistry::new(Vec::new()),
            Err(ApertureError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_min_focal_length_rounds_up() {
        assert_eq!(models::CMOS_1.min_focal_length_mm(), 14);

        let mut camera = test_camera(1);
        camera.native_focal_length_mm = 14.5;
        assert_eq!(camera.min_focal_length_mm(), 15);
    }

    #[test]
    fn test_equivalent_aperture_at_native() {
        assert_relative_eq!(models::CMOS_1.crop_factor_at(14.0), 5.408, epsilon = 1e-3);
        assert_relative_eq!(
            models::CMOS_1.equivalent_aperture_at(14.0),
            11.90,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(
            models::CMOS_2.label(),
            "CMOS 2 (Effective Sensor: 9.18mm x 6.88mm)"
        );

        // Free-form names still produce a legend keyed on the camera id
        let custom =
            CameraDescriptor::new(42, "Full Frame", 36.0, 24.0, 4.0, 70.0, CameraColor::Black);
        assert_eq!(custom.label(), "CMOS 42 (Effective Sensor: 36mm x 24mm)");
    }

    #[test]
    fn test_registry_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cameras.json");

        CameraRegistry::reference().save_to_file(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"color\": \"green\""));

        let loaded = CameraRegistry::load_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        for (got, want) in loaded.cameras().iter().zip(models::REFERENCE_CAMERAS.iter()) {
            assert_eq!(got.id, want.id);
            assert_eq!(got.name, want.name);
            assert_eq!(got.color, want.color);
            assert_relative_eq!(got.effective_width_mm, want.effective_width_mm, epsilon = 1e-12);
            assert_relative_eq!(got.native_aperture, want.native_aperture, epsilon = 1e-12);
            assert_relative_eq!(
                got.native_focal_length_mm,
                want.native_focal_length_mm,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");

        std::fs::write(&path, "{\"cameras\": [").unwrap();
        assert!(matches!(
            CameraRegistry::load_from_file(&path),
            Err(ApertureError::Config(_))
        ));

        std::fs::write(
            &path,
            r#"{"cameras": [{"id": 1, "name": "Bad", "effective_width_mm": 0.0,
                "effective_height_mm": 4.8, "native_aperture": 2.0,
                "native_focal_length_mm": 20.0, "color": "cyan"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            CameraRegistry::load_from_file(&path),
            Err(ApertureError::InvalidCamera { id: 1, .. })
        ));

        assert!(matches!(
            CameraRegistry::load_from_file(&temp_dir.path().join("missing.json")),
            Err(ApertureError::Io(_))
        ));
    }
}
