//! Best-aperture selection across a focal length sweep.
//!
//! For every integer focal length in a [`FocalLengthDomain`], each camera
//! whose native focal length does not exceed it offers its full-frame
//! equivalent aperture. The smallest f-number wins. Comparisons are strict,
//! so on an exact tie the camera registered first keeps the focal length.
//!
//! # Examples
//!
//! ```rust
//! use aperture::camera::CameraRegistry;
//! use aperture::selector::{select_best_apertures, FocalLengthDomain};
//!
//! let registry = CameraRegistry::reference();
//! let table = select_best_apertures(&registry, &FocalLengthDomain::reference());
//!
//! // Nothing in the reference registry reaches down to 13mm
//! assert!(table.get(13).unwrap().is_unresolved());
//! assert_eq!(table.get(85).unwrap().camera_id(), Some(3));
//! ```

use crate::camera::CameraRegistry;
use crate::error::ApertureError;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Shortest focal length of the reference sweep in mm
pub const DEFAULT_MIN_FOCAL_LENGTH_MM: u32 = 13;

/// Longest focal length of the reference sweep in mm
pub const DEFAULT_MAX_FOCAL_LENGTH_MM: u32 = 200;

/// Longest focal length a domain may reach, in mm
pub const MAX_FOCAL_LENGTH_MM: u32 = 10_000;

/// Inclusive range of integer focal lengths, in mm, with unit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocalLengthDomain {
    min_mm: u32,
    max_mm: u32,
}

impl FocalLengthDomain {
    /// Create a domain covering `min_mm..=max_mm`
    pub fn new(min_mm: u32, max_mm: u32) -> Result<Self, ApertureError> {
        if min_mm == 0 || min_mm > max_mm || max_mm > MAX_FOCAL_LENGTH_MM {
            return Err(ApertureError::InvalidDomain {
                min: min_mm,
                max: max_mm,
            });
        }
        Ok(Self { min_mm, max_mm })
    }

    /// The 13..=200mm reference sweep
    pub fn reference() -> Self {
        Self {
            min_mm: DEFAULT_MIN_FOCAL_LENGTH_MM,
            max_mm: DEFAULT_MAX_FOCAL_LENGTH_MM,
        }
    }

    pub fn min(&self) -> u32 {
        self.min_mm
    }

    pub fn max(&self) -> u32 {
        self.max_mm
    }

    /// Number of focal lengths in the domain
    pub fn len(&self) -> usize {
        (self.max_mm - self.min_mm) as usize + 1
    }

    /// Always false; a domain holds at least one focal length
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, focal_length_mm: u32) -> bool {
        (self.min_mm..=self.max_mm).contains(&focal_length_mm)
    }

    /// Focal lengths in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.min_mm..=self.max_mm
    }

    fn index_of(&self, focal_length_mm: u32) -> Option<usize> {
        self.contains(focal_length_mm)
            .then(|| (focal_length_mm - self.min_mm) as usize)
    }
}

/// Outcome of the selection at one focal length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestAperture {
    /// A camera covers this focal length; `aperture` is the smallest equivalent f-number found
    Resolved { camera_id: u32, aperture: f64 },
    /// No camera reaches this focal length
    Unresolved,
}

impl BestAperture {
    pub fn camera_id(&self) -> Option<u32> {
        match self {
            BestAperture::Resolved { camera_id, .. } => Some(*camera_id),
            BestAperture::Unresolved => None,
        }
    }

    pub fn aperture(&self) -> Option<f64> {
        match self {
            BestAperture::Resolved { aperture, .. } => Some(*aperture),
            BestAperture::Unresolved => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, BestAperture::Unresolved)
    }
}

/// Best camera per focal length over a whole domain
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    domain: FocalLengthDomain,
    records: Vec<BestAperture>,
}

impl ResultsTable {
    /// Table with every focal length unresolved
    pub fn unresolved(domain: FocalLengthDomain) -> Self {
        Self {
            domain,
            records: vec![BestAperture::Unresolved; domain.len()],
        }
    }

    pub fn domain(&self) -> FocalLengthDomain {
        self.domain
    }

    /// Record at a focal length, or None outside the domain
    pub fn get(&self, focal_length_mm: u32) -> Option<&BestAperture> {
        self.domain
            .index_of(focal_length_mm)
            .map(|idx| &self.records[idx])
    }

    /// (focal length, record) pairs in ascending focal length order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &BestAperture)> + '_ {
        self.domain.iter().zip(self.records.iter())
    }

    /// Offer a candidate aperture; it replaces the record only if strictly smaller.
    ///
    /// Returns true if the record changed.
    pub fn offer(&mut self, focal_length_mm: u32, camera_id: u32, aperture: f64) -> bool {
        let Some(idx) = self.domain.index_of(focal_length_mm) else {
            return false;
        };

        let record = &mut self.records[idx];
        let improves = match record {
            BestAperture::Resolved { aperture: best, .. } => aperture < *best,
            BestAperture::Unresolved => aperture < f64::INFINITY,
        };

        if improves {
            *record = BestAperture::Resolved {
                camera_id,
                aperture,
            };
        }
        improves
    }

    /// Number of focal lengths won by each camera id (cameras with no wins are absent)
    pub fn wins_by_camera(&self) -> BTreeMap<u32, usize> {
        let mut wins = BTreeMap::new();
        for camera_id in self.records.iter().filter_map(BestAperture::camera_id) {
            *wins.entry(camera_id).or_insert(0) += 1;
        }
        wins
    }

    /// Focal lengths that no camera covers
    pub fn degenerate_focal_lengths(&self) -> Vec<u32> {
        self.iter()
            .filter(|(_, record)| record.is_unresolved())
            .map(|(focal_length, _)| focal_length)
            .collect()
    }
}

/// Sweep every camera over its valid focal lengths and keep the smallest equivalent aperture
///
/// # Arguments
/// * `registry` - Cameras in tie-break priority order
/// * `domain` - Focal lengths to report on
///
/// # Returns
/// One record per focal length in `domain`
pub fn select_best_apertures(
    registry: &CameraRegistry,
    domain: &FocalLengthDomain,
) -> ResultsTable {
    let mut table = ResultsTable::unresolved(*domain);

    for camera in registry.cameras() {
        let start = camera.min_focal_length_mm().max(domain.min());
        let mut wins = 0usize;

        for focal_length_mm in start..=domain.max() {
            let aperture = camera.equivalent_aperture_at(focal_length_mm as f64);
            if table.offer(focal_length_mm, camera.id, aperture) {
                wins += 1;
            }
        }

        debug!(
            "Camera {} swept {}..={}mm, improved {} focal lengths",
            camera.id,
            start,
            domain.max(),
            wins
        );
    }

    let degenerate = table.degenerate_focal_lengths();
    if !degenerate.is_empty() {
        warn!(
            "{} focal length(s) not covered by any camera: {:?}",
            degenerate.len(),
            degenerate
        );
    }

    table
}
