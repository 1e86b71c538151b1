//! Core data types for paired box evaluation.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted box area. Two such areas still sum to a finite union.
pub const MAX_AREA: f64 = f64::MAX / 2.0;

/// An axis-aligned bounding box in corner format.
///
/// Coordinates follow image convention (y grows downward):
/// - xtl: Left coordinate
/// - ytl: Top coordinate
/// - xbr: Right coordinate
/// - ybr: Bottom coordinate
///
/// A box always has strictly positive width and height. The fields are private
/// and every constructor (including deserialization) goes through
/// [`BoundingBox::new`], so a value of this type is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBox")]
pub struct BoundingBox {
    xtl: f64,
    ytl: f64,
    xbr: f64,
    ybr: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its top-left and bottom-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidBox`] if any coordinate is not finite, if
    /// `xtl >= xbr` or `ytl >= ybr`, or if the width, height or area is not a
    /// finite positive number no larger than [`MAX_AREA`].
    ///
    /// # Example
    ///
    /// ```
    /// use pairwise_ap::types::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(0.0, 0.0, 2.0, 3.0).unwrap();
    /// assert_eq!(bbox.area(), 6.0);
    /// assert!(BoundingBox::new(2.0, 0.0, 1.0, 1.0).is_err());
    /// ```
    pub fn new(xtl: f64, ytl: f64, xbr: f64, ybr: f64) -> Result<Self> {
        if ![xtl, ytl, xbr, ybr].iter().all(|v| v.is_finite()) {
            return Err(EvalError::InvalidBox(format!(
                "coordinates must be finite, got ({xtl}, {ytl}, {xbr}, {ybr})"
            )));
        }
        if xtl >= xbr {
            return Err(EvalError::InvalidBox(format!(
                "xtl ({xtl}) must be less than xbr ({xbr})"
            )));
        }
        if ytl >= ybr {
            return Err(EvalError::InvalidBox(format!(
                "ytl ({ytl}) must be less than ybr ({ybr})"
            )));
        }
        let bbox = Self { xtl, ytl, xbr, ybr };
        let (width, height, area) = (bbox.width(), bbox.height(), bbox.area());
        // Extents can overflow or underflow even when the corners are ordered.
        if !(width.is_finite() && height.is_finite()) {
            return Err(EvalError::InvalidBox(format!(
                "extent overflows: width {width}, height {height}"
            )));
        }
        if !(area > 0.0 && area <= MAX_AREA) {
            return Err(EvalError::InvalidBox(format!(
                "area {area} of {width} x {height} is outside (0, {MAX_AREA}]"
            )));
        }
        Ok(bbox)
    }

    /// Create a box from COCO `[x, y, width, height]` layout.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(x, y, x + width, y + height)
    }

    /// Convert to COCO `[x, y, width, height]` layout.
    pub fn to_xywh(&self) -> [f64; 4] {
        [self.xtl, self.ytl, self.width(), self.height()]
    }

    /// Left coordinate.
    pub fn xtl(&self) -> f64 {
        self.xtl
    }

    /// Top coordinate.
    pub fn ytl(&self) -> f64 {
        self.ytl
    }

    /// Right coordinate.
    pub fn xbr(&self) -> f64 {
        self.xbr
    }

    /// Bottom coordinate.
    pub fn ybr(&self) -> f64 {
        self.ybr
    }

    pub fn width(&self) -> f64 {
        self.xbr - self.xtl
    }

    pub fn height(&self) -> f64 {
        self.ybr - self.ytl
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Wire shape accepted when deserializing a [`BoundingBox`]: either a named
/// object or a bare `[xtl, ytl, xbr, ybr]` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBox {
    Named { xtl: f64, ytl: f64, xbr: f64, ybr: f64 },
    Corners([f64; 4]),
}

impl TryFrom<RawBox> for BoundingBox {
    type Error = EvalError;

    fn try_from(raw: RawBox) -> Result<Self> {
        match raw {
            RawBox::Named { xtl, ytl, xbr, ybr } => Self::new(xtl, ytl, xbr, ybr),
            RawBox::Corners([xtl, ytl, xbr, ybr]) => Self::new(xtl, ytl, xbr, ybr),
        }
    }
}

/// A pre-paired ground-truth/prediction sequence, where `ground_truths[i]`
/// is matched against `predictions[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairedBoxes {
    pub ground_truths: Vec<BoundingBox>,
    pub predictions: Vec<BoundingBox>,
}

/// One point on the precision-recall curve of a match sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionRecallPoint {
    /// 1-indexed prefix length this point describes.
    pub rank: usize,
    pub precision: f64,
    pub recall: f64,
}
