//! Overlay boxes on randomly sampled frames for manual inspection.
//!
//! Frame storage and display are injected through [`FrameSource`] and
//! [`FrameSink`], and randomness through any [`rand::Rng`], so the sampling
//! and drawing can run without touching the file system.

use crate::error::{EvalError, Result};
use crate::types::BoundingBox;
use image::{Rgba, RgbaImage};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Supplies the image for a frame index.
pub trait FrameSource {
    fn load_frame(&self, index: u32) -> Result<RgbaImage>;
}

/// Receives each annotated frame, in draw order.
pub trait FrameSink {
    fn show(&mut self, index: u32, frame: RgbaImage) -> Result<()>;
}

/// Collects annotated frames in memory.
impl FrameSink for Vec<(u32, RgbaImage)> {
    fn show(&mut self, index: u32, frame: RgbaImage) -> Result<()> {
        self.push((index, frame));
        Ok(())
    }
}

/// Reads frames named `output001.jpg`, `output002.jpg`, ... from a directory.
/// Frame index `i` maps to file number `i + 1`.
#[derive(Debug, Clone)]
pub struct DirectoryFrames {
    dir: PathBuf,
}

impl DirectoryFrames {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("output{:03}.jpg", u64::from(index) + 1))
    }
}

impl FrameSource for DirectoryFrames {
    fn load_frame(&self, index: u32) -> Result<RgbaImage> {
        let path = self.frame_path(index);
        trace!(path = %path.display(), "loading frame");
        Ok(image::open(path)?.to_rgba8())
    }
}

/// Writes each annotated frame as a PNG into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: usize,
}

impl DirectorySink {
    /// Create the sink, creating `dir` if it does not exist.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for DirectorySink {
    fn show(&mut self, index: u32, frame: RgbaImage) -> Result<()> {
        // Sampling is with replacement, so the draw ordinal keeps names unique.
        let path = self
            .dir
            .join(format!("sample{:02}_output{:03}.png", self.written, u64::from(index) + 1));
        frame.save(&path)?;
        self.written += 1;
        Ok(())
    }
}

/// Drawing settings for [`visualize_random_frames`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizeOptions {
    /// Number of draws, with replacement, from the frame map.
    pub frames_to_show: usize,
    /// Outline thickness in pixels, drawn inward from the box edges.
    pub outline_width: u32,
    /// Outline color as RGBA.
    pub color: [u8; 4],
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            frames_to_show: 4,
            outline_width: 6,
            color: [0, 128, 0, 255],
        }
    }
}

/// Sample frames at random and overlay their boxes.
///
/// Draws `options.frames_to_show` entries from `boxes` with replacement. For
/// each draw the frame is loaded from `source`, every box is outlined, and the
/// result goes to `sink`. Returns the sampled frame indices in draw order.
///
/// # Errors
///
/// Returns [`EvalError::DegenerateInput`] if `boxes` is empty, and propagates
/// any error from `source` or `sink`.
pub fn visualize_random_frames<S, K, R>(
    source: &S,
    boxes: &BTreeMap<u32, Vec<BoundingBox>>,
    options: &VisualizeOptions,
    rng: &mut R,
    sink: &mut K,
) -> Result<Vec<u32>>
where
    S: FrameSource + ?Sized,
    K: FrameSink + ?Sized,
    R: Rng,
{
    if boxes.is_empty() {
        return Err(EvalError::DegenerateInput(
            "no frames to sample from".to_string(),
        ));
    }

    let entries: Vec<(&u32, &Vec<BoundingBox>)> = boxes.iter().collect();
    let color = Rgba(options.color);
    let mut shown = Vec::with_capacity(options.frames_to_show);

    for _ in 0..options.frames_to_show {
        let (&index, frame_boxes) = entries[rng.gen_range(0..entries.len())];
        let mut frame = source.load_frame(index)?;
        for bbox in frame_boxes {
            draw_box(&mut frame, bbox, color, options.outline_width);
        }
        debug!(index, boxes = frame_boxes.len(), "showing annotated frame");
        sink.show(index, frame)?;
        shown.push(index);
    }

    Ok(shown)
}

/// Outline `bbox` on `img`, rounding to pixels and clipping to the image.
/// Boxes lying entirely outside the image are skipped.
pub fn draw_box(img: &mut RgbaImage, bbox: &BoundingBox, color: Rgba<u8>, thickness: u32) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let (max_x, max_y) = (f64::from(w - 1), f64::from(h - 1));
    if bbox.xbr() < 0.0 || bbox.ybr() < 0.0 || bbox.xtl() > max_x || bbox.ytl() > max_y {
        trace!(?bbox, "box outside frame");
        return;
    }

    let px = |v: f64, max: f64| v.round().clamp(0.0, max) as u32;
    draw_rect(
        img,
        [
            px(bbox.xtl(), max_x),
            px(bbox.ytl(), max_y),
            px(bbox.xbr(), max_x),
            px(bbox.ybr(), max_y),
        ],
        color,
        thickness,
    );
}

/// Draw a rectangle border with given thickness.
fn draw_rect(img: &mut RgbaImage, bbox_px: [u32; 4], color: Rgba<u8>, thickness: u32) {
    let [x0, y0, x1, y1] = bbox_px;
    for t in 0..thickness {
        let xx0 = x0.saturating_add(t);
        let yy0 = y0.saturating_add(t);
        let xx1 = x1.saturating_sub(t);
        let yy1 = y1.saturating_sub(t);
        if xx0 > xx1 || yy0 > yy1 {
            break;
        }
        for x in xx0..=xx1 {
            img.put_pixel(x, yy0, color);
            img.put_pixel(x, yy1, color);
        }
        for y in yy0..=yy1 {
            img.put_pixel(xx0, y, color);
            img.put_pixel(xx1, y, color);
        }
    }
}
