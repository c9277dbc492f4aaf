//! Request normalization and tier selection
//!
//! The dispatch policy is the one piece of decision logic the gateway owns:
//! clamp the requested parameters into the range the executors accept, then
//! classify the request by total pixel count to pick a hardware tier.

use serde::{Deserialize, Serialize};

/// Minimum accepted output dimension, in pixels.
pub const MIN_DIMENSION: u32 = 256;
/// Maximum accepted output dimension, in pixels.
pub const MAX_DIMENSION: u32 = 2048;
/// Output dimensions are floored to a multiple of this.
pub const DIMENSION_ALIGN: u32 = 8;
/// Minimum number of inference steps.
pub const MIN_STEPS: u32 = 1;
/// Maximum number of inference steps.
pub const MAX_STEPS: u32 = 20;
/// Pixel-count boundary between the small and large tier (1024 * 1024).
pub const PIXEL_THRESHOLD: u64 = 1024 * 1024;

/// Hardware tier an incoming request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Lower-capacity accelerator, outputs at or below [`PIXEL_THRESHOLD`]
    Small,
    /// Higher-capacity accelerator, outputs above [`PIXEL_THRESHOLD`]
    Large,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Small => "small",
            Tier::Large => "large",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully normalized generation job, ready to hand to an executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateJob {
    /// The prompt, passed through unvalidated (empty text is permitted)
    pub prompt: String,

    /// Output width, clamped and aligned
    pub width: u32,

    /// Output height, clamped and aligned
    pub height: u32,

    /// Number of inference steps, clamped
    pub steps: u32,
}

impl GenerateJob {
    /// Build a job from raw request parameters, enforcing the dispatch
    /// invariants: width and height clamped to the `MIN_DIMENSION..=MAX_DIMENSION`
    /// range and floored to a multiple of [`DIMENSION_ALIGN`], steps clamped
    /// to `MIN_STEPS..=MAX_STEPS`.
    ///
    /// Clamp happens before the floor: a width of 2044 clamps to itself and
    /// then floors to 2040. Inputs arrive as signed integers so that
    /// out-of-range values, negative ones included, are silently corrected
    /// rather than rejected.
    pub fn normalize(prompt: String, width: i64, height: i64, steps: i64) -> Self {
        Self {
            prompt,
            width: normalize_dimension(width),
            height: normalize_dimension(height),
            steps: steps.clamp(i64::from(MIN_STEPS), i64::from(MAX_STEPS)) as u32,
        }
    }

    /// Total output pixel count
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Select the hardware tier for this job. A total at exactly the
    /// threshold stays on the small tier.
    pub fn tier(&self) -> Tier {
        if self.total_pixels() <= PIXEL_THRESHOLD {
            Tier::Small
        } else {
            Tier::Large
        }
    }
}

// Clamp first, then floor to the alignment. The clamp range bounds are both
// multiples of 8, so the result stays in range.
fn normalize_dimension(dim: i64) -> u32 {
    let clamped = dim.clamp(i64::from(MIN_DIMENSION), i64::from(MAX_DIMENSION)) as u32;
    (clamped / DIMENSION_ALIGN) * DIMENSION_ALIGN
}
