use std::fmt::Display;

/// Color triple on the reflectance scale. Values may exceed 1; clamping is
/// left to the rendering host.
pub type Rgb = [f64; 3];

/// Water detected at date1 but not at date2.
pub const RECEDED_COLOR: Rgb = [1.0, 0.0, 0.0];
/// Water detected at date2 but not at date1.
pub const EXPANDED_COLOR: Rgb = [0.0, 0.0, 1.0];
/// Water detected at both dates.
pub const PERSISTENT_COLOR: Rgb = [0.44, 0.54, 1.0];

// Water labels are 0 or 1; comparing their difference against a tolerance
// keeps the branch robust should fractional labels ever appear.
const LABEL_TOLERANCE: f64 = 0.1;

/// Direction of surface water change between the two acquisitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Receded,
    Expanded,
    PersistentWater,
    Land,
}

impl Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeCategory::Receded => write!(f, "receded water body"),
            ChangeCategory::Expanded => write!(f, "expanded water body"),
            ChangeCategory::PersistentWater => write!(f, "persistent water"),
            ChangeCategory::Land => write!(f, "land"),
        }
    }
}

/// Change category and display color for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelChange {
    pub category: ChangeCategory,
    pub color: Rgb,
}

/// Combines the water labels of both dates into a change category with its
/// display color.
///
/// Land pixels fall through to the date2 scene as brightened true color;
/// the doubling is intentional and the result is not clamped.
pub fn compose_change(water1: f64, water2: f64, true_color: Rgb) -> PixelChange {
    let diff = water1 - water2;

    if diff > LABEL_TOLERANCE {
        PixelChange {
            category: ChangeCategory::Receded,
            color: RECEDED_COLOR,
        }
    } else if diff < -LABEL_TOLERANCE {
        PixelChange {
            category: ChangeCategory::Expanded,
            color: EXPANDED_COLOR,
        }
    } else if water1 >= LABEL_TOLERANCE {
        PixelChange {
            category: ChangeCategory::PersistentWater,
            color: PERSISTENT_COLOR,
        }
    } else {
        let [r, g, b] = true_color;
        PixelChange {
            category: ChangeCategory::Land,
            color: [2.0 * r, 2.0 * g, 2.0 * b],
        }
    }
}
