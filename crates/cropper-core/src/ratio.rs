use std::fmt;
use std::str::FromStr;

use crate::error::{CropperError, Result};

/// Fixed crop aspect ratio, `width:height`.
///
/// Both components are finite and strictly positive, so the ratio can never
/// produce a zero-area or NaN crop window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1.0,
        height: 1.0,
    };

    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(CropperError::InvalidRatio { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width over height.
    pub fn value(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = CropperError;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| CropperError::ParseRatio(s.to_string()))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| CropperError::ParseRatio(s.to_string()))
        };
        AspectRatio::new(parse(w)?, parse(h)?)
    }
}

/// Crop aspect ratio presets offered by front ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CropAspect {
    #[default]
    Square,
    ThreeByFour,
    FourByThree,
    SixteenByNine,
    NineBySixteen,
}

impl CropAspect {
    pub const ALL: &[Self] = &[
        Self::Square,
        Self::ThreeByFour,
        Self::FourByThree,
        Self::SixteenByNine,
        Self::NineBySixteen,
    ];

    pub fn ratio(&self) -> AspectRatio {
        let (width, height) = match self {
            Self::Square => (1.0, 1.0),
            Self::ThreeByFour => (3.0, 4.0),
            Self::FourByThree => (4.0, 3.0),
            Self::SixteenByNine => (16.0, 9.0),
            Self::NineBySixteen => (9.0, 16.0),
        };
        AspectRatio { width, height }
    }
}

impl fmt::Display for CropAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "1:1"),
            Self::ThreeByFour => write!(f, "3:4"),
            Self::FourByThree => write!(f, "4:3"),
            Self::SixteenByNine => write!(f, "16:9"),
            Self::NineBySixteen => write!(f, "9:16"),
        }
    }
}
