//! Anchored descriptor patterns and the per-kind `parse` functions.
//!
//! Dimensions are captured as `[.0-9]+` and converted afterwards, so a
//! structurally valid descriptor with a bad literal such as `r1.2.3` is an
//! error rather than a silent miss. Counts are captured as `[0-9]+`. Digit
//! classes are ASCII only, matching what `str::parse` accepts. The corner
//! suffix is `x` followed by digits and points; only its digits are kept.

use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;

use crate::error::SymbolError;

use super::extract::{all_float, all_float_with_corners, with_fields};
use super::types::{
    Butterfly, Corners, Diamond, Ellipse, HalfOval, HorizontalHexagon, Moire, Octagon, Oval,
    OvalDonut, OvalThermal, OvalThermalOpenCorners, RectangleDonut, Rectangle,
    RectangularThermal, RectangularThermalOpenCorners, Round, RoundDonut, RoundThermalRounded,
    RoundThermalSquared, RoundedRectangleDonut, RoundedRectangleThermal,
    RoundedRectangleThermalOpenCorners, RoundedSquareDonut, RoundedSquareThermal,
    RoundedSquareThermalOpenCorners, Square, SquareButterfly, SquareDonut, SquareRoundDonut,
    SquareRoundThermal, SquareThermal, SquareThermalOpenCorners, Triangle, VerticalHexagon,
};

static RE_ROUND: Lazy<Regex> = lazy_regex!(r"^r([.0-9]+)$");
static RE_SQUARE: Lazy<Regex> = lazy_regex!(r"^s([.0-9]+)$");
static RE_RECTANGLE: Lazy<Regex> = lazy_regex!(r"^r([.0-9]+)x([.0-9]+)$");
static RE_OVAL: Lazy<Regex> = lazy_regex!(r"^oval([.0-9]+)x([.0-9]+)$");
static RE_DIAMOND: Lazy<Regex> = lazy_regex!(r"^di([.0-9]+)x([.0-9]+)$");
static RE_OCTAGON: Lazy<Regex> = lazy_regex!(r"^oct([.0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_ELLIPSE: Lazy<Regex> = lazy_regex!(r"^el([.0-9]+)x([.0-9]+)$");
static RE_HORIZONTAL_HEXAGON: Lazy<Regex> = lazy_regex!(r"^hex_l([.0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_VERTICAL_HEXAGON: Lazy<Regex> = lazy_regex!(r"^hex_s([.0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_BUTTERFLY: Lazy<Regex> = lazy_regex!(r"^bfr([.0-9]+)$");
static RE_SQUARE_BUTTERFLY: Lazy<Regex> = lazy_regex!(r"^bfs([.0-9]+)$");
static RE_TRIANGLE: Lazy<Regex> = lazy_regex!(r"^tri([.0-9]+)x([.0-9]+)$");
static RE_HALF_OVAL: Lazy<Regex> = lazy_regex!(r"^oval_h([.0-9]+)x([.0-9]+)$");

static RE_ROUND_DONUT: Lazy<Regex> = lazy_regex!(r"^donut_r([.0-9]+)x([.0-9]+)$");
static RE_SQUARE_DONUT: Lazy<Regex> = lazy_regex!(r"^donut_s([.0-9]+)x([.0-9]+)$");
static RE_SQUARE_ROUND_DONUT: Lazy<Regex> = lazy_regex!(r"^donut_sr([.0-9]+)x([.0-9]+)$");
static RE_ROUNDED_SQUARE_DONUT: Lazy<Regex> =
    lazy_regex!(r"^donut_s([.0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$");
static RE_RECTANGLE_DONUT: Lazy<Regex> = lazy_regex!(r"^donut_rc([.0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_ROUNDED_RECTANGLE_DONUT: Lazy<Regex> =
    lazy_regex!(r"^donut_rc([.0-9]+)x([.0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$");
static RE_OVAL_DONUT: Lazy<Regex> = lazy_regex!(r"^donut_o([.0-9]+)x([.0-9]+)x([.0-9]+)$");

static RE_ROUND_THERMAL_ROUNDED: Lazy<Regex> =
    lazy_regex!(r"^thr([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)$");
static RE_ROUND_THERMAL_SQUARED: Lazy<Regex> =
    lazy_regex!(r"^ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)$");
static RE_SQUARE_THERMAL: Lazy<Regex> =
    lazy_regex!(r"^s_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)$");
static RE_SQUARE_THERMAL_OPEN_CORNERS: Lazy<Regex> =
    lazy_regex!(r"^s_tho([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)$");
static RE_SQUARE_ROUND_THERMAL: Lazy<Regex> =
    lazy_regex!(r"^sr_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)$");
static RE_RECTANGULAR_THERMAL: Lazy<Regex> =
    lazy_regex!(r"^rc_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_RECTANGULAR_THERMAL_OPEN_CORNERS: Lazy<Regex> =
    lazy_regex!(r"^rc_tho([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_ROUNDED_SQUARE_THERMAL: Lazy<Regex> =
    lazy_regex!(r"^s_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$");
static RE_ROUNDED_SQUARE_THERMAL_OPEN_CORNERS: Lazy<Regex> =
    lazy_regex!(r"^s_tho([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$");
static RE_ROUNDED_RECTANGLE_THERMAL: Lazy<Regex> = lazy_regex!(
    r"^rc_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$"
);
static RE_ROUNDED_RECTANGLE_THERMAL_OPEN_CORNERS: Lazy<Regex> = lazy_regex!(
    r"^rc_tho([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)xr([.0-9]+)(x[.0-9]+)?$"
);
static RE_OVAL_THERMAL: Lazy<Regex> =
    lazy_regex!(r"^o_ths([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)$");
static RE_OVAL_THERMAL_OPEN_CORNERS: Lazy<Regex> =
    lazy_regex!(r"^o_tho([.0-9]+)x([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)$");

static RE_MOIRE: Lazy<Regex> =
    lazy_regex!(r"^moire([.0-9]+)x([.0-9]+)x([0-9]+)x([.0-9]+)x([.0-9]+)x([.0-9]+)$");

// -- Basic shapes --

impl Round {
    /// Parse `r<d>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] if the descriptor matches
    /// but its diameter is not a valid number.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_ROUND, descriptor, |[diameter]: [f64; 1]| Self {
            diameter,
        })
    }
}

impl Square {
    /// Parse `s<s>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed side.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_SQUARE, descriptor, |[side]: [f64; 1]| Self { side })
    }
}

impl Rectangle {
    /// Parse `r<w>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_RECTANGLE, descriptor, |[width, height]: [f64; 2]| {
            Self { width, height }
        })
    }
}

impl Oval {
    /// Parse `oval<w>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_OVAL, descriptor, |[width, height]: [f64; 2]| Self {
            width,
            height,
        })
    }
}

impl Diamond {
    /// Parse `di<w>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_DIAMOND, descriptor, |[width, height]: [f64; 2]| Self {
            width,
            height,
        })
    }
}

impl Octagon {
    /// Parse `oct<w>x<h>x<r>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_OCTAGON,
            descriptor,
            |[width, height, corner_size]: [f64; 3]| Self {
                width,
                height,
                corner_size,
            },
        )
    }
}

impl Ellipse {
    /// Parse `el<w>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_ELLIPSE, descriptor, |[width, height]: [f64; 2]| Self {
            width,
            height,
        })
    }
}

impl HorizontalHexagon {
    /// Parse `hex_l<w>x<h>x<r>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_HORIZONTAL_HEXAGON,
            descriptor,
            |[width, height, corner_size]: [f64; 3]| Self {
                width,
                height,
                corner_size,
            },
        )
    }
}

impl VerticalHexagon {
    /// Parse `hex_s<w>x<h>x<r>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_VERTICAL_HEXAGON,
            descriptor,
            |[width, height, corner_size]: [f64; 3]| Self {
                width,
                height,
                corner_size,
            },
        )
    }
}

impl Butterfly {
    /// Parse `bfr<d>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed diameter.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_BUTTERFLY, descriptor, |[diameter]: [f64; 1]| Self {
            diameter,
        })
    }
}

impl SquareButterfly {
    /// Parse `bfs<s>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed size.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_SQUARE_BUTTERFLY, descriptor, |[size]: [f64; 1]| Self {
            size,
        })
    }
}

impl Triangle {
    /// Parse `tri<base>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_TRIANGLE, descriptor, |[base, height]: [f64; 2]| Self {
            base,
            height,
        })
    }
}

impl HalfOval {
    /// Parse `oval_h<w>x<h>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(&RE_HALF_OVAL, descriptor, |[width, height]: [f64; 2]| Self {
            width,
            height,
        })
    }
}

// -- Donuts --

impl RoundDonut {
    /// Parse `donut_r<od>x<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed diameter.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_ROUND_DONUT,
            descriptor,
            |[outer_diameter, inner_diameter]: [f64; 2]| Self {
                outer_diameter,
                inner_diameter,
            },
        )
    }
}

impl SquareDonut {
    /// Parse `donut_s<od>x<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed size.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_SQUARE_DONUT,
            descriptor,
            |[outer_diameter, inner_diameter]: [f64; 2]| Self {
                outer_diameter,
                inner_diameter,
            },
        )
    }
}

impl SquareRoundDonut {
    /// Parse `donut_sr<od>x<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed size.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_SQUARE_ROUND_DONUT,
            descriptor,
            |[outer_diameter, inner_diameter]: [f64; 2]| Self {
                outer_diameter,
                inner_diameter,
            },
        )
    }
}

impl RoundedSquareDonut {
    /// Parse `donut_s<od>x<id>xr<rad>` with an optional `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float_with_corners(
            &RE_ROUNDED_SQUARE_DONUT,
            descriptor,
            |[outer_diameter, inner_diameter, corner_radius]: [f64; 3], corners: Corners| Self {
                outer_diameter,
                inner_diameter,
                corner_radius,
                corners,
            },
        )
    }
}

impl RectangleDonut {
    /// Parse `donut_rc<ow>x<oh>x<lw>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_RECTANGLE_DONUT,
            descriptor,
            |[outer_width, outer_height, line_width]: [f64; 3]| Self {
                outer_width,
                outer_height,
                line_width,
            },
        )
    }
}

impl RoundedRectangleDonut {
    /// Parse `donut_rc<ow>x<oh>x<lw>xr<rad>` with an optional `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float_with_corners(
            &RE_ROUNDED_RECTANGLE_DONUT,
            descriptor,
            |[outer_width, outer_height, line_width, corner_radius]: [f64; 4],
             corners: Corners| Self {
                outer_width,
                outer_height,
                line_width,
                corner_radius,
                corners,
            },
        )
    }
}

impl OvalDonut {
    /// Parse `donut_o<ow>x<oh>x<lw>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        all_float(
            &RE_OVAL_DONUT,
            descriptor,
            |[outer_width, outer_height, line_width]: [f64; 3]| Self {
                outer_width,
                outer_height,
                line_width,
            },
        )
    }
}

// -- Thermals --
//
// Group 4 is always the spoke count.

impl RoundThermalRounded {
    /// Parse `thr<od>x<id>x<angle>x<spokes>x<gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed dimension
    /// or a spoke count that does not fit `u32`.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUND_THERMAL_ROUNDED, descriptor, |f| {
            Ok(Self {
                outer_diameter: f.float(1)?,
                inner_diameter: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
            })
        })
    }
}

impl RoundThermalSquared {
    /// Parse `ths<od>x<id>x<angle>x<spokes>x<gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUND_THERMAL_SQUARED, descriptor, |f| {
            Ok(Self {
                outer_diameter: f.float(1)?,
                inner_diameter: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
            })
        })
    }
}

impl SquareThermal {
    /// Parse `s_ths<os>x<is>x<angle>x<spokes>x<gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_SQUARE_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_size: f.float(1)?,
                inner_size: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
            })
        })
    }
}

impl SquareThermalOpenCorners {
    /// Parse `s_tho<od>x<id>x<angle>x<spokes>x<gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_SQUARE_THERMAL_OPEN_CORNERS, descriptor, |f| {
            Ok(Self {
                outer_diameter: f.float(1)?,
                inner_diameter: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
            })
        })
    }
}

impl SquareRoundThermal {
    /// Parse `sr_ths<os>x<id>x<angle>x<spokes>x<gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_SQUARE_ROUND_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_size: f.float(1)?,
                inner_diameter: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
            })
        })
    }
}

impl RectangularThermal {
    /// Parse `rc_ths<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_RECTANGULAR_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                air_gap: f.float(6)?,
            })
        })
    }
}

impl RectangularThermalOpenCorners {
    /// Parse `rc_tho<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_RECTANGULAR_THERMAL_OPEN_CORNERS, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                air_gap: f.float(6)?,
            })
        })
    }
}

impl RoundedSquareThermal {
    /// Parse `s_ths<os>x<is>x<angle>x<spokes>x<gap>xr<rad>` with an optional
    /// `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUNDED_SQUARE_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_size: f.float(1)?,
                inner_size: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                corner_radius: f.float(6)?,
                corners: f.corners(7),
            })
        })
    }
}

impl RoundedSquareThermalOpenCorners {
    /// Parse `s_tho<od>x<id>x<angle>x<spokes>x<gap>xr<rad>` with an optional
    /// `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUNDED_SQUARE_THERMAL_OPEN_CORNERS, descriptor, |f| {
            Ok(Self {
                outer_diameter: f.float(1)?,
                inner_diameter: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                rad: f.float(6)?,
                corners: f.corners(7),
            })
        })
    }
}

impl RoundedRectangleThermal {
    /// Parse `rc_ths<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>xr<rad>` with an
    /// optional `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUNDED_RECTANGLE_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                air_gap: f.float(6)?,
                corner_radius: f.float(7)?,
                corners: f.corners(8),
            })
        })
    }
}

impl RoundedRectangleThermalOpenCorners {
    /// Parse `rc_tho<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>xr<rad>` with an
    /// optional `x<corners>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_ROUNDED_RECTANGLE_THERMAL_OPEN_CORNERS, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                air_gap: f.float(6)?,
                corner_radius: f.float(7)?,
                corners: f.corners(8),
            })
        })
    }
}

impl OvalThermal {
    /// Parse `o_ths<ow>x<oh>x<angle>x<spokes>x<gap>x<lw>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_OVAL_THERMAL, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                line_width: f.float(6)?,
            })
        })
    }
}

impl OvalThermalOpenCorners {
    /// Parse `o_tho<ow>x<oh>x<angle>x<spokes>x<gap>x<lw>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_OVAL_THERMAL_OPEN_CORNERS, descriptor, |f| {
            Ok(Self {
                outer_width: f.float(1)?,
                outer_height: f.float(2)?,
                angle: f.float(3)?,
                num_spokes: f.count(4)?,
                gap: f.float(5)?,
                line_width: f.float(6)?,
            })
        })
    }
}

// -- Misc --

impl Moire {
    /// Parse `moire<rw>x<rg>x<nr>x<lw>x<ll>x<la>`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] on a malformed field.
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        with_fields(&RE_MOIRE, descriptor, |f| {
            Ok(Self {
                ring_width: f.float(1)?,
                ring_gap: f.float(2)?,
                num_rings: f.count(3)?,
                line_width: f.float(4)?,
                line_length: f.float(5)?,
                line_angle: f.float(6)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_gra_001_round() {
        assert_eq!(Round::parse("r2.5"), Ok(Some(Round { diameter: 2.5 })));
    }

    #[test]
    fn ut_gra_002_square() {
        assert_eq!(Square::parse("s1.0"), Ok(Some(Square { side: 1.0 })));
    }

    #[test]
    fn ut_gra_003_round_does_not_accept_rectangle() {
        assert_eq!(Round::parse("r2x3"), Ok(None));
        assert_eq!(
            Rectangle::parse("r2x3"),
            Ok(Some(Rectangle {
                width: 2.0,
                height: 3.0
            }))
        );
        assert_eq!(Rectangle::parse("r2"), Ok(None));
    }

    #[test]
    fn ut_gra_004_square_donut() {
        assert_eq!(
            SquareDonut::parse("donut_s3x1.5"),
            Ok(Some(SquareDonut {
                outer_diameter: 3.0,
                inner_diameter: 1.5
            }))
        );
    }

    #[test]
    fn ut_gra_005_rounded_square_donut_defaults_corners() {
        let parsed = RoundedSquareDonut::parse("donut_s3x1.5xr0.5");
        assert_eq!(
            parsed,
            Ok(Some(RoundedSquareDonut {
                outer_diameter: 3.0,
                inner_diameter: 1.5,
                corner_radius: 0.5,
                corners: Corners::from(vec![1, 2, 3, 4]),
            }))
        );
    }

    #[test]
    fn ut_gra_006_rounded_square_donut_explicit_corners() {
        let parsed = RoundedSquareDonut::parse("donut_s3x1.5xr0.5x13");
        assert!(matches!(&parsed, Ok(Some(_))), "expected a match: {parsed:?}");
        if let Ok(Some(donut)) = parsed {
            assert_eq!(donut.corners.as_slice(), &[1, 3]);
        }

        let parsed = RoundedSquareDonut::parse("donut_s3x1.5xr0.5x31");
        assert!(matches!(&parsed, Ok(Some(_))), "expected a match: {parsed:?}");
        if let Ok(Some(donut)) = parsed {
            assert_eq!(donut.corners.as_slice(), &[3, 1]);
        }
    }

    #[test]
    fn ut_gra_007_square_donut_rejects_rounded_form() {
        assert_eq!(SquareDonut::parse("donut_s3x1.5xr0.5"), Ok(None));
        assert_eq!(SquareDonut::parse("donut_sr3x1.5"), Ok(None));
    }

    #[test]
    fn ut_gra_008_octagon() {
        assert_eq!(
            Octagon::parse("oct1x1x0.2"),
            Ok(Some(Octagon {
                width: 1.0,
                height: 1.0,
                corner_size: 0.2
            }))
        );
    }

    #[test]
    fn ut_gra_009_round_thermal_reads_spoke_count() {
        assert_eq!(
            RoundThermalRounded::parse("thr60x40x45x4x10"),
            Ok(Some(RoundThermalRounded {
                outer_diameter: 60.0,
                inner_diameter: 40.0,
                angle: 45.0,
                num_spokes: 4,
                gap: 10.0,
            }))
        );
    }

    #[test]
    fn ut_gra_010_thermal_spoke_count_must_be_integer() {
        assert_eq!(RoundThermalSquared::parse("ths60x40x45x4.5x10"), Ok(None));
    }

    #[test]
    fn ut_gra_011_rounded_rectangle_thermal_with_corners() {
        let parsed = RoundedRectangleThermal::parse("rc_ths80x60x0x4x8x6xr5x24");
        assert_eq!(
            parsed,
            Ok(Some(RoundedRectangleThermal {
                outer_width: 80.0,
                outer_height: 60.0,
                angle: 0.0,
                num_spokes: 4,
                gap: 8.0,
                air_gap: 6.0,
                corner_radius: 5.0,
                corners: Corners::from(vec![2, 4]),
            }))
        );
    }

    #[test]
    fn ut_gra_012_moire() {
        assert_eq!(
            Moire::parse("moire5x10x3x2x80x45"),
            Ok(Some(Moire {
                ring_width: 5.0,
                ring_gap: 10.0,
                num_rings: 3,
                line_width: 2.0,
                line_length: 80.0,
                line_angle: 45.0,
            }))
        );
    }

    #[test]
    fn bc_gra_001_non_digit_field_is_no_match() {
        assert_eq!(Round::parse("rABC"), Ok(None));
    }

    #[test]
    fn bc_gra_002_malformed_literal_is_error() {
        assert!(matches!(
            Round::parse("r1.2.3"),
            Err(SymbolError::InvalidNumericLiteral { ref literal, .. }) if literal == "1.2.3"
        ));
        assert!(matches!(
            Round::parse("r."),
            Err(SymbolError::InvalidNumericLiteral { .. })
        ));
    }

    #[test]
    fn bc_gra_003_corner_suffix_keeps_every_digit() {
        let corners_of = |descriptor: &str| {
            RoundedSquareDonut::parse(descriptor).map(|parsed| parsed.map(|donut| donut.corners))
        };
        assert_eq!(
            corners_of("donut_s3x1.5xr0.5x5"),
            Ok(Some(Corners::from(vec![5])))
        );
        assert_eq!(
            corners_of("donut_s3x1.5xr0.5x1.3"),
            Ok(Some(Corners::from(vec![1, 3])))
        );
        assert_eq!(
            corners_of("donut_s3x1.5xr0.5x12341"),
            Ok(Some(Corners::from(vec![1, 2, 3, 4, 1])))
        );
        assert_eq!(corners_of("donut_s3x1.5xr0.5x"), Ok(None));
    }

    #[test]
    fn bc_gra_004_patterns_are_anchored() {
        assert_eq!(Round::parse("xr2.5"), Ok(None));
        assert_eq!(Round::parse("r2.5 "), Ok(None));
        assert_eq!(Oval::parse("oval1x2x3"), Ok(None));
    }

    #[test]
    fn bc_gra_005_non_ascii_digits_are_no_match() {
        assert_eq!(Round::parse("r\u{0663}"), Ok(None));
        assert_eq!(Square::parse("s\u{FF11}"), Ok(None));
        assert_eq!(RoundThermalRounded::parse("thr1x1x1x\u{0664}x1"), Ok(None));
        assert_eq!(
            RoundedSquareDonut::parse("donut_s3x1.5xr0.5x\u{0661}"),
            Ok(None)
        );
    }
}
