//! Typed records for ODB++ standard symbols.
//!
//! Every record is an immutable value. Dimensions are unit-less `f64`; the
//! surrounding design file decides whether they are mils or microns.

use serde::Serialize;

/// Corner indices of a rectangle or square that receive rounding.
///
/// Corners are numbered 1 to 4. The sequence holds the suffix digits as
/// written: order and duplicates are kept and nothing is range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Corners(Vec<u8>);

impl Corners {
    /// Literal used when a descriptor omits its corner suffix.
    pub const DEFAULT_SUFFIX: &'static str = "1234";

    /// Collects every ASCII digit of `raw`, left to right.
    pub fn from_digits(raw: &str) -> Self {
        Self(
            raw.bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }

    /// Corner indices in descriptor order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::from_digits(Self::DEFAULT_SUFFIX)
    }
}

impl From<Vec<u8>> for Corners {
    fn from(corners: Vec<u8>) -> Self {
        Self(corners)
    }
}

// -- Basic shapes --

/// Round pad, `r<d>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Round {
    /// Circle diameter.
    pub diameter: f64,
}

/// Square pad, `s<s>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    /// Side length.
    pub side: f64,
}

/// Rectangle, `r<w>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Width along X.
    pub width: f64,
    /// Height along Y.
    pub height: f64,
}

/// Oval (obround), `oval<w>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oval {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
}

/// Diamond, `di<w>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diamond {
    /// Width between the left and right vertices.
    pub width: f64,
    /// Height between the top and bottom vertices.
    pub height: f64,
}

/// Octagon, `oct<w>x<h>x<r>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Octagon {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
    /// Length of the cut corner.
    pub corner_size: f64,
}

/// Ellipse, `el<w>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    /// Horizontal axis.
    pub width: f64,
    /// Vertical axis.
    pub height: f64,
}

/// Horizontal hexagon, `hex_l<w>x<h>x<r>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalHexagon {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
    /// Horizontal size of the pointed corners.
    pub corner_size: f64,
}

/// Vertical hexagon, `hex_s<w>x<h>x<r>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalHexagon {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
    /// Vertical size of the pointed corners.
    pub corner_size: f64,
}

/// Round butterfly, `bfr<d>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Butterfly {
    /// Diameter.
    pub diameter: f64,
}

/// Square butterfly, `bfs<s>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareButterfly {
    /// Side length.
    pub size: f64,
}

/// Triangle, `tri<base>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    /// Base length.
    pub base: f64,
    /// Height.
    pub height: f64,
}

/// Half oval, `oval_h<w>x<h>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HalfOval {
    /// Overall width.
    pub width: f64,
    /// Overall height.
    pub height: f64,
}

// -- Donuts --

/// Round donut, `donut_r<od>x<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundDonut {
    /// Outer diameter.
    pub outer_diameter: f64,
    /// Inner diameter.
    pub inner_diameter: f64,
}

/// Square donut, `donut_s<od>x<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareDonut {
    /// Outer side length.
    pub outer_diameter: f64,
    /// Inner side length.
    pub inner_diameter: f64,
}

/// Square outside, round inside, `donut_sr<od>x<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareRoundDonut {
    /// Outer side length.
    pub outer_diameter: f64,
    /// Inner diameter.
    pub inner_diameter: f64,
}

/// Square donut with rounded corners, `donut_s<od>x<id>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedSquareDonut {
    /// Outer side length.
    pub outer_diameter: f64,
    /// Inner side length.
    pub inner_diameter: f64,
    /// Rounding radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Rectangle donut, `donut_rc<ow>x<oh>x<lw>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleDonut {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Ring line width.
    pub line_width: f64,
}

/// Rectangle donut with rounded corners, `donut_rc<ow>x<oh>x<lw>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedRectangleDonut {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Ring line width.
    pub line_width: f64,
    /// Rounding radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Oval donut, `donut_o<ow>x<oh>x<lw>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvalDonut {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Ring line width.
    pub line_width: f64,
}

// -- Thermals --

/// Round thermal with rounded spoke ends, `thr<od>x<id>x<angle>x<spokes>x<gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundThermalRounded {
    /// Outer diameter.
    pub outer_diameter: f64,
    /// Inner diameter.
    pub inner_diameter: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
}

/// Round thermal with square spoke ends, `ths<od>x<id>x<angle>x<spokes>x<gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundThermalSquared {
    /// Outer diameter.
    pub outer_diameter: f64,
    /// Inner diameter.
    pub inner_diameter: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
}

/// Square thermal, `s_ths<os>x<is>x<angle>x<spokes>x<gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareThermal {
    /// Outer side length.
    pub outer_size: f64,
    /// Inner side length.
    pub inner_size: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
}

/// Square thermal with open corners, `s_tho<od>x<id>x<angle>x<spokes>x<gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareThermalOpenCorners {
    /// Outer side length.
    pub outer_diameter: f64,
    /// Inner side length.
    pub inner_diameter: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
}

/// Square outside, round inside thermal, `sr_ths<os>x<id>x<angle>x<spokes>x<gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareRoundThermal {
    /// Outer side length.
    pub outer_size: f64,
    /// Inner diameter.
    pub inner_diameter: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
}

/// Rectangular thermal, `rc_ths<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangularThermal {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Width of the air ring.
    pub air_gap: f64,
}

/// Rectangular thermal with open corners, `rc_tho<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangularThermalOpenCorners {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Width of the air ring.
    pub air_gap: f64,
}

/// Rounded square thermal, `s_ths<os>x<is>x<angle>x<spokes>x<gap>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedSquareThermal {
    /// Outer side length.
    pub outer_size: f64,
    /// Inner side length.
    pub inner_size: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Rounding radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Rounded square thermal with open corners, `s_tho<od>x<id>x<angle>x<spokes>x<gap>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedSquareThermalOpenCorners {
    /// Outer side length.
    pub outer_diameter: f64,
    /// Inner side length.
    pub inner_diameter: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Rounding radius.
    pub rad: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Rounded rectangle thermal,
/// `rc_ths<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedRectangleThermal {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Width of the air ring.
    pub air_gap: f64,
    /// Rounding radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Rounded rectangle thermal with open corners,
/// `rc_tho<w>x<h>x<angle>x<spokes>x<gap>x<air_gap>xr<rad>[x<corners>]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedRectangleThermalOpenCorners {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Width of the air ring.
    pub air_gap: f64,
    /// Rounding radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
}

/// Oval thermal, `o_ths<ow>x<oh>x<angle>x<spokes>x<gap>x<lw>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvalThermal {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Ring line width.
    pub line_width: f64,
}

/// Oval thermal with open corners, `o_tho<ow>x<oh>x<angle>x<spokes>x<gap>x<lw>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvalThermalOpenCorners {
    /// Outer width.
    pub outer_width: f64,
    /// Outer height.
    pub outer_height: f64,
    /// Angle of the first spoke in degrees.
    pub angle: f64,
    /// Number of spokes.
    pub num_spokes: u32,
    /// Spoke gap.
    pub gap: f64,
    /// Ring line width.
    pub line_width: f64,
}

// -- Misc --

/// Moire target, `moire<rw>x<rg>x<nr>x<lw>x<ll>x<la>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moire {
    /// Ring line width.
    pub ring_width: f64,
    /// Gap between rings.
    pub ring_gap: f64,
    /// Number of rings.
    pub num_rings: u32,
    /// Crosshair line width.
    pub line_width: f64,
    /// Crosshair line length.
    pub line_length: f64,
    /// Crosshair rotation in degrees.
    pub line_angle: f64,
}

macro_rules! symbol_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// A parsed standard symbol, tagged by its kind.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "kind")]
        pub enum Symbol {
            $(
                #[allow(missing_docs)]
                $kind($kind),
            )+
        }

        /// Name of a standard symbol kind, without its payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum SymbolKind {
            $(
                #[allow(missing_docs)]
                $kind,
            )+
        }

        impl SymbolKind {
            /// Stable kind name, as used in the serialized `kind` tag.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)+
                }
            }
        }

        impl Symbol {
            /// Kind of this symbol.
            pub const fn kind(&self) -> SymbolKind {
                match self {
                    $(Self::$kind(_) => SymbolKind::$kind,)+
                }
            }
        }

        $(
            impl From<$kind> for Symbol {
                fn from(record: $kind) -> Self {
                    Self::$kind(record)
                }
            }
        )+
    };
}

symbol_kinds!(
    Round,
    Square,
    Rectangle,
    Oval,
    Diamond,
    Octagon,
    Ellipse,
    HorizontalHexagon,
    VerticalHexagon,
    Butterfly,
    SquareButterfly,
    Triangle,
    HalfOval,
    RoundDonut,
    SquareDonut,
    SquareRoundDonut,
    RoundedSquareDonut,
    RectangleDonut,
    RoundedRectangleDonut,
    OvalDonut,
    RoundThermalRounded,
    RoundThermalSquared,
    SquareThermal,
    SquareThermalOpenCorners,
    SquareRoundThermal,
    RectangularThermal,
    RectangularThermalOpenCorners,
    RoundedSquareThermal,
    RoundedSquareThermalOpenCorners,
    RoundedRectangleThermal,
    RoundedRectangleThermalOpenCorners,
    OvalThermal,
    OvalThermalOpenCorners,
    Moire,
);

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_typ_001_default_corners_are_all_four_ascending() {
        assert_eq!(Corners::default().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn ut_typ_002_corners_keep_order_and_duplicates() {
        let corners = Corners::from_digits("x3113");
        assert_eq!(corners.as_slice(), &[3, 1, 1, 3]);
    }

    #[test]
    fn ut_typ_003_corners_skip_non_digits() {
        assert_eq!(Corners::from_digits("x.2").as_slice(), &[2]);
        assert!(Corners::from_digits("x").as_slice().is_empty());
    }

    #[test]
    fn ut_typ_004_symbol_kind_matches_variant() {
        let symbol = Symbol::from(Round { diameter: 2.5 });
        assert_eq!(symbol.kind(), SymbolKind::Round);
        assert_eq!(symbol.kind().name(), "Round");
        assert_eq!(SymbolKind::RoundedSquareDonut.to_string(), "RoundedSquareDonut");
    }

    #[test]
    fn ut_typ_005_records_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
        assert_send_sync::<Corners>();
    }
}
