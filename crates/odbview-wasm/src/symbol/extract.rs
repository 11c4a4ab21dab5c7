//! Generic field extraction shared by the grammar entries.
//!
//! A pattern that does not match yields `Ok(None)`. A pattern that matches but
//! captures a literal that does not convert yields an error.

use regex::{Captures, Match, Regex};

use crate::error::SymbolError;

use super::types::Corners;

/// Capture groups of a descriptor that matched a grammar pattern.
#[derive(Debug)]
pub struct Fields<'h> {
    captures: Captures<'h>,
    descriptor: &'h str,
}

/// Match `descriptor` against `pattern`.
///
/// Patterns are anchored at both ends, so a match always covers the whole
/// descriptor.
pub fn capture<'h>(pattern: &Regex, descriptor: &'h str) -> Option<Fields<'h>> {
    pattern
        .captures(descriptor)
        .map(|captures| Fields { captures, descriptor })
}

impl<'h> Fields<'h> {
    fn required(&self, index: usize) -> Result<&'h str, SymbolError> {
        self.captures
            .get(index)
            .as_ref()
            .map(Match::as_str)
            .ok_or_else(|| SymbolError::MissingField {
                index,
                descriptor: self.descriptor.to_string(),
            })
    }

    fn invalid(&self, literal: &str) -> SymbolError {
        SymbolError::InvalidNumericLiteral {
            literal: literal.to_string(),
            descriptor: self.descriptor.to_string(),
        }
    }

    /// Read capture group `index` as a dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] when the captured text is
    /// not a float literal, e.g. `1.2.3` or a lone `.`.
    pub fn float(&self, index: usize) -> Result<f64, SymbolError> {
        let raw = self.required(index)?;
        raw.parse::<f64>().map_err(|_| self.invalid(raw))
    }

    /// Read capture group `index` as a count.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidNumericLiteral`] when the captured text
    /// does not fit a `u32`.
    pub fn count(&self, index: usize) -> Result<u32, SymbolError> {
        let raw = self.required(index)?;
        raw.parse::<u32>().map_err(|_| self.invalid(raw))
    }

    /// Read optional capture group `index` as a corner selector.
    ///
    /// An absent group selects all four corners.
    pub fn corners(&self, index: usize) -> Corners {
        let raw = self
            .captures
            .get(index)
            .as_ref()
            .map_or(Corners::DEFAULT_SUFFIX, Match::as_str);
        let corners = Corners::from_digits(raw);
        tracing::trace!(
            descriptor = self.descriptor,
            suffix = raw,
            corners = ?corners.as_slice(),
            "parsed corner selector"
        );
        corners
    }

    /// Read capture groups `1..=N` as dimensions.
    ///
    /// # Errors
    ///
    /// Propagates the first conversion failure.
    pub fn floats<const N: usize>(&self) -> Result<[f64; N], SymbolError> {
        let mut values = [0.0; N];
        for (index, slot) in values.iter_mut().enumerate() {
            *slot = self.float(index + 1)?;
        }
        Ok(values)
    }
}

/// Parse a descriptor whose `N` capture groups are all dimensions.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidNumericLiteral`] when the pattern matched but
/// a captured literal is not a valid float.
pub fn all_float<const N: usize, T>(
    pattern: &Regex,
    descriptor: &str,
    build: fn([f64; N]) -> T,
) -> Result<Option<T>, SymbolError> {
    let Some(fields) = capture(pattern, descriptor) else {
        return Ok(None);
    };
    Ok(Some(build(fields.floats()?)))
}

/// Parse a descriptor with `N` dimension groups followed by one optional
/// corner-selector group.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidNumericLiteral`] when the pattern matched but
/// a captured dimension is not a valid float.
pub fn all_float_with_corners<const N: usize, T>(
    pattern: &Regex,
    descriptor: &str,
    build: fn([f64; N], Corners) -> T,
) -> Result<Option<T>, SymbolError> {
    let Some(fields) = capture(pattern, descriptor) else {
        return Ok(None);
    };
    let values = fields.floats()?;
    let corners = fields.corners(N + 1);
    Ok(Some(build(values, corners)))
}

/// Parse a descriptor whose groups mix dimensions, counts and corners.
///
/// # Errors
///
/// Propagates whatever `build` reports while reading the matched fields.
pub fn with_fields<T>(
    pattern: &Regex,
    descriptor: &str,
    build: impl FnOnce(&Fields<'_>) -> Result<T, SymbolError>,
) -> Result<Option<T>, SymbolError> {
    capture(pattern, descriptor)
        .map(|fields| build(&fields))
        .transpose()
}

#[cfg(test)]
mod tests {
    use lazy_regex::{lazy_regex, Lazy};

    use super::*;

    static PAIR: Lazy<Regex> = lazy_regex!(r"^p([.0-9]+)x([.0-9]+)$");
    static PAIR_CORNERS: Lazy<Regex> = lazy_regex!(r"^p([.0-9]+)x([.0-9]+)(x[.0-9]+)?$");
    static SPOKES: Lazy<Regex> = lazy_regex!(r"^k([0-9]+)$");

    #[test]
    fn ut_ext_001_all_float_builds_in_group_order() {
        let result = all_float(&PAIR, "p1.5x2", |[a, b]: [f64; 2]| (a, b));
        assert_eq!(result, Ok(Some((1.5, 2.0))));
    }

    #[test]
    fn ut_ext_002_all_float_no_match_is_none() {
        let result = all_float(&PAIR, "q1x2", |[a, b]: [f64; 2]| (a, b));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn ut_ext_003_all_float_rejects_double_decimal_point() {
        let result = all_float(&PAIR, "p1.2.3x2", |[a, b]: [f64; 2]| (a, b));
        assert_eq!(
            result,
            Err(SymbolError::InvalidNumericLiteral {
                literal: "1.2.3".to_string(),
                descriptor: "p1.2.3x2".to_string(),
            })
        );
    }

    #[test]
    fn ut_ext_004_all_float_accepts_leading_and_trailing_point() {
        let result = all_float(&PAIR, "p.5x3.", |[a, b]: [f64; 2]| (a, b));
        assert_eq!(result, Ok(Some((0.5, 3.0))));
    }

    #[test]
    fn ut_ext_005_corners_default_when_suffix_absent() {
        let result =
            all_float_with_corners(&PAIR_CORNERS, "p1x2", |[a, b]: [f64; 2], c| (a, b, c));
        assert_eq!(result, Ok(Some((1.0, 2.0, Corners::default()))));
    }

    #[test]
    fn ut_ext_006_corners_keep_descriptor_order() {
        let result =
            all_float_with_corners(&PAIR_CORNERS, "p1x2x31", |_: [f64; 2], c| c);
        assert_eq!(result, Ok(Some(Corners::from(vec![3, 1]))));
    }

    #[test]
    fn ut_ext_007_corners_keep_duplicates() {
        let result =
            all_float_with_corners(&PAIR_CORNERS, "p1x2x1122", |_: [f64; 2], c| c);
        assert_eq!(result, Ok(Some(Corners::from(vec![1, 1, 2, 2]))));
    }

    #[test]
    fn ut_ext_008_with_fields_reads_counts() {
        let result = with_fields(&SPOKES, "k12", |fields| fields.count(1));
        assert_eq!(result, Ok(Some(12)));
        let result = with_fields(&SPOKES, "k1.5", |fields| fields.count(1));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn ut_ext_009_corners_skip_points_in_suffix() {
        let result =
            all_float_with_corners(&PAIR_CORNERS, "p1x2x1.3", |_: [f64; 2], c| c);
        assert_eq!(result, Ok(Some(Corners::from(vec![1, 3]))));
    }

    #[test]
    fn bc_ext_001_count_overflow_is_invalid_literal() {
        let fields = capture(&SPOKES, "k99999999999");
        assert!(fields.is_some(), "pattern should match digits");
        if let Some(fields) = fields {
            assert!(matches!(
                fields.count(1),
                Err(SymbolError::InvalidNumericLiteral { .. })
            ));
        }
    }

    #[test]
    fn bc_ext_002_missing_group_is_reported() {
        let fields = capture(&SPOKES, "k4");
        assert!(fields.is_some());
        if let Some(fields) = fields {
            assert_eq!(fields.count(1), Ok(4));
            assert_eq!(
                fields.float(2),
                Err(SymbolError::MissingField {
                    index: 2,
                    descriptor: "k4".to_string(),
                })
            );
        }
    }
}
