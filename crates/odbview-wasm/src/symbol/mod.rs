//! ODB++ standard symbol descriptors and the grammar table that parses them.

pub mod extract;
pub mod grammar;
pub mod types;

pub use types::*;

use crate::error::SymbolError;

/// Parser signature shared by every grammar table entry.
pub type ParseFn = fn(&str) -> Result<Option<Symbol>, SymbolError>;

/// One row of the grammar table.
#[derive(Clone, Copy)]
pub struct GrammarEntry {
    /// Kind produced by this entry.
    pub kind: SymbolKind,
    /// Parser for this kind, lifted into [`Symbol`].
    pub parse: ParseFn,
}

macro_rules! entry {
    ($kind:ident) => {
        GrammarEntry {
            kind: SymbolKind::$kind,
            parse: |descriptor| Ok($kind::parse(descriptor)?.map(Symbol::from)),
        }
    };
}

/// Grammar table in dispatch order. Longer literal prefixes come first.
pub static GRAMMAR: &[GrammarEntry] = &[
    entry!(RoundedRectangleThermalOpenCorners),
    entry!(RoundedRectangleThermal),
    entry!(RectangularThermalOpenCorners),
    entry!(RectangularThermal),
    entry!(RoundedSquareThermalOpenCorners),
    entry!(RoundedSquareThermal),
    entry!(SquareThermalOpenCorners),
    entry!(SquareThermal),
    entry!(SquareRoundThermal),
    entry!(OvalThermalOpenCorners),
    entry!(OvalThermal),
    entry!(RoundThermalRounded),
    entry!(RoundThermalSquared),
    entry!(RoundedRectangleDonut),
    entry!(RectangleDonut),
    entry!(OvalDonut),
    entry!(SquareRoundDonut),
    entry!(RoundedSquareDonut),
    entry!(SquareDonut),
    entry!(RoundDonut),
    entry!(Moire),
    entry!(HorizontalHexagon),
    entry!(VerticalHexagon),
    entry!(HalfOval),
    entry!(Oval),
    entry!(Octagon),
    entry!(Butterfly),
    entry!(SquareButterfly),
    entry!(Triangle),
    entry!(Diamond),
    entry!(Ellipse),
    entry!(Rectangle),
    entry!(Round),
    entry!(Square),
];

/// Parse a descriptor against every grammar entry in table order.
///
/// Returns `Ok(None)` when no entry recognizes the descriptor. The input is
/// not trimmed.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidNumericLiteral`] when an entry matched the
/// descriptor's structure but one of its numeric fields did not convert.
pub fn parse(descriptor: &str) -> Result<Option<Symbol>, SymbolError> {
    for entry in GRAMMAR {
        if let Some(symbol) = (entry.parse)(descriptor)? {
            tracing::trace!(descriptor, kind = entry.kind.name(), "matched symbol");
            return Ok(Some(symbol));
        }
    }
    tracing::trace!(descriptor, "no symbol grammar matched");
    Ok(None)
}

/// Kinds of every grammar entry whose pattern accepts `descriptor`.
///
/// Entries that matched but failed numeric conversion are included.
pub fn matching_kinds(descriptor: &str) -> Vec<SymbolKind> {
    GRAMMAR
        .iter()
        .filter(|entry| !matches!((entry.parse)(descriptor), Ok(None)))
        .map(|entry| entry.kind)
        .collect()
}

/// Symbol kinds in dispatch order.
pub fn kinds() -> impl Iterator<Item = SymbolKind> {
    GRAMMAR.iter().map(|entry| entry.kind)
}

impl Symbol {
    /// Parse a descriptor into whichever symbol kind recognizes it.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(descriptor: &str) -> Result<Option<Self>, SymbolError> {
        parse(descriptor)
    }
}
