#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::indexing_slicing)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `OdbView` WASM module — ODB++ standard symbol descriptor parsing.

pub mod error;
pub mod hole;
pub mod symbol;

use wasm_bindgen::prelude::*;

use crate::symbol::Symbol;

/// Initialize the WASM module. Sets up the panic hook for debugging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse one symbol descriptor such as `r2.5` or `donut_s3x1.5xr0.5x13`.
///
/// Returns the record as a `JsValue` object tagged by `kind`, or `null` when
/// no symbol kind recognizes the descriptor.
///
/// # Errors
///
/// Returns a descriptive error string if the descriptor matched a symbol kind
/// but carries a malformed number.
#[wasm_bindgen]
pub fn parse_symbol(descriptor: &str) -> Result<JsValue, JsValue> {
    let parsed = parse_symbol_internal(descriptor).map_err(|e| JsValue::from_str(&e))?;
    parsed.map_or(Ok(JsValue::NULL), |symbol| {
        serde_wasm_bindgen::to_value(&symbol).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Internal parse logic shared between the wasm export and native tests.
#[doc(hidden)]
pub fn parse_symbol_internal(descriptor: &str) -> Result<Option<Symbol>, String> {
    symbol::parse(descriptor).map_err(|e| e.to_string())
}

/// Names of every supported symbol kind, in dispatch order.
#[wasm_bindgen]
pub fn symbol_kinds() -> Vec<String> {
    symbol::kinds().map(|kind| kind.name().to_string()).collect()
}
