//! WebAssembly bindings for phone normalization.
//!
//! Lets the dashboard and intake forms share the exact normalization used at
//! import time.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { standardize_phone_number, display_phone_number } from 'phone_normalizer';
//!
//! await init();
//!
//! standardize_phone_number("514.696.2442");   // "(514) 696-2442"
//! standardize_fax_number(4186964673);         // "(418) 696-4673"
//! display_phone_number(null);                 // "Not provided"
//!
//! const result = standardize_detailed("(514) 413-8777 x 24400");
//! console.log(result.standardized, result.valid, result.extension);
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::input::RawInput;

/// Result of a detailed standardization, returned to JavaScript.
#[wasm_bindgen]
pub struct StandardizeResult {
    standardized: Option<String>,
    valid: bool,
    extension: Option<String>,
    shape: String,
}

#[wasm_bindgen]
impl StandardizeResult {
    /// Canonical form, if any.
    #[wasm_bindgen(getter)]
    pub fn standardized(&self) -> Option<String> {
        self.standardized.clone()
    }

    /// Whether the canonical form passes the digit-count check.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Extension digits, if any.
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> Option<String> {
        self.extension.clone()
    }

    /// Shape name, such as `national` or `local`.
    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> String {
        self.shape.clone()
    }
}

/// Converts a JavaScript string, number, `null` or `undefined`.
fn raw_input(value: &JsValue) -> RawInput {
    if let Some(s) = value.as_string() {
        RawInput::Text(s)
    } else if let Some(n) = value.as_f64() {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 {
            RawInput::Numeric(n as i64)
        } else {
            RawInput::Text(n.to_string())
        }
    } else {
        RawInput::Absent
    }
}

/// Standardizes a phone number; returns `undefined` if unusable.
#[wasm_bindgen]
pub fn standardize_phone_number(value: JsValue) -> Option<String> {
    crate::standardize_phone_number(raw_input(&value))
}

/// Standardizes a fax number given as a string or a number.
#[wasm_bindgen]
pub fn standardize_fax_number(value: JsValue) -> Option<String> {
    crate::standardize_fax_number(raw_input(&value))
}

/// Standardizes a value and reports validity, extension and shape.
#[wasm_bindgen]
pub fn standardize_detailed(value: JsValue) -> StandardizeResult {
    let input = raw_input(&value);
    let parsed = crate::input::preprocess(&input)
        .map(|text| crate::extension::split_extension(&text))
        .unwrap_or_default();
    let standardized = crate::format::format_parsed(&parsed);

    StandardizeResult {
        valid: crate::is_valid_phone_number(standardized.as_deref()),
        extension: parsed.extension_digits().map(str::to_string),
        shape: crate::format::NumberShape::classify(parsed.main_digits())
            .name()
            .to_string(),
        standardized,
    }
}

/// Checks whether a value has a plausible digit count (7 to 15).
#[wasm_bindgen]
pub fn is_valid_phone_number(value: Option<String>) -> bool {
    crate::is_valid_phone_number(value.as_deref())
}

/// Returns the value, or "Not provided" when missing.
#[wasm_bindgen]
pub fn display_phone_number(value: Option<String>) -> String {
    crate::display_phone_number(value.as_deref()).to_string()
}

/// Returns the digits after the first extension marker.
#[wasm_bindgen]
pub fn extract_extension(value: Option<String>) -> Option<String> {
    crate::extract_extension(value.as_deref()).map(str::to_string)
}

/// Removes the first extension marker and its digits.
#[wasm_bindgen]
pub fn remove_extension(value: Option<String>) -> Option<String> {
    crate::remove_extension(value.as_deref())
}
