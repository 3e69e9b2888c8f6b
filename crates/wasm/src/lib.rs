#![deny(unsafe_code)]
//! WASM bindings for the legacy generator.
//!
//! Exposes one JS class, `LegacyRandom`, wrapping a caller-owned generator.
//! Argument errors surface as thrown JS `Error`s and leave the generator
//! untouched.

use legacy_rng_core::{LegacyRandom, Variant};
use wasm_bindgen::prelude::*;

/// JS handle to a generator instance.
#[wasm_bindgen(js_name = LegacyRandom)]
pub struct WasmLegacyRandom {
    inner: LegacyRandom,
}

#[wasm_bindgen(js_class = LegacyRandom)]
impl WasmLegacyRandom {
    /// Creates a generator. `lite` selects the table-driven seeding.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: i32, lite: bool) -> Self {
        let variant = if lite { Variant::Lite } else { Variant::Full };
        Self {
            inner: LegacyRandom::new(seed, variant),
        }
    }

    /// Returns a float in [0, 1).
    pub fn sample(&mut self) -> f64 {
        self.inner.sample()
    }

    /// Returns an integer in [0, bound). Throws if `bound <= 0`.
    pub fn next(&mut self, bound: i32) -> Result<i32, JsError> {
        self.inner.next(bound).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the raw next word in [0, 2^31 - 1).
    #[wasm_bindgen(js_name = nextRaw)]
    pub fn next_raw(&mut self) -> i32 {
        self.inner.next_raw()
    }

    /// Returns an integer in [min, max). Throws if `min > max`.
    #[wasm_bindgen(js_name = nextRange)]
    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, JsError> {
        self.inner
            .next_range(min, max)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the variant name, `"full"` or `"lite"`.
    pub fn variant(&self) -> String {
        self.inner.variant().name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_draws_the_core_sequence() {
        let mut wrapped = WasmLegacyRandom::new(12345, false);
        let mut core = LegacyRandom::full(12345);
        for _ in 0..20 {
            assert_eq!(wrapped.sample().to_bits(), core.sample().to_bits());
            assert_eq!(wrapped.next_raw(), core.next_raw());
        }
    }

    #[test]
    fn lite_flag_selects_lite_variant() {
        assert_eq!(WasmLegacyRandom::new(0, true).variant(), "lite");
        assert_eq!(WasmLegacyRandom::new(0, false).variant(), "full");
    }
}
