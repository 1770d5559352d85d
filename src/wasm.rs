// WebAssembly bindings for the conversion engine
use crate::convert;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MeasureWasm {}

impl Default for MeasureWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MeasureWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert a quantity expression such as "3.1mi"
    /// Returns JSON string with initNum, initUnit, returnNum, returnUnit and string
    #[wasm_bindgen]
    pub fn convert(&self, input: &str) -> Result<String, JsValue> {
        let conversion =
            convert::convert_expression(input).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let json = serde_json::to_string(&conversion)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize conversion: {}", e)))?;

        Ok(json)
    }

    /// Numeric part of an expression, or "invalid number"
    #[wasm_bindgen]
    pub fn parse_number(&self, input: &str) -> Result<f64, JsValue> {
        convert::parse_number(input).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Canonical unit abbreviation of an expression, or "invalid unit"
    #[wasm_bindgen]
    pub fn parse_unit(&self, input: &str) -> Result<String, JsValue> {
        convert::parse_unit(input)
            .map(|unit| unit.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Sentence for an already converted pair of quantities
    #[wasm_bindgen]
    pub fn format_result(
        &self,
        init_num: f64,
        init_unit: &str,
        return_num: f64,
        return_unit: &str,
    ) -> Result<String, JsValue> {
        let init_unit: convert::Unit = init_unit
            .parse()
            .map_err(|e: convert::ConvertError| JsValue::from_str(&e.to_string()))?;
        let return_unit: convert::Unit = return_unit
            .parse()
            .map_err(|e: convert::ConvertError| JsValue::from_str(&e.to_string()))?;

        Ok(convert::format_result(
            init_num,
            init_unit,
            return_num,
            return_unit,
        ))
    }
}
