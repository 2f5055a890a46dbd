// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON formatting and JSON/YAML conversion.
//!
//! Documents are parsed into `serde_json::Value` with key order preserved, so
//! reformatting never reorders objects.

use serde_json::Value;

use crate::errors::TransformError;
use crate::traits::flag::resolve_bool;
use crate::traits::{Flag, Processor};

fn parse_json(processor: &'static str, input: &[u8]) -> Result<Value, TransformError> {
    serde_json::from_slice(input).map_err(|e| TransformError::invalid_input(processor, e))
}

/// Pretty-print JSON, or minify it with `compact`.
pub struct Json;

impl Json {
    fn compact_flag() -> Flag {
        Flag::bool("compact", "c", "Compact the JSON onto one line", false)
    }
}

impl Processor for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["json-format"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![Self::compact_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let value = parse_json(self.name(), input)?;
        let rendered = if resolve_bool(flags, &Self::compact_flag()) {
            serde_json::to_vec(&value)
        } else {
            serde_json::to_vec_pretty(&value)
        };
        rendered.map_err(|e| TransformError::serialization(self.name(), e))
    }

    fn title(&self) -> &'static str {
        "Format JSON"
    }

    fn description(&self) -> &'static str {
        "Format your text as JSON"
    }
}

/// Convert a JSON document to YAML.
pub struct JsonToYaml;

impl Processor for JsonToYaml {
    fn name(&self) -> &'static str {
        "json-yaml"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["json-yml"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let value = parse_json(self.name(), input)?;
        serde_yaml::to_string(&value)
            .map(String::into_bytes)
            .map_err(|e| TransformError::serialization(self.name(), e))
    }

    fn title(&self) -> &'static str {
        "JSON To YAML"
    }

    fn description(&self) -> &'static str {
        "Convert JSON to YAML text"
    }
}

/// Convert a YAML document to pretty-printed JSON.
pub struct YamlToJson;

impl Processor for YamlToJson {
    fn name(&self) -> &'static str {
        "yaml-json"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["yml-json"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let value: Value = serde_yaml::from_slice(input)
            .map_err(|e| TransformError::invalid_input(self.name(), e))?;
        serde_json::to_vec_pretty(&value).map_err(|e| TransformError::serialization(self.name(), e))
    }

    fn title(&self) -> &'static str {
        "YAML To JSON"
    }

    fn description(&self) -> &'static str {
        "Convert YAML to JSON text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FlagValue;

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_pretty_print_preserves_key_order() {
        let out = Json.transform(br#"{"b":1,"a":[true,null]}"#, &[]).unwrap();
        assert_eq!(
            text(out),
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn test_compact() {
        let compact = vec![Json::compact_flag().with_value(FlagValue::Bool(true))];
        let out = Json.transform(b"{ \"b\" : 1,\n \"a\" : \"x\" }", &compact).unwrap();
        assert_eq!(text(out), r#"{"b":1,"a":"x"}"#);
    }

    #[test]
    fn test_json_is_idempotent() {
        let once = Json.transform(br#"{"k":[1,2,{"n":"v"}]}"#, &[]).unwrap();
        let twice = Json.transform(&once, &[]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        for bad in [&b""[..], b"{", b"{'single': 1}"] {
            let err = Json.transform(bad, &[]).unwrap_err();
            assert!(matches!(err, TransformError::InvalidInput { processor: "json", .. }));
        }
    }

    #[test]
    fn test_json_to_yaml() {
        let out = JsonToYaml.transform(br#"{"name":"sttr","tags":["a","b"]}"#, &[]).unwrap();
        assert_eq!(text(out), "name: sttr\ntags:\n- a\n- b\n");
    }

    #[test]
    fn test_yaml_to_json() {
        let out = YamlToJson.transform(b"name: sttr\ncount: 2\n", &[]).unwrap();
        assert_eq!(text(out), "{\n  \"name\": \"sttr\",\n  \"count\": 2\n}");
    }

    #[test]
    fn test_yaml_json_round_trip() {
        let json = br#"{"outer":{"inner":[1,2.5,"three"]},"flag":false}"#;
        let yaml = JsonToYaml.transform(json, &[]).unwrap();
        let back = YamlToJson.transform(&yaml, &[]).unwrap();
        assert_eq!(back, Json.transform(json, &[]).unwrap());
    }
}
