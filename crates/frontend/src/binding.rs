//! Functions exported to JavaScript for reading planner files in the browser.

use nc_sim::serialization::ncpf::ncpf11::BlockSummary;
use nc_sim::serialization::ncpf::simplelibrary;
use nc_sim::{DecodeError, NcpfFile};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub name: String,
    pub version: String,
    pub addon: bool,
    pub designs: usize,
    pub blocks: BlockSummary,
}

pub fn summarize(bytes: &[u8]) -> Result<FileSummary, DecodeError> {
    let file = NcpfFile::parse(bytes)?;
    let config = file.configuration;
    Ok(FileSummary {
        blocks: config.overhaul.fission_sfr.summary(),
        name: config.name,
        version: config.version,
        addon: config.addon,
        designs: file.designs.len(),
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_error(err: DecodeError) -> JsValue {
    log::warn!("ncpf decoding failed: {}", err);
    JsValue::from_str(&err.to_string())
}

/// Every SimpleLibrary document in `bytes`, as an array of plain objects.
#[wasm_bindgen]
pub fn decode_ncpf(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let documents = simplelibrary::decode_all(bytes).map_err(js_error)?;
    to_js(&documents)
}

/// Name, version and block counts of a planner file.
#[wasm_bindgen]
pub fn summarize_ncpf(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let summary = summarize(bytes).map_err(js_error)?;
    to_js(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jstr(s: &str) -> Vec<u8> {
        let mut out = (s.len() as i16).to_be_bytes().to_vec();
        out.extend_from_slice(s.as_bytes());
        out
    }

    /// Version 0 document with string entries only.
    fn doc(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut out = 0u16.to_be_bytes().to_vec();
        for (key, value) in entries {
            out.push(2);
            out.extend(jstr(key));
            out.extend(jstr(value));
        }
        out.push(0);
        out
    }

    #[test]
    fn test_summarize_minimal_file() {
        let mut data = doc(&[("version", "11")]);
        // v1 configuration: addon=false, strings, overhaul.fissionSFR.blocks=[]
        data.extend(1u16.to_be_bytes());
        data.extend([5, 0]);
        data.extend(jstr("addon"));
        for (key, value) in [
            ("name", "NC"),
            ("version", "2o"),
            ("underhaulVersion", "2.18"),
        ] {
            data.push(2);
            data.extend(jstr(value));
            data.extend(jstr(key));
        }
        data.extend([1, 1, 9, 0]);
        data.extend(jstr("blocks"));
        data.push(0);
        data.extend(jstr("fissionSFR"));
        data.push(0);
        data.extend(jstr("overhaul"));
        data.push(0);

        let summary = summarize(&data).unwrap();
        assert_eq!(summary.name, "NC");
        assert_eq!(summary.version, "2o");
        assert!(!summary.addon);
        assert_eq!(summary.designs, 0);
        assert_eq!(summary.blocks, BlockSummary::default());
    }

    #[test]
    fn test_summarize_header_only() {
        let data = doc(&[("version", "11")]);
        assert!(matches!(
            summarize(&data),
            Err(DecodeError::MissingConfiguration)
        ));
    }
}
