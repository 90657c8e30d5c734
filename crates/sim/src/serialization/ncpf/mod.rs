//! Reads `.ncpf` files written by Thiz's NuclearCraft planner.
//!
//! Read-only: the planner's layout does not map cleanly back onto the model.

mod error;
pub mod ncpf11;
pub mod simplelibrary;

pub use error::DecodeError;

use ncpf11::Ncpf11;
use serde_json::Value;

/// A decoded planner file.
#[derive(Clone, Debug)]
pub struct NcpfFile {
    /// First document: file header.
    pub header: Value,
    /// Second document: the configuration every design refers to.
    pub configuration: Ncpf11,
    /// Remaining documents (saved designs), undecoded.
    pub designs: Vec<Value>,
}

impl NcpfFile {
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let mut documents = simplelibrary::decode_all(data)?.into_iter();
        let header = documents.next().ok_or(DecodeError::MissingConfiguration)?;
        let raw = documents.next().ok_or(DecodeError::MissingConfiguration)?;
        let configuration = serde_json::from_value(raw)?;
        Ok(Self {
            header,
            configuration,
            designs: documents.collect(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_file;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_file() {
        let file = NcpfFile::parse(&sample_file()).unwrap();
        assert_eq!(file.header, json!({ "version": "11", "count": 1 }));
        assert_eq!(file.configuration.name, "NuclearCraft");
        assert!(!file.configuration.addon);
        assert_eq!(file.configuration.overhaul.fission_sfr.blocks.len(), 6);
        assert_eq!(file.designs, vec![json!({ "id": 0, "type": "Overhaul SFR" })]);
    }

    #[test]
    fn test_parse_requires_configuration() {
        let header = fixtures::encode_v1(&json!({ "version": "11" }));
        assert!(matches!(
            NcpfFile::parse(&header),
            Err(DecodeError::MissingConfiguration)
        ));
        assert!(matches!(
            NcpfFile::parse(&[]),
            Err(DecodeError::MissingConfiguration)
        ));
    }

    #[test]
    fn test_parse_rejects_foreign_configuration() {
        let mut data = fixtures::encode_v1(&json!({ "version": "11" }));
        data.extend(fixtures::encode_v1(&json!({ "name": "not a config" })));
        assert!(matches!(NcpfFile::parse(&data), Err(DecodeError::Model(_))));
    }
}
