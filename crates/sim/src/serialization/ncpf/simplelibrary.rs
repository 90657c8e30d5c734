//! Reader for the "SimpleLibrary" config encoding that `.ncpf` files are made of.
//!
//! Every document is a big-endian version word followed by one object. The
//! output is a plain `serde_json::Value` tree so the typed model can be layered
//! on top with `serde`.

use super::error::DecodeError;
use bitstream_io::{BigEndian, BitRead, BitReader};
use byteorder::{ReadBytesExt, BE};
use num_enum::TryFromPrimitive;
use serde_json::{Map, Number, Value};
use std::io::Cursor;

/// Maximum nesting of objects and lists within one document.
pub const MAX_DEPTH: usize = 128;

/// Maximum element count of one number list.
pub const MAX_LIST_LEN: usize = 1 << 20;

#[derive(TryFromPrimitive, Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
enum DataType {
    Object = 1,
    String = 2,
    I32 = 3,
    F32 = 4,
    Bool = 5,
    I64 = 6,
    F64 = 7,
    List = 9,
    I8 = 10,
    I16 = 11,
    NumberList = 12,
}

#[derive(TryFromPrimitive, Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Version {
    /// Entries are written key first.
    Ver0 = 0,
    /// Entries are written value first; lists carry a layout byte.
    Ver1 = 1,
}

struct Decoder<'a> {
    data: Cursor<&'a [u8]>,
    version: Version,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn read_jstring(&mut self) -> Result<String, DecodeError> {
        let length = self.data.read_i16::<BE>()?;
        if length < 0 {
            return Err(DecodeError::NegativeLength(length.into()));
        }
        let start = self.data.position() as usize;
        let end = start + length as usize;
        let bytes = self
            .data
            .get_ref()
            .get(start..end)
            .ok_or(DecodeError::UnexpectedEof)?;
        let text = cesu8::from_java_cesu8(bytes)
            .map_err(|_| DecodeError::InvalidString)?
            .into_owned();
        self.data.set_position(end as u64);
        Ok(text)
    }

    fn read_type_tag_opt(&mut self) -> Result<Option<DataType>, DecodeError> {
        match self.data.read_u8()? {
            0 => Ok(None),
            tag => DataType::try_from(tag)
                .map(Some)
                .map_err(|_| DecodeError::UnknownTypeTag(tag)),
        }
    }

    fn read_type_tag(&mut self) -> Result<DataType, DecodeError> {
        self.read_type_tag_opt()?
            .ok_or(DecodeError::UnexpectedEndTag)
    }

    fn peek_u8(&self) -> Result<u8, DecodeError> {
        let pos = self.data.position() as usize;
        self.data
            .get_ref()
            .get(pos)
            .copied()
            .ok_or(DecodeError::UnexpectedEof)
    }

    fn remaining(&self) -> usize {
        self.data
            .get_ref()
            .len()
            .saturating_sub(self.data.position() as usize)
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(DecodeError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn decode_config(&mut self) -> Result<Value, DecodeError> {
        let mut obj = Map::new();
        while let Some(tag) = self.read_type_tag_opt()? {
            let (key, value) = match self.version {
                Version::Ver0 => {
                    let key = self.read_jstring()?;
                    (key, self.decode_value(tag)?)
                }
                Version::Ver1 => {
                    let value = self.decode_value(tag)?;
                    (self.read_jstring()?, value)
                }
            };
            obj.insert(key, value);
        }
        Ok(Value::Object(obj))
    }

    fn decode_list(&mut self) -> Result<Value, DecodeError> {
        // Version 0 lists always use the terminated layout.
        let layout = match self.version {
            Version::Ver0 => 2,
            Version::Ver1 => self.data.read_u8()?,
        };

        let mut vec = Vec::new();
        match layout {
            0 => {}
            1 => {
                let count = self.data.read_i32::<BE>()?;
                if count < 0 {
                    return Err(DecodeError::NegativeLength(count.into()));
                }
                let tag = self.read_type_tag()?;
                for _ in 0..count {
                    vec.push(self.decode_value(tag)?);
                }
            }
            _ => {
                while let Some(tag) = self.read_type_tag_opt()? {
                    vec.push(self.decode_value(tag)?);
                }
            }
        }
        Ok(Value::Array(vec))
    }

    fn decode_number_list(&mut self) -> Result<Value, DecodeError> {
        if self.version == Version::Ver0 {
            return Err(DecodeError::NumberListUnsupported);
        }

        let len = match self.peek_u8()? >> 6 {
            0 => (self.data.read_u8()? & 0x3F) as usize,
            1 => (self.data.read_u16::<BE>()? & 0x3FFF) as usize,
            2 => (self.data.read_u32::<BE>()? & 0x3FFF_FFFF) as usize,
            _ => {
                self.data.read_u8()?;
                self.data.read_u32::<BE>()? as usize
            }
        };

        if len > MAX_LIST_LEN {
            return Err(DecodeError::TooLong(len));
        }

        let flags = self.data.read_u8()?;
        let mut vec = Vec::new();
        if flags & 0x80 != 0 {
            if len.saturating_mul(8) > self.remaining() {
                return Err(DecodeError::UnexpectedEof);
            }
            for _ in 0..len {
                vec.push(Value::Number(self.data.read_i64::<BE>()?.into()));
            }
            return Ok(Value::Array(vec));
        }

        let has_neg = flags & 0x40 != 0;
        let digits = (flags & 0x3F) as u32;
        if digits == 0 {
            vec.extend(std::iter::repeat(Value::Number(0.into())).take(len));
            return Ok(Value::Array(vec));
        }

        let bits_per_value = digits as usize + has_neg as usize;
        if len.saturating_mul(bits_per_value).div_ceil(8) > self.remaining() {
            return Err(DecodeError::UnexpectedEof);
        }

        // The bitstream is padded to a whole byte; dropping the reader leaves
        // the cursor right after the last byte it touched.
        let mut bits = BitReader::<_, BigEndian>::new(&mut self.data);
        for _ in 0..len {
            let is_neg = if has_neg { bits.read_bit()? } else { false };
            let magnitude: u64 = bits.read(digits)?;
            let val = if is_neg {
                -(magnitude as i64)
            } else {
                magnitude as i64
            };
            vec.push(Value::Number(val.into()));
        }
        Ok(Value::Array(vec))
    }

    fn decode_value(&mut self, tp: DataType) -> Result<Value, DecodeError> {
        match tp {
            DataType::Object => {
                self.enter()?;
                let value = self.decode_config();
                self.depth -= 1;
                value
            }
            DataType::List => {
                self.enter()?;
                let value = self.decode_list();
                self.depth -= 1;
                value
            }
            DataType::String => Ok(Value::String(self.read_jstring()?)),
            DataType::I32 => Ok(Value::Number(self.data.read_i32::<BE>()?.into())),
            DataType::F32 => f64_to_value(self.data.read_f32::<BE>()? as f64),
            DataType::Bool => Ok(Value::Bool(self.data.read_u8()? != 0)),
            DataType::I64 => Ok(Value::Number(self.data.read_i64::<BE>()?.into())),
            DataType::F64 => f64_to_value(self.data.read_f64::<BE>()?),
            DataType::I8 => Ok(Value::Number(self.data.read_i8()?.into())),
            DataType::I16 => Ok(Value::Number(self.data.read_i16::<BE>()?.into())),
            DataType::NumberList => self.decode_number_list(),
        }
    }
}

fn f64_to_value(f: f64) -> Result<Value, DecodeError> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or(DecodeError::NonFiniteFloat(f))
}

/// Decodes one document and returns it with the bytes that follow it.
pub fn decode(data: &[u8]) -> Result<(Value, &[u8]), DecodeError> {
    let mut cursor = Cursor::new(data);
    let raw = cursor.read_u16::<BE>()?;
    let version = Version::try_from(raw).map_err(|_| DecodeError::UnsupportedVersion(raw))?;
    log::debug!("SimpleLibrary document version {:?}", version);

    let mut decoder = Decoder {
        data: cursor,
        version,
        depth: 0,
    };
    let config = decoder.decode_config()?;
    let pos = decoder.data.position() as usize;
    Ok((config, &data[pos..]))
}

/// Decodes consecutive documents until the input is exhausted.
pub fn decode_all(mut data: &[u8]) -> Result<Vec<Value>, DecodeError> {
    let mut documents = Vec::new();
    while !data.is_empty() {
        let (value, rest) = decode(data)?;
        documents.push(value);
        data = rest;
    }
    log::debug!("decoded {} SimpleLibrary documents", documents.len());
    Ok(documents)
}
