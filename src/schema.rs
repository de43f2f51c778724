// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The schema unit: [`BcsType`].
//!
//! A `BcsType` is an immutable bundle of read/write/validate behavior plus a
//! size hint, identified by a name. It is a strategy object: primitives are
//! built from [`BcsType::fixed_size`] and [`BcsType::dynamic_size`], and
//! every other combinator in [`crate::bcs`] derives from those two plus
//! [`BcsType::transform`] and [`BcsType::lazy`].
//!
//! Types are cheap to clone (`Arc` inner) and safe to share across threads:
//! there is no per-instance mutable state, and `lazy` memoizes through a
//! `OnceLock` so concurrent first-use constructs the deferred type at most
//! once. `Reader` and `Writer` instances, by contrast, live inside a single
//! serialize or parse call and are never shared.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::convert;
use crate::error::Result;
use crate::reader::Reader;
use crate::serialized::Serialized;
use crate::value::Value;
use crate::writer::{Writer, WriterOptions};

type SizeFn = dyn Fn() -> Option<usize> + Send + Sync;
type ReadFn = dyn Fn(&mut Reader) -> Result<Value> + Send + Sync;
type WriteFn = dyn Fn(&Value, &mut Writer) -> Result<()> + Send + Sync;
type ValidateFn = dyn Fn(&Value) -> Result<()> + Send + Sync;

struct TypeInner {
    name: String,
    size: Box<SizeFn>,
    read: Box<ReadFn>,
    write: Box<WriteFn>,
    validate: Box<ValidateFn>,
}

/// An immutable, composable codec for one wire shape.
#[derive(Clone)]
pub struct BcsType {
    inner: Arc<TypeInner>,
}

impl BcsType {
    pub(crate) fn raw(
        name: String,
        size: impl Fn() -> Option<usize> + Send + Sync + 'static,
        read: impl Fn(&mut Reader) -> Result<Value> + Send + Sync + 'static,
        write: impl Fn(&Value, &mut Writer) -> Result<()> + Send + Sync + 'static,
        validate: impl Fn(&Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(TypeInner {
                name,
                size: Box::new(size),
                read: Box::new(read),
                write: Box::new(write),
                validate: Box::new(validate),
            }),
        }
    }

    /// A type whose encoding always occupies exactly `size` bytes.
    pub fn fixed_size(
        name: &str,
        size: usize,
        read: impl Fn(&mut Reader) -> Result<Value> + Send + Sync + 'static,
        write: impl Fn(&Value, &mut Writer) -> Result<()> + Send + Sync + 'static,
        validate: impl Fn(&Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::raw(name.to_string(), move || Some(size), read, write, validate)
    }

    /// A type whose encoded size depends on the value (length-prefixed shapes).
    pub fn dynamic_size(
        name: &str,
        read: impl Fn(&mut Reader) -> Result<Value> + Send + Sync + 'static,
        write: impl Fn(&Value, &mut Writer) -> Result<()> + Send + Sync + 'static,
        validate: impl Fn(&Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::raw(name.to_string(), || None, read, write, validate)
    }

    /// A ULEB128 length-prefixed byte blob with caller-supplied conversion
    /// between bytes and the application value (UTF-8 strings, and anything
    /// string-shaped on the wire).
    pub fn string_like(
        name: &str,
        to_bytes: impl Fn(&Value) -> Result<Vec<u8>> + Send + Sync + 'static,
        from_bytes: impl Fn(Vec<u8>) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        let to_bytes = Arc::new(to_bytes);
        let write_to_bytes = Arc::clone(&to_bytes);
        Self::raw(
            name.to_string(),
            || None,
            move |reader| {
                let len = reader.read_uleb128()? as usize;
                from_bytes(reader.read_bytes(len)?)
            },
            move |value, writer| {
                let payload = (*write_to_bytes)(value)?;
                writer.write_uleb128(payload.len() as u64)?;
                writer.write_bytes(&payload)
            },
            move |value| (*to_bytes)(value).map(|_| ()),
        )
    }

    /// Defer construction of a type until first use.
    ///
    /// `init` runs at most once, on whichever call touches the type first;
    /// the result is memoized. This is the indirection that lets recursive
    /// schemas (a type tag whose variants contain type tags) terminate at
    /// definition time.
    pub fn lazy(init: impl Fn() -> BcsType + Send + Sync + 'static) -> Self {
        let cell: Arc<OnceLock<BcsType>> = Arc::new(OnceLock::new());
        let resolve = Arc::new(move || cell.get_or_init(&init).clone());

        let size_resolve = Arc::clone(&resolve);
        let read_resolve = Arc::clone(&resolve);
        let write_resolve = Arc::clone(&resolve);
        let validate_resolve = resolve;
        Self::raw(
            "lazy".to_string(),
            move || (*size_resolve)().serialized_size(),
            move |reader| (*read_resolve)().read(reader),
            move |value, writer| (*write_resolve)().write(value, writer),
            move |value| (*validate_resolve)().validate(value),
        )
    }

    /// Wrap this type with input/output value mapping, leaving the wire shape
    /// untouched. `input` runs before writes and validation, `output` after
    /// reads. Adapters stack: `option(map(..))` is two transforms deep.
    pub fn transform(
        &self,
        name: impl Into<String>,
        input: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static,
        output: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        let input = Arc::new(input);
        let size_inner = self.clone();
        let read_inner = self.clone();
        let write_inner = self.clone();
        let validate_inner = self.clone();
        let write_input = Arc::clone(&input);
        Self::raw(
            name.into(),
            move || size_inner.serialized_size(),
            move |reader| output(read_inner.read(reader)?),
            move |value, writer| write_inner.write(&(*write_input)(value)?, writer),
            move |value| validate_inner.validate(&(*input)(value)?),
        )
    }

    /// Prepend an extra validation step, keeping everything else intact.
    pub fn with_validate(
        &self,
        validate: impl Fn(&Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        let validate = Arc::new(validate);
        let size_inner = self.clone();
        let read_inner = self.clone();
        let write_inner = self.clone();
        let validate_inner = self.clone();
        let write_validate = Arc::clone(&validate);
        Self::raw(
            self.name().to_string(),
            move || size_inner.serialized_size(),
            move |reader| read_inner.read(reader),
            move |value, writer| {
                (*write_validate)(value)?;
                write_inner.write(value, writer)
            },
            move |value| {
                (*validate)(value)?;
                validate_inner.validate(value)
            },
        )
    }

    /// Schema name, carried in every validation error.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Exact encoded size in bytes, or `None` when any nested component is
    /// dynamically sized. Never a lower bound.
    pub fn serialized_size(&self) -> Option<usize> {
        (self.inner.size)()
    }

    /// Decode one value from the reader, advancing its cursor.
    pub fn read(&self, reader: &mut Reader) -> Result<Value> {
        (self.inner.read)(reader)
    }

    /// Check `value` against this schema without encoding anything.
    pub fn validate(&self, value: &Value) -> Result<()> {
        (self.inner.validate)(value)
    }

    /// Validate, then encode into the writer. A value that fails top-level
    /// validation writes nothing.
    pub fn write(&self, value: &Value, writer: &mut Writer) -> Result<()> {
        (self.inner.validate)(value)?;
        (self.inner.write)(value, writer)
    }

    /// Encode with default writer options.
    pub fn serialize(&self, value: &Value) -> Result<Serialized> {
        self.serialize_with(value, WriterOptions::default())
    }

    /// Encode with explicit writer capacity options.
    pub fn serialize_with(&self, value: &Value, options: WriterOptions) -> Result<Serialized> {
        let mut writer = Writer::new(options);
        self.write(value, &mut writer)?;
        Ok(Serialized::new(self.clone(), writer.into_bytes()))
    }

    /// Decode a value from raw bytes through a fresh [`Reader`].
    pub fn parse(&self, bytes: &[u8]) -> Result<Value> {
        let mut reader = Reader::new(bytes.to_vec());
        self.read(&mut reader)
    }

    /// Decode from a hex string (`0x` prefix optional).
    pub fn parse_hex(&self, input: &str) -> Result<Value> {
        self.parse(&convert::from_hex(input)?)
    }

    /// Decode from standard base64.
    pub fn parse_base64(&self, input: &str) -> Result<Value> {
        self.parse(&convert::from_base64(input)?)
    }

    /// Decode from base58 (Bitcoin alphabet).
    pub fn parse_base58(&self, input: &str) -> Result<Value> {
        self.parse(&convert::from_base58(input)?)
    }
}

impl fmt::Debug for BcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcsType")
            .field("name", &self.inner.name)
            .field("serialized_size", &self.serialized_size())
            .finish_non_exhaustive()
    }
}
