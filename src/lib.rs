//! Schema-driven BCS (Binary Canonical Serialization) codec.
//!
//! BCS is a deterministic binary format: every value has exactly one valid
//! byte representation. This crate builds codecs for it out of composable
//! runtime values — a schema is a [`BcsType`], constructed from primitives
//! and combinators, not from derive macros. That makes it the right shape
//! for schemas that only exist at runtime: parsed type tags, user-supplied
//! layouts, recursive definitions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────┐
//! │  reader.rs   │     │  writer.rs   │     │   value.rs     │
//! │ (bounds-     │     │ (bounded,    │     │ (dynamic host  │
//! │  checked     │     │  growable    │     │  Value model)  │
//! │  decode)     │     │  encode)     │     │                │
//! └──────┬───────┘     └──────┬───────┘     └───────┬────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                 schema.rs  (BcsType)                    │
//! │   fixed_size / dynamic_size / string_like / lazy /      │
//! │   transform — five operations behind one immutable unit │
//! └──────┬──────────────────────────────────────────┬───────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────────────────┐     ┌───────────────────────────┐
//! │  bcs.rs  (combinators)   │     │ type_tag.rs (Move names)  │
//! │  u8..u256, vector,       │     │ parse/print round-trip,   │
//! │  struct_, enum_, option, │     │ pure_schema mapping       │
//! │  map, lazy, address      │     │                           │
//! └──────────────────────────┘     └───────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bcs_schema::{bcs, Value};
//!
//! let coin = bcs::struct_(
//!     "Coin",
//!     vec![
//!         ("value", bcs::u64()),
//!         ("owner", bcs::string()),
//!         ("is_locked", bcs::boolean()),
//!     ],
//! );
//!
//! let serialized = coin
//!     .serialize(&Value::record(vec![
//!         ("value", Value::U64(412_412_400_000)),
//!         ("owner", Value::from("Big Wallet Guy")),
//!         ("is_locked", Value::Bool(false)),
//!     ]))
//!     .unwrap();
//!
//! assert_eq!(serialized.to_base64(), "gNGxBWAAAAAOQmlnIFdhbGxldCBHdXkA");
//! assert_eq!(serialized.parse().unwrap().field("owner"),
//!            Some(&Value::from("Big Wallet Guy")));
//! ```

// Module declarations
pub mod bcs;
pub mod convert;
mod error;
mod reader;
mod schema;
mod serialized;
mod type_tag;
mod u256;
mod value;
mod writer;

// Re-exports for public API
pub use error::{BcsError, ErrorKind, Result};
pub use reader::{Reader, MAX_ULEB_BYTES};
pub use schema::BcsType;
pub use serialized::Serialized;
pub use type_tag::{pure_schema, StructTag, TypeTag};
pub use u256::U256;
pub use value::Value;
pub use writer::{Writer, WriterOptions};
