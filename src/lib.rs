//! outshape validates the structured output of network-device "show"
//! commands against a declared schema.
//!
//! Command parsers in this ecosystem all follow the same pattern: run
//! line-oriented regular expressions over captured CLI output, fill in a
//! nested map, and hand the result back. The shape of that map is a
//! contract with every downstream consumer, so it gets checked once, at the
//! end of every parse, against a schema declared next to the parser. This
//! crate is that checking engine:
//!
//! - A [`Value`] type for the parsed output itself: null, booleans,
//!   integers, floats, strings, arrays, and insertion-ordered maps.
//! - A [`validator`] module for declaring shapes, covering required,
//!   optional, and wildcard map keys, per-type constraints, and sequences.
//! - A [`Schema`] wrapping a validator tree with a name and version, built
//!   once and shared freely.
//! - A [`ParseRun`] tying an extraction routine to a schema for one
//!   invocation: empty output is reported as its own error kind, anything
//!   else is validated and returned untouched.
//!
//! Errors are typed ([`Error`]) and carry the full [`Path`] from the root
//! of the value to the offending node, so a failed parse points at exactly
//! what went wrong: a missing required key, an unexpected key, a type
//! mismatch, or a constraint failure.
//!
//! # Examples
//!
//! Declaring a schema for a peering summary and parsing captured output
//! against it:
//!
//! ```
//! use outshape::{validator::*, Error, ParseRun, Result, SchemaBuilder, Source, Value};
//!
//! // One record per peer address; peer addresses are arbitrary keys.
//! let schema = SchemaBuilder::new(
//!     MapValidator::new()
//!         .values(
//!             MapValidator::new()
//!                 .req_add("state", StrValidator::new().build())
//!                 .req_add("msg_rcvd", IntValidator::new().min(0u8).build())
//!                 .opt_add("description", StrValidator::new().build())
//!                 .build(),
//!         )
//!         .build(),
//! )
//! .name("show_peers_summary")
//! .build();
//!
//! // The per-command extraction routine, normally regex-driven. Any
//! // closure over a Source works.
//! let mut extract = |source: &Source| -> Result<Value> {
//!     let text = source
//!         .as_text()
//!         .ok_or_else(|| Error::FailExtract("expected captured text".into()))?;
//!     let mut out = indexmap::IndexMap::new();
//!     for line in text.lines() {
//!         let mut fields = line.split_whitespace();
//!         if let (Some(peer), Some(state), Some(msg_rcvd)) =
//!             (fields.next(), fields.next(), fields.next())
//!         {
//!             let mut record = indexmap::IndexMap::new();
//!             record.insert("state".to_owned(), Value::from(state));
//!             record.insert(
//!                 "msg_rcvd".to_owned(),
//!                 Value::from(msg_rcvd.parse::<u64>().unwrap_or(0)),
//!             );
//!             out.insert(peer.to_owned(), Value::from(record));
//!         }
//!     }
//!     Ok(Value::from(out))
//! };
//!
//! let source = Source::from("10.1.1.1 Established 4320\n10.2.2.2 Idle 0\n");
//! let value = ParseRun::new(&schema).parse(&mut extract, &source)?;
//! assert_eq!(value["10.1.1.1"]["msg_rcvd"], Value::from(4320u64));
//! # Ok::<(), Error>(())
//! ```

mod error;
mod integer;
mod parse;
mod path;
mod schema;
mod value;

pub mod validator;

pub use error::{Error, Result};
pub use integer::Integer;
pub use parse::{Extract, ParseRun, Source};
pub use path::{Path, Segment};
pub use schema::{Schema, SchemaBuilder};
pub use value::Value;
