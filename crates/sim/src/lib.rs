//! NuclearCraft reactor planner model and `.ncpf` decoding.
//!
//! Shared by the WebAssembly frontend (through its JS binding) and the native
//! `ncpf-inspect` tool.

pub mod model;
pub mod serialization;

pub use serialization::ncpf::{DecodeError, NcpfFile};
