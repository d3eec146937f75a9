//! I/O utilities for buffer access
//!
//! This module provides byte order detection and bounds-checked,
//! endianness-aware reads over in-memory buffers.

pub mod byte_order;
pub mod byte_reader;

pub use byte_order::ByteOrder;
pub use byte_reader::ByteReader;
