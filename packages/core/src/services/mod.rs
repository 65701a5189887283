//! Conversion Services
//!
//! The boundary layer around the tree builder: reading the flat source file,
//! validating records, and writing the nested result file.

pub mod convert_service;
pub mod error;

pub use convert_service::convert_file;
pub use error::ConvertError;
