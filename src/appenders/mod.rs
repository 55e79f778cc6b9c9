//! Byte sinks for the output writer
//!
//! The logger accepts any `std::io::Write`; these are the two it ships with.

pub mod file;
pub mod memory;

pub use file::FileAppender;
pub use memory::MemoryAppender;
