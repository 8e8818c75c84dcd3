// Adapters layer: file-backed implementations of the domain ports.

pub mod csv_io;
