//! Output artifacts for downstream marketing tooling: the full segmented
//! table and the filtered launch-candidate table, rendered as CSV or JSON.

pub mod table;

pub use table::{launch_table, segmented_table, Table};
