// Quine-McCluskey engine: implicants, grouping, merging, coverage, and
// Petrick's cover enumeration

pub mod coverage;
pub mod group_table;
pub mod implicant;
pub mod petricks;
pub mod quine_mccluskey;
pub mod trace;

pub use coverage::coverage_table;
pub use group_table::GroupTable;
pub use implicant::{BitState, Implicant, ParseImplicantError};
pub use petricks::{Cover, minimal_covers};
pub use quine_mccluskey::prime_implicants;
pub use trace::{GroupSnapshot, MergeDetail, StepKind, TraceStep};
