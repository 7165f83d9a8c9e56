//! Structural Summary scoring engine.
//!
//! Everything in here is pure: the calculator takes a slice of responses and
//! returns a [`CalculationResults`] without I/O or shared state.

pub mod calculator;
pub mod classifier;
pub mod counting;
pub mod formulas;
pub mod indices;
pub mod results;

pub use calculator::calculate_rorschach;
pub use classifier::{classify_gphr, gphr_label, HumanRepresentation};
pub use counting::{Field, ResponseSet};
pub use formulas::{d_table, determine_coping_style, zest_from_zf, CopingStyle};
pub use indices::{IndexInputs, IndexOutcome, SpecialIndices};
pub use results::{
    CalculationResults, FormQualityDetails, LocationBucket, LocationTally, SingleDeterminant,
};
