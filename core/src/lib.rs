//! Wind-vector math and unit conversions for the Rust sounding-analysis platform.
//!
//! The modules mirror the legacy sounding-table utility layer while carrying
//! missing data as explicit per-element masks and checking field shapes up
//! front instead of relying on a masked-array library.

pub mod constants;
pub mod prelude;
pub mod series;
pub mod units;
pub mod wind;

pub use constants::{MISSING, TOL};
pub use prelude::{Shape, WindError, WindResult};
pub use series::Series;
pub use units::{
    degree_to_compass, ft2m, kts2mph, kts2ms, m2ft, mph2kts, mph2ms, ms2kts, ms2mph, LinearScale,
};
pub use wind::{comp_to_vec, comp_to_vec_with, mag, mag_with, vec_to_comp, vec_to_comp_with};
