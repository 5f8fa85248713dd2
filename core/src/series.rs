use serde::{Deserialize, Serialize};

use crate::constants::TOL;
use crate::prelude::{Shape, WindError, WindResult};

/// Scalar-or-field numeric value with explicit per-element masking.
///
/// Every element is either a present sample or absent. Absent elements
/// propagate through all element-wise operations, so downstream math never
/// mistakes missing data for a numeric zero. Operations preserve kind:
/// scalars stay scalars, fields stay fields of the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Series {
    Scalar(Option<f64>),
    Field(Vec<Option<f64>>),
}

impl Series {
    /// A present scalar sample.
    pub fn scalar(value: f64) -> Self {
        Series::Scalar(Some(value))
    }

    /// A masked scalar.
    pub fn masked() -> Self {
        Series::Scalar(None)
    }

    /// A field with every element present.
    pub fn field<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Series::Field(values.into_iter().map(Some).collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Series::Scalar(_) => Shape::Scalar,
            Series::Field(elements) => Shape::Field(elements.len()),
        }
    }

    /// Turns every element equal to the sentinel into a masked element.
    ///
    /// This is the single place sentinel equality is tested; everything
    /// downstream works on explicit masks.
    pub fn screen(&self, missing: f64) -> Series {
        let screen_one = |element: &Option<f64>| match element {
            Some(value) if *value == missing => None,
            other => *other,
        };
        match self {
            Series::Scalar(element) => Series::Scalar(screen_one(element)),
            Series::Field(elements) => Series::Field(elements.iter().map(screen_one).collect()),
        }
    }

    /// Applies `f` to every present element; masked elements stay masked.
    pub fn map<F>(&self, f: F) -> Series
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Series::Scalar(element) => Series::Scalar(element.map(&f)),
            Series::Field(elements) => Series::Field(elements.iter().map(|e| e.map(&f)).collect()),
        }
    }

    /// Applies `f` element-wise across two series of the same shape.
    ///
    /// A masked element in either operand masks the result at that position.
    pub fn zip_map<F>(&self, other: &Series, f: F) -> WindResult<Series>
    where
        F: Fn(f64, f64) -> f64,
    {
        let lift = |a: &Option<f64>, b: &Option<f64>| match (a, b) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        };
        match (self, other) {
            (Series::Scalar(a), Series::Scalar(b)) => Ok(Series::Scalar(lift(a, b))),
            (Series::Field(a), Series::Field(b)) if a.len() == b.len() => Ok(Series::Field(
                a.iter().zip(b.iter()).map(|(x, y)| lift(x, y)).collect(),
            )),
            _ => Err(self.shape_mismatch(other)),
        }
    }

    /// Two-output variant of [`Series::zip_map`] for transforms that produce
    /// a pair per element.
    pub fn zip_map2<F>(&self, other: &Series, f: F) -> WindResult<(Series, Series)>
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        let lift = |a: &Option<f64>, b: &Option<f64>| match (a, b) {
            (Some(x), Some(y)) => {
                let (p, q) = f(*x, *y);
                (Some(p), Some(q))
            }
            _ => (None, None),
        };
        match (self, other) {
            (Series::Scalar(a), Series::Scalar(b)) => {
                let (p, q) = lift(a, b);
                Ok((Series::Scalar(p), Series::Scalar(q)))
            }
            (Series::Field(a), Series::Field(b)) if a.len() == b.len() => {
                let (ps, qs) = a.iter().zip(b.iter()).map(|(x, y)| lift(x, y)).unzip();
                Ok((Series::Field(ps), Series::Field(qs)))
            }
            _ => Err(self.shape_mismatch(other)),
        }
    }

    /// Snaps present elements with magnitude below [`TOL`] to exactly 0.
    pub fn snap_zero(&self) -> Series {
        self.map(|value| if value.abs() < TOL { 0.0 } else { value })
    }

    fn shape_mismatch(&self, other: &Series) -> WindError {
        let message = format!("{} vs {}", self.shape(), other.shape());
        log::warn!("series shape mismatch: {}", message);
        WindError::ShapeMismatch(message)
    }
}

impl From<f64> for Series {
    fn from(value: f64) -> Self {
        Series::scalar(value)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Series::field(values)
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(elements: Vec<Option<f64>>) -> Self {
        Series::Field(elements)
    }
}
