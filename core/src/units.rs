use crate::series::Series;

/// Meters per second to knots.
pub const MS2KTS: f64 = 1.94384449;
/// Knots to meters per second.
pub const KTS2MS: f64 = 0.514444;
/// Meters per second to miles per hour.
pub const MS2MPH: f64 = 2.23694;
/// Miles per hour to meters per second.
pub const MPH2MS: f64 = 0.44704;
/// Miles per hour to knots.
pub const MPH2KTS: f64 = 0.868976;
/// Knots to miles per hour.
pub const KTS2MPH: f64 = 1.15078;
/// Meters to feet.
pub const M2FT: f64 = 3.2808399;
/// Feet to meters.
pub const FT2M: f64 = 0.3048;

/// Element-wise linear scaling over scalars and fields.
///
/// Unit conversions never mask: masked elements in a [`Series`] simply stay
/// masked, and present elements scale uniformly.
pub trait LinearScale {
    fn scale(self, factor: f64) -> Self;
}

impl LinearScale for f64 {
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl LinearScale for Vec<f64> {
    fn scale(self, factor: f64) -> Self {
        self.into_iter().map(|value| value * factor).collect()
    }
}

impl LinearScale for Series {
    fn scale(self, factor: f64) -> Self {
        self.map(|value| value * factor)
    }
}

/// Convert meters per second to knots.
pub fn ms2kts<T: LinearScale>(val: T) -> T {
    val.scale(MS2KTS)
}

/// Convert knots to meters per second.
pub fn kts2ms<T: LinearScale>(val: T) -> T {
    val.scale(KTS2MS)
}

/// Convert meters per second to miles per hour.
pub fn ms2mph<T: LinearScale>(val: T) -> T {
    val.scale(MS2MPH)
}

/// Convert miles per hour to meters per second.
pub fn mph2ms<T: LinearScale>(val: T) -> T {
    val.scale(MPH2MS)
}

/// Convert miles per hour to knots.
pub fn mph2kts<T: LinearScale>(val: T) -> T {
    val.scale(MPH2KTS)
}

/// Convert knots to miles per hour.
pub fn kts2mph<T: LinearScale>(val: T) -> T {
    val.scale(KTS2MPH)
}

/// Convert meters to feet.
pub fn m2ft<T: LinearScale>(val: T) -> T {
    val.scale(M2FT)
}

/// Convert feet to meters.
pub fn ft2m<T: LinearScale>(val: T) -> T {
    val.scale(FT2M)
}

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Names the 16-point compass sector a direction in degrees falls in.
pub fn degree_to_compass(deg: f64) -> &'static str {
    let deg = deg.rem_euclid(360.0);
    let sector = (deg / 22.5 + 0.5) as usize;
    COMPASS[sector % 16]
}
