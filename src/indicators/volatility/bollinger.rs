//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBands;

/// Calculate Bollinger Bands over the last `period` closes.
///
/// Middle = SMA(period)
/// Upper/Lower = Middle ± 2σ
/// Bandwidth = 4σ / Middle
///
/// Below `period` samples the middle band carries the SMA's 0.0 sentinel,
/// which collapses all bands to zero. A zero middle band yields bandwidth 0
/// rather than dividing by zero.
pub fn bollinger_bands(closes: &[f64], period: usize) -> BollingerBands {
    let middle = math::sma(closes, period);
    let std_dev = math::std_dev(closes, period, middle);

    let bandwidth = if middle == 0.0 {
        0.0
    } else {
        (std_dev * 4.0) / middle
    };

    BollingerBands {
        upper: middle + std_dev * 2.0,
        middle,
        lower: middle - std_dev * 2.0,
        bandwidth,
    }
}

/// Bollinger Bands with the default 20-sample period
pub fn bollinger_bands_default(closes: &[f64]) -> BollingerBands {
    bollinger_bands(closes, 20)
}
