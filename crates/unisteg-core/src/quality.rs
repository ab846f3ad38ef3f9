//! Embedding distortion metrics.
//!
//! Closed-form statistics over two equal-sized RGB pixel matrices: how much
//! did concealing perturb the cover? All metrics treat the images as flat
//! sequences of channel bytes; the histogram statistics work on per-pixel
//! channel averages.

use image::RgbImage;

use crate::address::CHANNELS;
use crate::error::UniStegError;
use crate::result::Result;

/// Distribution statistics of per-pixel channel averages, for histogram
/// style comparison of original and stego image.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStats {
    pub mean_original: f64,
    pub mean_stego: f64,
    pub stddev_original: f64,
    pub stddev_stego: f64,
    pub min_max_original: (f64, f64),
    pub min_max_stego: (f64, f64),
}

/// All metrics for one original/stego pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mse: f64,
    pub psnr: f64,
    pub quality_index: f64,
    pub histogram: HistogramStats,
}

/// Computes every metric at once.
pub fn evaluate(original: &RgbImage, stego: &RgbImage) -> Result<Report> {
    Ok(Report {
        mse: mse(original, stego)?,
        psnr: psnr(original, stego)?,
        quality_index: quality_index(original, stego)?,
        histogram: histogram_stats(original, stego)?,
    })
}

/// Mean Square Error over all channel bytes. Lower is better.
pub fn mse(original: &RgbImage, stego: &RgbImage) -> Result<f64> {
    ensure_same_dimensions(original, stego)?;

    let sum: f64 = original
        .as_raw()
        .iter()
        .zip(stego.as_raw().iter())
        .map(|(&a, &b)| {
            let diff = a as f64 - b as f64;
            diff * diff
        })
        .sum();

    Ok(sum / original.as_raw().len() as f64)
}

/// Peak Signal-to-Noise Ratio in dB. Higher is better; infinite for
/// identical images.
pub fn psnr(original: &RgbImage, stego: &RgbImage) -> Result<f64> {
    let mse = mse(original, stego)?;

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * ((255.0 * 255.0) / mse).log10())
}

/// Universal Quality Index over the flat channel byte sequences. Higher is
/// better; infinite when means or variances degenerate to zero.
pub fn quality_index(original: &RgbImage, stego: &RgbImage) -> Result<f64> {
    ensure_same_dimensions(original, stego)?;

    let n = original.as_raw().len() as f64;
    let avg1 = original.as_raw().iter().map(|&v| v as f64).sum::<f64>() / n;
    let avg2 = stego.as_raw().iter().map(|&v| v as f64).sum::<f64>() / n;

    let var1: f64 = original
        .as_raw()
        .iter()
        .map(|&v| (v as f64 - avg1).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let var2: f64 = stego
        .as_raw()
        .iter()
        .map(|&v| (v as f64 - avg2).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    let covariance: f64 = original
        .as_raw()
        .iter()
        .zip(stego.as_raw().iter())
        .map(|(&a, &b)| (a as f64 - avg1) * (b as f64 - avg2))
        .sum::<f64>()
        / (n - 1.0);

    if (var1 == 0.0 && var2 == 0.0) || avg1 == 0.0 || avg2 == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok((4.0 * covariance * avg1 * avg2) / ((var1 + var2) * (avg1 * avg1 + avg2 * avg2)))
}

/// Distribution statistics of per-pixel channel averages for both images.
pub fn histogram_stats(original: &RgbImage, stego: &RgbImage) -> Result<HistogramStats> {
    ensure_same_dimensions(original, stego)?;

    let (mean1, stddev1, min_max1) = pixel_average_stats(original);
    let (mean2, stddev2, min_max2) = pixel_average_stats(stego);

    Ok(HistogramStats {
        mean_original: mean1,
        mean_stego: mean2,
        stddev_original: stddev1,
        stddev_stego: stddev2,
        min_max_original: min_max1,
        min_max_stego: min_max2,
    })
}

fn pixel_average_stats(image: &RgbImage) -> (f64, f64, (f64, f64)) {
    let averages: Vec<f64> = image
        .as_raw()
        .chunks_exact(CHANNELS)
        .map(|px| px.iter().map(|&v| v as f64).sum::<f64>() / CHANNELS as f64)
        .collect();

    let n = averages.len() as f64;
    let mean = averages.iter().sum::<f64>() / n;
    let variance = averages.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let min = averages.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = averages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    (mean, variance.sqrt(), (min, max))
}

fn ensure_same_dimensions(original: &RgbImage, stego: &RgbImage) -> Result<()> {
    if original.dimensions() != stego.dimensions() {
        let (w1, h1) = original.dimensions();
        let (w2, h2) = stego.dimensions();
        return Err(UniStegError::DimensionMismatch(w1, h1, w2, h2));
    }

    Ok(())
}
