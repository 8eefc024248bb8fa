//! Statistical helpers shared by the detector bank

/// Compute RMS (Root Mean Square)
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Compute median of a slice (sorts a copy)
pub fn median(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Compute the p-th percentile (0-100) with linear interpolation,
/// matching numpy's default behavior.
pub fn percentile(data: &[f32], p: f32) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f32;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f32;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Compute spectral centroid (energy-weighted mean frequency)
pub fn spectral_centroid(magnitudes: &[f32], sample_rate: u32) -> f32 {
    let total_energy: f32 = magnitudes.iter().sum();
    if total_energy < 1e-10 {
        return 0.0;
    }

    let weighted_sum: f32 = magnitudes
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            let freq = i as f32 * sample_rate as f32 / (2.0 * magnitudes.len() as f32);
            freq * m
        })
        .sum();

    weighted_sum / total_energy
}

/// Convert amplitude to dB (relative to 1.0)
pub fn amplitude_to_db(amplitude: f32) -> f32 {
    if amplitude > 1e-10 {
        20.0 * amplitude.log10()
    } else {
        -200.0
    }
}

/// Convert dB to amplitude
pub fn db_to_amplitude(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms() {
        let samples = vec![1.0, -1.0, 1.0, -1.0];
        assert!((rms(&samples) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_percentile_interpolation() {
        let data = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&data, 50.0) - 2.0).abs() < 1e-6);
        assert!((percentile(&data, 95.0) - 3.8).abs() < 1e-5);
        assert!((percentile(&data, 100.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_spectral_centroid_tonal() {
        // Single peak at bin 50 of 100 bins, 8 kHz rate -> 2 kHz centroid
        let mut mags = vec![0.0; 100];
        mags[50] = 1.0;
        let centroid = spectral_centroid(&mags, 8000);
        assert!((centroid - 2000.0).abs() < 1.0);
    }

    #[test]
    fn test_db_round_trip() {
        let amp = 0.25f32;
        assert!((db_to_amplitude(amplitude_to_db(amp)) - amp).abs() < 1e-4);
    }
}
