//! Power-spectrum analysis of field snapshots.

use kaluza_grid::{fft, ComplexGrid};

/// Number of dominant modes reported.
const DOMINANT_MODES: usize = 5;

/// One frequency-space mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Mode {
    /// Frequency-bin coordinate, one entry per axis.
    pub bin: Vec<usize>,
    /// Angular wavenumber per axis.
    pub wavenumbers: Vec<f64>,
    /// Squared transform magnitude at this bin.
    pub power: f64,
}

/// Result of [`spectral_analysis`].
#[derive(Clone, Debug)]
pub struct SpectralReport {
    /// Squared transform magnitude per frequency bin, in flat bin order.
    pub power: Vec<f64>,
    /// The top bins by power, descending.
    pub dominant_modes: Vec<Mode>,
    /// Shannon entropy `−Σ pᵢ·ln pᵢ` of the normalized power
    /// distribution. Zero for a single-mode field, `ln(bins)` for white
    /// noise.
    pub spectral_entropy: f64,
}

/// Forward-transform a field and derive its power spectrum, dominant
/// modes, and spectral entropy.
pub fn spectral_analysis(field: &ComplexGrid) -> SpectralReport {
    let shape = field.shape().clone();
    let hat = fft::forward(field);
    let power: Vec<f64> = hat.as_slice().iter().map(|z| z.norm_sqr()).collect();

    let mut order: Vec<usize> = (0..power.len()).collect();
    order.sort_by(|&a, &b| power[b].partial_cmp(&power[a]).expect("power is finite"));
    let dominant_modes = order
        .iter()
        .take(DOMINANT_MODES)
        .map(|&i| {
            let bin = shape.coord(i).to_vec();
            let wavenumbers = bin
                .iter()
                .enumerate()
                .map(|(axis, &b)| fft::wavenumber(&shape, axis, b))
                .collect();
            Mode {
                bin,
                wavenumbers,
                power: power[i],
            }
        })
        .collect();

    let total: f64 = power.iter().sum();
    let spectral_entropy = if total > 0.0 {
        -power
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| {
                let q = p / total;
                q * q.ln()
            })
            .sum::<f64>()
    } else {
        0.0
    };

    SpectralReport {
        power,
        dominant_modes,
        spectral_entropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaluza_grid::GridShape;
    use num_complex::Complex64;

    #[test]
    fn single_mode_field_has_zero_entropy() {
        let n = 16;
        let shape = GridShape::new(&[n], 1.0).unwrap();
        let field = ComplexGrid::from_fn(shape, |c| {
            let phase = 2.0 * std::f64::consts::PI * 4.0 * c[0] as f64 / n as f64;
            Complex64::new(phase.cos(), phase.sin())
        });
        let report = spectral_analysis(&field);
        assert_eq!(report.dominant_modes[0].bin, vec![4]);
        assert!(
            report.spectral_entropy < 1e-9,
            "entropy {}",
            report.spectral_entropy
        );
    }

    #[test]
    fn uniform_spectrum_has_maximal_entropy() {
        // A delta impulse transforms to uniform power across all bins.
        let n = 16;
        let shape = GridShape::new(&[n], 1.0).unwrap();
        let mut field = ComplexGrid::zeros(shape);
        field.set(3, Complex64::new(1.0, 0.0));
        let report = spectral_analysis(&field);
        let max_entropy = (n as f64).ln();
        assert!(
            (report.spectral_entropy - max_entropy).abs() < 1e-9,
            "entropy {} vs ln(n) {max_entropy}",
            report.spectral_entropy
        );
    }

    #[test]
    fn reports_five_modes_sorted_by_power() {
        let shape = GridShape::new(&[8, 8], 1.0).unwrap();
        let field = ComplexGrid::from_fn(shape, |c| {
            // Two modes with distinct weights plus a DC offset.
            let a = 2.0 * std::f64::consts::PI * c[0] as f64 / 8.0;
            let b = 2.0 * std::f64::consts::PI * 2.0 * c[1] as f64 / 8.0;
            Complex64::new(3.0 + 2.0 * a.cos() + b.cos(), 0.0)
        });
        let report = spectral_analysis(&field);
        assert_eq!(report.dominant_modes.len(), 5);
        for pair in report.dominant_modes.windows(2) {
            assert!(pair[0].power >= pair[1].power);
        }
        // DC dominates.
        assert_eq!(report.dominant_modes[0].bin, vec![0, 0]);
    }

    #[test]
    fn power_has_one_entry_per_bin() {
        let shape = GridShape::new(&[4, 4, 4], 1.0).unwrap();
        let field = ComplexGrid::zeros(shape);
        let report = spectral_analysis(&field);
        assert_eq!(report.power.len(), 64);
        assert_eq!(report.spectral_entropy, 0.0);
    }
}
