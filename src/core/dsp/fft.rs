//! FFT processing with windowing

use rustfft::{num_complex::Complex, FftPlanner};

use super::windows::{create_window, WindowType};

/// FFT computation with windowing
pub struct FftProcessor {
    planner: FftPlanner<f32>,
    window: Vec<f32>,
    fft_size: usize,
}

impl FftProcessor {
    pub fn new(fft_size: usize, window_type: WindowType) -> Self {
        let window = create_window(fft_size, window_type);
        Self {
            planner: FftPlanner::new(),
            window,
            fft_size,
        }
    }

    /// Compute complex spectrum (positive frequencies only)
    pub fn complex_spectrum(&mut self, samples: &[f32]) -> Vec<Complex<f32>> {
        let fft = self.planner.plan_fft_forward(self.fft_size);

        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .take(self.fft_size)
            .enumerate()
            .map(|(i, &s)| Complex::new(s * self.window[i], 0.0))
            .collect();

        // Zero-pad if necessary
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        fft.process(&mut buffer);

        buffer[..self.fft_size / 2].to_vec()
    }

    /// Compute magnitude spectrum
    pub fn magnitude_spectrum(&mut self, samples: &[f32]) -> Vec<f32> {
        self.complex_spectrum(samples)
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im).sqrt())
            .collect()
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}
