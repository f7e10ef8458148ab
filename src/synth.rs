//! Additive harmonic synthesis of the supported waveforms.

use std::f64::consts::PI;

/// Output level applied to the raw waveform before quantization.
const AMPLITUDE: f64 = 0.1;

/// Fixed-point scale used to quantize the scaled waveform to 16-bit samples.
const QUANTIZE_SCALE: f64 = 1024.0;

/// The shape of the wave a note is synthesized with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Decode one of the short names used on the command line.
    pub fn from_name(name: &str) -> Option<Waveform> {
        match name {
            "sin" => Some(Waveform::Sine),
            "sq" => Some(Waveform::Square),
            "saw" => Some(Waveform::Sawtooth),
            _ => None,
        }
    }

    /// The short name, also used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Square => "sq",
            Waveform::Sawtooth => "saw",
        }
    }

    /// Synthesize one note as `round(sample_rate * duration)` signed 16-bit
    /// samples. Pure and deterministic: the same inputs always produce the
    /// same buffer. A non-positive duration yields an empty buffer.
    ///
    /// Sample `n` is taken at phase `2π · n · frequency / sample_rate`,
    /// scaled by the amplitude envelope and truncated toward zero at the
    /// fixed-point scale. No clamping or dithering is applied.
    pub fn samples(self, frequency: f64, duration: f64, sample_rate: u32) -> Vec<i16> {
        let count = (sample_rate as f64 * duration).round().max(0.0) as usize;
        (0..count)
            .map(|n| {
                let phase = 2.0 * PI * n as f64 * frequency / sample_rate as f64;
                let raw = match self {
                    Waveform::Sine => phase.sin(),
                    Waveform::Square => square(phase),
                    Waveform::Sawtooth => sawtooth(phase),
                };
                (raw * AMPLITUDE * QUANTIZE_SCALE) as i16
            })
            .collect()
    }
}

/// Truncated Fourier series of a square wave: the fundamental plus the odd
/// harmonics through the 29th, each weighted by the reciprocal of its
/// harmonic number. The truncation leaves audible Gibbs ripple.
fn square(phase: f64) -> f64 {
    let mut value = phase.sin();
    let mut k = 3;
    while k <= 29 {
        value += (k as f64 * phase).sin() / k as f64;
        k += 2;
    }
    value
}

/// Sawtooth as an alternating harmonic series through the 15th harmonic with
/// coefficients `2/k`. The fundamental carries no such coefficient; that
/// asymmetry is kept so existing renders stay bit-identical.
fn sawtooth(phase: f64) -> f64 {
    let mut value = phase.sin();
    for k in 2..=15 {
        let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
        value += sign * 2.0 / k as f64 * (k as f64 * phase).sin();
    }
    value
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn name_round_trips() {
        for &waveform in &[Waveform::Sine, Waveform::Square, Waveform::Sawtooth] {
            assert_eq!(Waveform::from_name(waveform.name()), Some(waveform));
        }
        assert_eq!(Waveform::from_name("triangle"), None);
    }

    #[test]
    fn buffer_length_is_rounded_duration() {
        assert_eq!(Waveform::Sine.samples(440.0, 1.0, 44100).len(), 44100);
        assert_eq!(Waveform::Square.samples(220.0, 0.25, 44100).len(), 11025);
        assert_eq!(Waveform::Sawtooth.samples(220.0, 0.1, 44100).len(), 4410);
    }

    #[test]
    fn non_positive_duration_yields_empty_buffer() {
        assert!(Waveform::Sine.samples(440.0, 0.0, 44100).is_empty());
        assert!(Waveform::Sine.samples(440.0, -0.25, 44100).is_empty());
    }

    #[test]
    fn generators_are_deterministic() {
        for &waveform in &[Waveform::Sine, Waveform::Square, Waveform::Sawtooth] {
            let first = waveform.samples(330.0, 0.5, 44100);
            let second = waveform.samples(330.0, 0.5, 44100);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn sine_stays_within_the_envelope() {
        let samples = Waveform::Sine.samples(220.0, 1.0, 44100);
        assert!(samples.iter().all(|&s| s.abs() <= 103));
    }

    #[test]
    fn sine_peaks_at_the_quarter_period() {
        // At 11025 Hz and a 44100 Hz rate, sample 1 sits at phase pi/2.
        let samples = Waveform::Sine.samples(11025.0, 0.001, 44100);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[1], 102);
    }
}
