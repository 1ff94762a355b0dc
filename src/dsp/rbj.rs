use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::biquad::{unit_phasor, Biquad, BiquadFilter, Coefficients};
use crate::types::{FloatT, Real};

/*
Cookbook Biquads
================

The usual EQ shapes, with coefficients from Robert Bristow-Johnson's audio EQ
cookbook. All of them share the same intermediate quantities:

    ω0 = 2π·freq            (freq normalised, 0 < freq < 0.5)
    α  = sin ω0 / (2·Q)
    A  = 10^(gain_db / 40)  (peaking and shelving only)

The second `set_params` argument means different things per flavour:

| flavour    | param      | response                                 |
| ---------- | ---------- | ---------------------------------------- |
| LowPass    | Q          | 1 at DC, 0 at Nyquist, Q at freq         |
| HighPass   | Q          | 0 at DC, 1 at Nyquist, Q at freq         |
| BandPass   | Q          | 1 at freq, 0 at DC and Nyquist           |
| Notch      | Q          | 0 at freq, 1 elsewhere far from it       |
| AllPass    | Q          | 1 everywhere, phase turns around freq    |
| Peaking    | gain in dB | 10^(dB/20) at freq, 1 at DC and Nyquist  |
| LowShelf   | gain in dB | 10^(dB/20) at DC, 1 at Nyquist           |
| HighShelf  | gain in dB | 1 at DC, 10^(dB/20) at Nyquist           |

Peaking and shelving take their Q from the filter itself (`set_q`), default
1/√2, which gives shelves without overshoot.

Coefficients are left unnormalised; `Biquad` divides by p0.
*/

/// The cookbook filter shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbjKind {
    LowPass,
    HighPass,
    BandPass,
    Notch,
    AllPass,
    Peaking,
    LowShelf,
    HighShelf,
}

impl RbjKind {
    pub const ALL: [RbjKind; 8] = [
        RbjKind::LowPass,
        RbjKind::HighPass,
        RbjKind::BandPass,
        RbjKind::Notch,
        RbjKind::AllPass,
        RbjKind::Peaking,
        RbjKind::LowShelf,
        RbjKind::HighShelf,
    ];

    /// True when the second parameter is a gain in dB rather than a Q.
    pub fn uses_gain(self) -> bool {
        matches!(self, RbjKind::Peaking | RbjKind::LowShelf | RbjKind::HighShelf)
    }

    /// Next flavour in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// A neutral second parameter: Butterworth Q, or 0 dB.
    pub fn default_param<T: Real>(self) -> T {
        if self.uses_gain() {
            T::zero()
        } else {
            T::FRAC_1_SQRT_2()
        }
    }

    /// `(poles, zeros)` for this shape.
    ///
    /// `shelf_q` is only read by the gain flavours.
    pub fn design<T: Real>(self, freq: T, param: T, shelf_q: T) -> (Coefficients<T>, Coefficients<T>) {
        let one = T::one();
        let two = T::lit(2.0);

        let phasor = unit_phasor(T::TAU() * freq);
        let (cos_w0, sin_w0) = (phasor.re, phasor.im);

        let q = if self.uses_gain() { shelf_q } else { param };
        let alpha = sin_w0 / (two * q);

        match self {
            RbjKind::LowPass => {
                let b1 = one - cos_w0;
                (
                    [one + alpha, -two * cos_w0, one - alpha],
                    [b1 / two, b1, b1 / two],
                )
            }
            RbjKind::HighPass => {
                let b1 = one + cos_w0;
                (
                    [one + alpha, -two * cos_w0, one - alpha],
                    [b1 / two, -b1, b1 / two],
                )
            }
            RbjKind::BandPass => (
                [one + alpha, -two * cos_w0, one - alpha],
                [alpha, T::zero(), -alpha],
            ),
            RbjKind::Notch => (
                [one + alpha, -two * cos_w0, one - alpha],
                [one, -two * cos_w0, one],
            ),
            RbjKind::AllPass => (
                [one + alpha, -two * cos_w0, one - alpha],
                [one - alpha, -two * cos_w0, one + alpha],
            ),
            RbjKind::Peaking => {
                let a = gain_factor(param);
                (
                    [one + alpha / a, -two * cos_w0, one - alpha / a],
                    [one + alpha * a, -two * cos_w0, one - alpha * a],
                )
            }
            RbjKind::LowShelf => {
                let a = gain_factor(param);
                let k = two * a.sqrt() * alpha;
                let (ap1, am1) = (a + one, a - one);
                (
                    [
                        ap1 + am1 * cos_w0 + k,
                        -two * (am1 + ap1 * cos_w0),
                        ap1 + am1 * cos_w0 - k,
                    ],
                    [
                        a * (ap1 - am1 * cos_w0 + k),
                        two * a * (am1 - ap1 * cos_w0),
                        a * (ap1 - am1 * cos_w0 - k),
                    ],
                )
            }
            RbjKind::HighShelf => {
                let a = gain_factor(param);
                let k = two * a.sqrt() * alpha;
                let (ap1, am1) = (a + one, a - one);
                (
                    [
                        ap1 - am1 * cos_w0 + k,
                        two * (am1 - ap1 * cos_w0),
                        ap1 - am1 * cos_w0 - k,
                    ],
                    [
                        a * (ap1 + am1 * cos_w0 + k),
                        -two * a * (am1 + ap1 * cos_w0),
                        a * (ap1 + am1 * cos_w0 - k),
                    ],
                )
            }
        }
    }
}

impl fmt::Display for RbjKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RbjKind::LowPass => "lowpass",
            RbjKind::HighPass => "highpass",
            RbjKind::BandPass => "bandpass",
            RbjKind::Notch => "notch",
            RbjKind::AllPass => "allpass",
            RbjKind::Peaking => "peaking",
            RbjKind::LowShelf => "low shelf",
            RbjKind::HighShelf => "high shelf",
        };
        f.write_str(name)
    }
}

/// Amplitude factor A = 10^(dB/40), the square root of the linear gain.
#[inline]
fn gain_factor<T: Real>(gain_db: T) -> T {
    T::lit(10.0).powf(gain_db / T::lit(40.0))
}

/// Normalised centre/corner frequency of [`RbjBiquad::new`].
pub const DEFAULT_FREQ: f64 = 0.1;

/// A biquad whose coefficients come from one of the cookbook shapes.
///
/// Remembers the last frequency and parameter so that changing the shape or
/// the shelf Q re-derives coefficients straight away.
#[derive(Debug, Clone, Copy)]
pub struct RbjBiquad<T = FloatT> {
    kind: RbjKind,
    freq: T,
    param: T,
    shelf_q: T,
    biquad: Biquad<T>,
}

impl<T: Real> RbjBiquad<T> {
    pub fn new(kind: RbjKind) -> Self {
        Self::with_params(kind, T::lit(DEFAULT_FREQ), kind.default_param())
    }

    pub fn with_params(kind: RbjKind, freq: T, param: T) -> Self {
        let mut filter = Self {
            kind,
            freq,
            param,
            shelf_q: T::FRAC_1_SQRT_2(),
            biquad: Biquad::new(),
        };
        filter.set_params(freq, param);
        filter
    }

    pub fn lowpass(freq: T, q: T) -> Self {
        Self::with_params(RbjKind::LowPass, freq, q)
    }

    pub fn highpass(freq: T, q: T) -> Self {
        Self::with_params(RbjKind::HighPass, freq, q)
    }

    pub fn peaking(freq: T, gain_db: T) -> Self {
        Self::with_params(RbjKind::Peaking, freq, gain_db)
    }

    pub fn kind(&self) -> RbjKind {
        self.kind
    }

    pub fn freq(&self) -> T {
        self.freq
    }

    pub fn param(&self) -> T {
        self.param
    }

    pub fn shelf_q(&self) -> T {
        self.shelf_q
    }

    /// Switches shape, keeping frequency and parameter.
    pub fn set_kind(&mut self, kind: RbjKind) {
        self.kind = kind;
        self.set_params(self.freq, self.param);
    }

    /// Q used by the peaking and shelving shapes.
    pub fn set_shelf_q(&mut self, q: T) {
        self.shelf_q = q;
        self.set_params(self.freq, self.param);
    }
}

impl<T: Real> BiquadFilter<T> for RbjBiquad<T> {
    fn biquad(&self) -> &Biquad<T> {
        &self.biquad
    }

    fn biquad_mut(&mut self) -> &mut Biquad<T> {
        &mut self.biquad
    }

    fn set_params(&mut self, freq: T, param: T) {
        self.freq = freq;
        self.param = param;

        let (poles, zeros) = self.kind.design(freq, param, self.shelf_q);
        tracing::trace!(kind = %self.kind, ?freq, ?param, ?poles, ?zeros, "biquad coefficients");
        self.set_coefficients(poles, zeros);
    }
}
