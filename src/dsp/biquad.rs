//! Second-order IIR filter core and the extension point for filter flavours.

use num_complex::Complex;

use crate::trig::fast;
use crate::types::{FloatT, Real};

/*
Biquad Filters
==============

A biquad is a two-pole, two-zero recursive filter. Every classic EQ shape
(lowpass, highpass, shelf, peak, notch, allpass) is the same difference
equation with different coefficients, so the state and the per-sample math
live in one place ([`Biquad`]) and each flavour only decides the numbers
([`BiquadFilter::set_params`]).

Vocabulary
----------

  poles     p0, p1, p2. Denominator (feedback) coefficients.
  zeros     z0, z1, z2. Numerator (feedforward) coefficients.
  w         The intermediate value of the direct form II: the input after
            the feedback path, before the feedforward path.
  state     The two most recent w values, oldest first.


Transfer Function
-----------------

            z0 + z1·z⁻¹ + z2·z⁻²
    H(z) = ----------------------
            p0 + p1·z⁻¹ + p2·z⁻²

Coefficients are not normalised: p0 is divided out while processing, through
a reciprocal cached whenever coefficients change. p0 = 0 is a precondition
violation and produces inf/NaN.


Direct Form II
--------------

    in ──►(+)──► ×1/p0 ──► w ──► ×z0 ──►(+)──► out
           ▲               │             ▲
           │              z⁻¹            │
           ├──── ×−p1 ◄────┼────► ×z1 ───┤
           │              z⁻¹            │
           └──── ×−p2 ◄────┴────► ×z2 ───┘

Per sample:

    w     = (in − p1·w[n-1] − p2·w[n-2]) / p0
    out   = z0·w + z1·w[n-1] + z2·w[n-2]
    state = [w[n-1], w]

With poles = zeros = [1, 0, 0] the filter is a wire: w = in, out = in, and
the state holds the last two inputs.


Frequency and Phase Response
----------------------------

Evaluating H on the unit circle, z = e^{jω} with ω = 2π·freq, gives the
complex gain at that frequency. |H| is the magnitude response, arg H the
phase response in radians.

z⁻¹ = e^{−jω} comes from the fast Padé cos/sin. Those are only accurate to
about 1e-4 near ±π, so the phasor is computed at ω/2 and squared, keeping the
approximants inside |x| <= π/2 where they are good to ~1e-8.
*/

/// Filter order of every biquad.
pub const ORDER: usize = 2;

/// Coefficient array of a biquad, index k multiplying z⁻ᵏ.
pub type Coefficients<T = FloatT> = [T; ORDER + 1];

/// e^{jω} from the fast approximants, via the half angle.
///
/// Accurate for |ω| <= π, i.e. normalised frequencies up to Nyquist.
#[inline]
pub(crate) fn unit_phasor<T: Real>(omega: T) -> Complex<T> {
    let half = omega * T::lit(0.5);
    let h = Complex::new(fast::cos(half), fast::sin(half));
    h * h
}

/// Coefficients and state of a second-order filter section.
///
/// A fresh `Biquad` passes its input through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad<T = FloatT> {
    poles: Coefficients<T>,
    zeros: Coefficients<T>,
    pole_gain: T, // 1 / poles[0]
    state: [T; ORDER],
}

impl<T: Real> Biquad<T> {
    pub fn new() -> Self {
        let identity = [T::one(), T::zero(), T::zero()];
        Self::with_coefficients(identity, identity)
    }

    pub fn with_coefficients(poles: Coefficients<T>, zeros: Coefficients<T>) -> Self {
        let mut biquad = Self {
            poles,
            zeros,
            pole_gain: T::one(),
            state: [T::zero(); ORDER],
        };
        biquad.set_coefficients(poles, zeros);
        biquad
    }

    /// Returns the filter to initial conditions. Coefficients are kept.
    pub fn reset(&mut self) {
        self.state = [T::zero(); ORDER];
    }

    /// Assigns coefficients as given, without validation. State is kept so
    /// coefficients can change while running.
    pub fn set_coefficients(&mut self, poles: Coefficients<T>, zeros: Coefficients<T>) {
        self.poles = poles;
        self.zeros = zeros;
        self.pole_gain = T::one() / poles[0];
    }

    /// The coefficients exactly as last assigned, `(poles, zeros)`.
    pub fn coefficients(&self) -> (Coefficients<T>, Coefficients<T>) {
        (self.poles, self.zeros)
    }

    pub fn poles(&self) -> &Coefficients<T> {
        &self.poles
    }

    pub fn zeros(&self) -> &Coefficients<T> {
        &self.zeros
    }

    /// The two most recent intermediate values, oldest first.
    pub fn state(&self) -> &[T; ORDER] {
        &self.state
    }

    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let [_, p1, p2] = self.poles;
        let [z0, z1, z2] = self.zeros;
        let [older, newer] = self.state;

        let w = (input - p1 * newer - p2 * older) * self.pole_gain;
        let output = z0 * w + z1 * newer + z2 * older;

        self.state = [newer, w];
        output
    }

    /// H(e^{jω}) at normalised frequency `freq`.
    ///
    /// Undefined (inf/NaN) when the pole polynomial vanishes at `freq`.
    pub fn transfer_function(&self, freq: T) -> Complex<T> {
        // z⁻¹ = e^{−jω}
        let z1 = unit_phasor(-T::TAU() * freq);
        let z2 = z1 * z1;

        let zero_sum = Complex::new(self.zeros[0], T::zero())
            + z1.scale(self.zeros[1])
            + z2.scale(self.zeros[2]);
        let pole_sum = Complex::new(self.poles[0], T::zero())
            + z1.scale(self.poles[1])
            + z2.scale(self.poles[2]);

        zero_sum / pole_sum
    }

    /// Magnitude response |H| at normalised frequency `freq`.
    pub fn frequency_response(&self, freq: T) -> T {
        self.transfer_function(freq).norm()
    }

    /// Phase response arg H at normalised frequency `freq`, in radians.
    pub fn phase_response(&self, freq: T) -> T {
        self.transfer_function(freq).arg()
    }
}

impl<T: Real> Default for Biquad<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A biquad flavour: something that maps musical parameters to coefficients.
///
/// Implementors own a [`Biquad`] and provide [`set_params`](Self::set_params);
/// processing and response analysis come for free and are identical for
/// every flavour.
pub trait BiquadFilter<T: Real = FloatT> {
    fn biquad(&self) -> &Biquad<T>;

    fn biquad_mut(&mut self) -> &mut Biquad<T>;

    /// Computes coefficients from a normalised frequency and a flavour
    /// specific second parameter, then applies them with
    /// [`set_coefficients`](Self::set_coefficients).
    fn set_params(&mut self, freq: T, param: T);

    fn reset(&mut self) {
        self.biquad_mut().reset();
    }

    fn set_coefficients(&mut self, poles: Coefficients<T>, zeros: Coefficients<T>) {
        self.biquad_mut().set_coefficients(poles, zeros);
    }

    #[inline]
    fn process(&mut self, input: T) -> T {
        self.biquad_mut().process(input)
    }

    fn transfer_function(&self, freq: T) -> Complex<T> {
        self.biquad().transfer_function(freq)
    }

    fn frequency_response(&self, freq: T) -> T {
        self.biquad().frequency_response(freq)
    }

    fn phase_response(&self, freq: T) -> T {
        self.biquad().phase_response(freq)
    }
}
