use crate::trig::fast;
use crate::types::{FloatT, Real};

/*
Euler and State-Variable Filters
================================

Both filters here are discretised analog prototypes. They differ in how the
continuous-time integrators are approximated and in how many responses they
expose.

| filter              | order | responses                      | integrator     |
| ------------------- | ----- | ------------------------------ | -------------- |
| EulerFilter         | 1     | lowpass, highpass              | implicit Euler |
| StateVariableFilter | 2     | lowpass, bandpass, highpass,   | forward Euler  |
|                     |       | notch                          |                |

Frequencies are normalised: cutoff_hz / sample_rate, so the useful range is
(0, 0.5]. Converting from Hz is the caller's job.


EulerFilter
-----------

A one-pole lowpass y' = ω(x − y) stepped with the implicit (backward) Euler
rule. With c = 1 / (π·f) the update becomes

    y[n] = (x[n] + x[n-1] − y[n-1]·(1 − c)) / (1 + c)

The pole sits at (c − 1) / (c + 1), inside the unit circle for every c > 0,
so the filter is stable for any positive cutoff. The highpass output is the
complement, x − y.

    f = 0 gives c = ∞. Not guarded.


StateVariableFilter (Chamberlin)
--------------------------------

Two integrators in a loop with a damping feedback path:

    in ──(+)──► hp ──×f──►(∫)──► bp ──×f──►(∫)──► lp
          ▲ ▲                     │               │
          │ └───────── ×q ────────┘               │
          └───────────────────────────────────────┘

Each sample, in this order (every line reads the one before it):

    hp = in − lp − q·bp
    bp = f·hp + bp
    lp = f·bp + lp
    notch = hp + lp

with f = 2·sin(π·freq) and q the damping ratio (1/Q). The forward-Euler
integrators make the topology unstable for large f or q; it behaves for
freq well below Nyquist/3 and q roughly in (0, 2]. Neither is clamped.
*/

/// Normalised cutoff an [`EulerFilter`] starts with.
pub const DEFAULT_CUTOFF: f64 = 0.1;

/// Single-pole multimode filter using an implicit Euler solver.
#[derive(Debug, Clone, Copy)]
pub struct EulerFilter<T = FloatT> {
    input_state: T,
    output_state: T,
    cutoff_coefficient: T,
}

impl<T: Real> EulerFilter<T> {
    pub fn new() -> Self {
        let mut filter = Self {
            input_state: T::zero(),
            output_state: T::zero(),
            cutoff_coefficient: T::zero(),
        };
        filter.reset();
        filter.set_cutoff(T::lit(DEFAULT_CUTOFF));
        filter
    }

    /// Returns the filter to initial conditions.
    pub fn reset(&mut self) {
        self.input_state = T::zero();
        self.output_state = T::zero();
    }

    /// Sets the normalised cutoff frequency. `f` must be positive.
    pub fn set_cutoff(&mut self, f: T) {
        self.cutoff_coefficient = T::one() / (T::PI() * f);
    }

    /// Feeds one sample. Read the result with [`lowpass`](Self::lowpass) and
    /// [`highpass`](Self::highpass).
    #[inline]
    pub fn process(&mut self, input: T) {
        let c = self.cutoff_coefficient;
        let y = (input + self.input_state - self.output_state * (T::one() - c)) / (T::one() + c);
        self.input_state = input;
        self.output_state = y;
    }

    #[inline]
    pub fn lowpass(&self) -> T {
        self.output_state
    }

    #[inline]
    pub fn highpass(&self) -> T {
        self.input_state - self.output_state
    }
}

impl<T: Real> Default for EulerFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// State-variable (Chamberlin) multimode filter.
#[derive(Debug, Clone, Copy)]
pub struct StateVariableFilter<T = FloatT> {
    highpass: T,
    bandpass: T,
    lowpass: T,
    notch: T,

    frequency_coefficient: T,
    damping_coefficient: T,
}

impl<T: Real> StateVariableFilter<T> {
    /// An unconfigured filter: both coefficients are zero until
    /// [`set_params`](Self::set_params) is called.
    pub fn new() -> Self {
        Self {
            highpass: T::zero(),
            bandpass: T::zero(),
            lowpass: T::zero(),
            notch: T::zero(),
            frequency_coefficient: T::zero(),
            damping_coefficient: T::zero(),
        }
    }

    /// Shorthand for `new` followed by `set_params`.
    pub fn with_params(freq: T, damp: T) -> Self {
        let mut filter = Self::new();
        filter.set_params(freq, damp);
        filter
    }

    pub fn reset(&mut self) {
        self.highpass = T::zero();
        self.bandpass = T::zero();
        self.lowpass = T::zero();
        self.notch = T::zero();
    }

    /// `freq` is the normalised cutoff, `damp` the damping ratio.
    pub fn set_params(&mut self, freq: T, damp: T) {
        self.frequency_coefficient = T::lit(2.0) * fast::sin(T::PI() * freq);
        self.damping_coefficient = damp;
    }

    #[inline]
    pub fn process(&mut self, input: T) {
        let f = self.frequency_coefficient;
        let q = self.damping_coefficient;

        self.highpass = input - self.lowpass - q * self.bandpass;
        self.bandpass = f * self.highpass + self.bandpass;
        self.lowpass = f * self.bandpass + self.lowpass;
        self.notch = self.highpass + self.lowpass;
    }

    #[inline]
    pub fn lowpass(&self) -> T {
        self.lowpass
    }

    #[inline]
    pub fn bandpass(&self) -> T {
        self.bandpass
    }

    #[inline]
    pub fn highpass(&self) -> T {
        self.highpass
    }

    #[inline]
    pub fn notch(&self) -> T {
        self.notch
    }
}

impl<T: Real> Default for StateVariableFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}
