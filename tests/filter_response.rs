use idsp::analysis::{impulse_response, magnitude_response};
use idsp::prelude::*;

#[test]
fn biquad_flavours_share_one_interface() {
    let mut filters: Vec<Box<dyn BiquadFilter<f64>>> = RbjKind::ALL
        .iter()
        .map(|&kind| Box::new(RbjBiquad::<f64>::new(kind)) as Box<dyn BiquadFilter<f64>>)
        .collect();

    for filter in filters.iter_mut() {
        filter.set_params(0.08, 1.0);
        let output: Vec<f64> = (0..256).map(|n| filter.process((n as f64 * 0.3).sin())).collect();
        assert!(output.iter().all(|s| s.is_finite()));
        filter.reset();
        assert_eq!(filter.process(0.0), 0.0);
    }
}

#[test]
fn measured_response_tracks_transfer_function_in_single_precision() {
    let mut filter = RbjBiquad::<f32>::lowpass(0.1, 0.707);
    let analytic = filter;
    let ir = impulse_response(1024, |x| filter.process(x));

    for point in magnitude_response(&ir).iter().step_by(16) {
        let expected = analytic.frequency_response(point.freq);
        assert!(
            (point.magnitude - expected).abs() < 1e-4,
            "at {}: measured {}, analytic {}",
            point.freq,
            point.magnitude,
            expected
        );
    }
}

#[test]
fn euler_and_svf_agree_on_dc() {
    let mut euler = EulerFilter::<f64>::new();
    euler.set_cutoff(0.05);
    let mut svf = StateVariableFilter::<f64>::with_params(0.05, 1.0);

    for _ in 0..5_000 {
        euler.process(0.5);
        svf.process(0.5);
    }

    assert!((euler.lowpass() - 0.5).abs() < 1e-9);
    assert!((svf.lowpass() - 0.5).abs() < 1e-9);
    assert!(euler.highpass().abs() < 1e-9);
    assert!(svf.highpass().abs() < 1e-9);
}

#[test]
fn default_precision_filters_construct() {
    let mut euler: EulerFilter = EulerFilter::default();
    let mut biquad: Biquad = Biquad::default();
    let x: FloatT = 0.25;
    euler.process(x);
    assert_eq!(biquad.process(x), x);
    assert!(euler.lowpass() > 0.0);
}

#[test]
fn default_frequencies_are_plain_constants() {
    use idsp::dsp::{filter, rbj};

    let mut fresh = EulerFilter::<f64>::new();
    let mut configured = EulerFilter::<f64>::new();
    configured.set_cutoff(filter::DEFAULT_CUTOFF);
    fresh.process(1.0);
    configured.process(1.0);
    assert_eq!(fresh.lowpass(), configured.lowpass());

    assert_eq!(RbjBiquad::<f64>::new(RbjKind::Notch).freq(), rbj::DEFAULT_FREQ);
}
