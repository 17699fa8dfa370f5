use twinscope::{adc_to_volts, SampleSource};

#[test]
fn adc_conversion_spans_the_reference_range() {
    assert_eq!(adc_to_volts(0, 1023, 5.0), 0.0);
    assert_eq!(adc_to_volts(1023, 1023, 5.0), 5.0);
    let mid = adc_to_volts(512, 1023, 5.0);
    assert!((mid - 2.5).abs() < 0.01, "got {}", mid);
}

#[test]
fn adc_conversion_does_not_clamp_overrange_readings() {
    // A reading above max_raw maps above the reference voltage.
    assert!(adc_to_volts(2046, 1023, 5.0) > 5.0);
}

#[test]
fn adc_conversion_with_zero_range_is_zero() {
    assert_eq!(adc_to_volts(100, 0, 5.0), 0.0);
}

#[test]
fn closures_are_sample_sources() {
    let mut n = 0.0;
    let mut source = move || {
        n += 1.0;
        (n, -n)
    };
    assert_eq!(source.read_sample(), (1.0, -1.0));
    assert_eq!(source.read_sample(), (2.0, -2.0));
}
