use twinscope::SampleBuffer;

#[test]
fn length_is_min_of_pushes_and_capacity() {
    for pushes in 0..10 {
        let mut buf = SampleBuffer::new(4);
        for i in 0..pushes {
            buf.push(i as f64);
        }
        assert_eq!(buf.len(), pushes.min(4), "after {} pushes", pushes);
    }
}

#[test]
fn keeps_last_capacity_values_in_push_order() {
    let mut buf = SampleBuffer::new(3);
    for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
        buf.push(v);
    }
    let contents: Vec<f64> = buf.iter().collect();
    assert_eq!(contents, vec![30.0, 40.0, 50.0]);
}

#[test]
fn eviction_scenario_capacity_five() {
    let mut buf = SampleBuffer::new(5);
    for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
        buf.push(v);
    }
    let contents: Vec<f64> = buf.iter().collect();
    assert_eq!(contents, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn clear_empties_but_keeps_capacity() {
    let mut buf = SampleBuffer::new(8);
    buf.push(1.5);
    buf.push(-2.5);
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 8);
    buf.push(3.0);
    assert_eq!(buf.len(), 1);
}

#[test]
fn latest_returns_newest_sample() {
    let mut buf = SampleBuffer::new(4);
    assert_eq!(buf.latest(), None);
    buf.push(1.0);
    buf.push(7.5);
    assert_eq!(buf.latest(), Some(7.5));
}

#[test]
fn accepts_non_finite_values() {
    let mut buf = SampleBuffer::new(4);
    buf.push(f64::NAN);
    buf.push(f64::INFINITY);
    buf.push(f64::NEG_INFINITY);
    assert_eq!(buf.len(), 3);
    let contents: Vec<f64> = buf.iter().collect();
    assert!(contents[0].is_nan());
    assert_eq!(contents[1], f64::INFINITY);
    assert_eq!(contents[2], f64::NEG_INFINITY);
}
