use super::*;

#[test]
fn fnv_hash_is_stable_across_split_writes() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"loopreel");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'l');
    b.write_bytes(b"oopreel");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_float_bit_patterns() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(0, 200), 0);
}

#[test]
fn sigmoid_is_half_at_midpoint() {
    assert!((sigmoid(0.6, 18.0, 0.6) - 0.5).abs() < 1e-12);
    assert!(sigmoid(0.0, 18.0, 0.6) < 0.001);
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(85_760), "85,760");
    assert_eq!(group_thousands(128_000), "128,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}
