use super::*;

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn half_alpha_blends() {
    let out = over([0, 0, 200, 255], [100, 0, 0, 128]);
    assert_eq!(out[0], 100);
    assert_eq!(out[2], 100);
    assert_eq!(out[3], 255);
}

#[test]
fn length_mismatch_is_an_error() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn flatten_alpha_zero_yields_background() {
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &[0, 0, 0, 0], [10, 20, 30]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_opaque_is_identity() {
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &[1, 2, 3, 255], [10, 20, 30]).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}
