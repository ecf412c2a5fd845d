use dropdom::{lighten, mix, Overrides, Rgb, Visibility};

#[test]
fn test_overrides_visible_and_clear() {
    let mut overrides = Overrides::visible();
    assert!(overrides.is_visible());
    assert_eq!(overrides.opacity, Some(1.0));
    assert_eq!(overrides.translate_y, Some(0));

    overrides.clear();
    assert!(overrides.is_clear());
    assert!(!overrides.is_visible());
    assert_eq!(overrides.visibility, None);
}

#[test]
fn test_mix_endpoints() {
    let under = Rgb::new(20, 30, 40);
    let over = Rgb::new(200, 180, 160);

    assert_eq!(mix(under, over, 0.0), under);
    assert_eq!(mix(under, over, 1.0), over);

    // Out-of-range alpha clamps instead of extrapolating
    assert_eq!(mix(under, over, 2.0), over);
    assert_eq!(mix(under, over, -1.0), under);
}

#[test]
fn test_mix_midpoint_lands_between() {
    let under = Rgb::new(0, 0, 0);
    let over = Rgb::new(255, 255, 255);
    let mid = mix(under, over, 0.5);

    assert!(mid.r > 0 && mid.r < 255);
    assert_eq!(mid.r, mid.g);
    assert_eq!(mid.g, mid.b);
}

#[test]
fn test_lighten_raises_a_gray() {
    let gray = Rgb::new(100, 100, 100);
    let lighter = lighten(gray, 0.2);

    assert!(lighter.r > gray.r);
    assert!(lighter.g > gray.g);
    assert!(lighter.b > gray.b);

    // Already-white stays clamped at white
    let white = Rgb::new(255, 255, 255);
    assert_eq!(lighten(white, 0.5), white);
}

#[test]
fn test_visibility_override_round_trip() {
    let mut overrides = Overrides::new();
    assert!(overrides.is_clear());

    overrides.visibility = Some(Visibility::Hidden);
    assert!(!overrides.is_visible());
    assert!(!overrides.is_clear());

    overrides.visibility = Some(Visibility::Visible);
    assert!(overrides.is_visible());
}
