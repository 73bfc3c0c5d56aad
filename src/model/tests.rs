use super::*;

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        assert!(
            ($a - $b).abs() < 1e-5,
            "assertion failed: `(left == right)` (left: `{:?}`, right: `{:?}`)",
            $a,
            $b
        );
    };
}

fn assert_rgba_eq(a: Rgba, b: Rgba) {
    assert_approx_eq!(a.red(), b.red());
    assert_approx_eq!(a.green(), b.green());
    assert_approx_eq!(a.blue(), b.blue());
    assert_approx_eq!(a.alpha(), b.alpha());
}

#[test]
fn test_seed_survives_both_spaces() {
    let seeds = [
        Rgba::from_rgba(1.0, 0.0, 0.0, 1.0),
        Rgba::from_rgba(0.25, 0.5, 0.75, 0.3),
        Rgba::from_rgba(0.9, 0.9, 0.9, 0.0),
        Rgba::from_rgb(12, 200, 99),
        Rgba::BLACK,
    ];
    for seed in seeds {
        for space in [ColorSpace::Rgba, ColorSpace::Hsba] {
            let model = ColorModel::new(seed, space);
            assert_eq!(model.space(), space);
            assert_rgba_eq(model.as_rgba(), seed);
        }
    }
}

#[test]
fn test_set_channel_clamps() {
    let mut model = ColorModel::new(Rgba::default(), ColorSpace::Rgba);
    model.set_channel(Channel::First, -0.5);
    assert_eq!(model.channel(Channel::First), 0.0);
    model.set_channel(Channel::First, 1.7);
    assert_eq!(model.channel(Channel::First), 1.0);
}

#[test]
fn test_set_channel_has_no_side_effects() {
    let mut model = ColorModel::new(Rgba::from_rgba(0.2, 0.4, 0.6, 0.8), ColorSpace::Rgba);
    model.set_channel(Channel::Second, 0.9);
    assert_eq!(model.current_color().channels(), [0.2, 0.9, 0.6, 0.8]);

    model.set_channel(Channel::Alpha, 0.1);
    assert_rgba_eq(model.as_rgba(), Rgba::from_rgba(0.2, 0.9, 0.6, 0.1));
}

#[test]
fn test_hsba_space_resolves_through_conversion() {
    let mut model = ColorModel::new(Rgba::from_rgba(1.0, 0.0, 0.0, 1.0), ColorSpace::Hsba);
    model.set_channel(Channel::First, 1.0 / 3.0);
    assert_rgba_eq(model.as_rgba(), Rgba::from_rgba(0.0, 1.0, 0.0, 1.0));
    model.set_channel(Channel::Third, 0.5);
    assert_rgba_eq(model.as_rgba(), Rgba::from_rgba(0.0, 0.5, 0.0, 1.0));
}

#[test]
fn test_desaturated_hue_reads_zero() {
    let mut model = ColorModel::new(Rgba::from_hsb(0.5, 1.0, 1.0, 1.0), ColorSpace::Hsba);
    model.set_channel(Channel::Second, 0.0);

    let (h, s, b, a) = model.hsba();
    assert_eq!(h, 0.0);
    assert!(!h.is_nan());
    assert_eq!(s, 0.0);
    assert_approx_eq!(b, 1.0);
    assert_approx_eq!(a, 1.0);
    // The slider keeps its own position.
    assert_approx_eq!(model.channel(Channel::First), 0.5);
}

#[test]
fn test_labels_and_hex() {
    let model = ColorModel::new(Rgba::from_rgb(255, 128, 0), ColorSpace::Rgba);
    assert_eq!(model.channel_labels(), ["Red", "Green", "Blue"]);
    assert_eq!(model.hex(), "FF8000");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn component() -> impl Strategy<Value = f64> {
        0.0_f64..=1.0
    }

    fn space() -> impl Strategy<Value = ColorSpace> {
        prop_oneof![Just(ColorSpace::Rgba), Just(ColorSpace::Hsba)]
    }

    proptest! {
        #[test]
        fn seed_survives_init(
            r in component(),
            g in component(),
            b in component(),
            a in component(),
            space in space(),
        ) {
            let seed = Rgba::from_rgba(r, g, b, a);
            let back = ColorModel::new(seed, space).as_rgba();
            prop_assert!((back.red() - r).abs() < 1e-5, "r: {} vs {}", back.red(), r);
            prop_assert!((back.green() - g).abs() < 1e-5, "g: {} vs {}", back.green(), g);
            prop_assert!((back.blue() - b).abs() < 1e-5, "b: {} vs {}", back.blue(), b);
            prop_assert!((back.alpha() - a).abs() < 1e-5, "a: {} vs {}", back.alpha(), a);
        }

        #[test]
        fn set_channel_stays_in_unit_range(value in -10.0_f64..10.0, index in 0usize..4) {
            let mut model = ColorModel::new(Rgba::default(), ColorSpace::Hsba);
            let channel = Channel::from_index(index).unwrap();
            model.set_channel(channel, value);
            prop_assert_eq!(model.channel(channel), value.clamp(0.0, 1.0));
        }
    }
}
