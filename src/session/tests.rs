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

#[test]
fn test_open_snapshot() {
    let seed = Rgba::from_rgba(0.1, 0.5, 0.9, 0.6);
    let session = PickerSession::open(seed, &PickerConfig::default());
    assert_eq!(session.space(), ColorSpace::Hsba);
    assert_eq!(session.original(), seed);

    let update = session.snapshot();
    assert_approx_eq!(update.preview.red(), 0.1);
    assert_approx_eq!(update.preview.green(), 0.5);
    assert_approx_eq!(update.preview.blue(), 0.9);
    assert_approx_eq!(update.preview.alpha(), 0.6);
    assert_eq!(update.tracks[Channel::First.index()].len(), 21);
    assert_eq!(update.tracks[Channel::Second.index()].len(), 2);
    assert_eq!(update.tracks[Channel::Alpha.index()], GradientSampler::alpha_ramp());
}

#[test]
fn test_set_channel_updates_other_tracks() {
    let config = PickerConfig::with_space(ColorSpace::Rgba);
    let mut session = PickerSession::open(Rgba::BLACK, &config);

    let update = session.set_channel(Channel::First, 1.0);
    assert_eq!(update.preview, Rgba::from_rgba(1.0, 0.0, 0.0, 1.0));
    // Green track now starts from red.
    let green = &update.tracks[Channel::Second.index()];
    assert_eq!(green[0].color, Rgba::from_rgba(1.0, 0.0, 0.0, 1.0));
    assert_eq!(green[1].color, Rgba::from_rgba(1.0, 1.0, 0.0, 1.0));
    // The moved slider's own track does not depend on its value.
    let red = &update.tracks[Channel::First.index()];
    assert_eq!(red[0].color, Rgba::BLACK);

    let update = session.set_channel(Channel::Alpha, 0.25);
    assert_approx_eq!(update.preview.alpha(), 0.25);
    assert_eq!(session.original(), Rgba::BLACK);
}

#[test]
fn test_commit_returns_edited_color() {
    let mut session = PickerSession::open(Rgba::from_rgb(255, 0, 0), &PickerConfig::default());
    session.set_channel(Channel::First, 2.0 / 6.0);
    let picked = session.commit();
    assert_approx_eq!(picked.red(), 0.0);
    assert_approx_eq!(picked.green(), 1.0);
    assert_approx_eq!(picked.blue(), 0.0);
}

#[test]
fn test_custom_hue_resolution() {
    let config = PickerConfig {
        hue_stops: 13,
        ..PickerConfig::default()
    };
    let session = PickerSession::open(Rgba::default(), &config);
    assert_eq!(session.snapshot().tracks[0].len(), 13);
    session.cancel();
}
