use camtools_api_core::{BundleError, CameraInfo, Folder, ImageBundle};

#[test]
fn widget_default_fixture_matches_default_bundle() {
    let json = camtools_test_fixtures::bundles::json("widget-default").expect("load fixture");
    let bundle = ImageBundle::from_json_str(&json).expect("valid bundle");
    assert_eq!(bundle, ImageBundle::default());
}

#[test]
fn annotated_fixture_keeps_folders_and_recording() {
    let json = camtools_test_fixtures::bundles::json("annotated").expect("load fixture");
    let bundle = ImageBundle::from_json_str(&json).expect("valid bundle");

    for r in [&bundle.image, &bundle.mask, &bundle.normal] {
        assert_eq!(r.folder, Some(Folder::Temp));
        assert!(r.name.starts_with("threed/"));
    }
    let lineart = bundle.lineart.as_ref().expect("lineart present");
    assert_eq!(lineart.name, "threed/lineart_0001.png");
    let recording = bundle.recording.as_ref().expect("recording present");
    assert_eq!(recording.to_string(), "threed/recording_0001.webm [temp]");
    assert_eq!(
        bundle.camera_info,
        CameraInfo::new([3.0, 2.0, -5.0], [0.0, 1.0, 0.0], 1.2)
    );
}

#[test]
fn animation_fixture_defaults_missing_camera_target() {
    let json = camtools_test_fixtures::bundles::json("animation").expect("load fixture");
    let bundle = ImageBundle::from_json_str(&json).expect("valid bundle");
    assert_eq!(bundle.lineart, None);
    assert_eq!(bundle.recording, None);
    assert_eq!(bundle.camera_info.position, [0.0, 1.5, -4.0]);
    assert_eq!(bundle.camera_info.target, CameraInfo::default().target);
    assert_eq!(bundle.camera_info.zoom, 0.8);
}

#[test]
fn missing_mask_fixture_is_rejected() {
    let json = camtools_test_fixtures::bundles::json("missing-mask").expect("load fixture");
    let err = ImageBundle::from_json_str(&json).expect_err("mask is required");
    assert!(matches!(err, BundleError::MissingKey("mask")));
    assert_eq!(err.to_string(), "image bundle is missing 'mask'");
}

#[test]
fn malformed_text_is_a_parse_error() {
    let err = ImageBundle::from_json_str("{ \"image\": ").expect_err("not JSON");
    assert!(matches!(err, BundleError::Parse(_)));
}

#[test]
fn only_the_incomplete_fixture_fails_validation() {
    let mut failing: Vec<_> = camtools_test_fixtures::bundles::keys()
        .into_iter()
        .filter(|name| {
            let json = camtools_test_fixtures::bundles::json(name).expect("load fixture");
            ImageBundle::from_json_str(&json).is_err()
        })
        .collect();
    failing.sort();
    assert_eq!(failing, ["missing-mask"]);
}
