use camtools_api_core::CameraInfo;
use camtools_test_fixtures::cameras;

#[test]
fn full_camera_file_deserializes() {
    let json = cameras::json("full").expect("load fixture");
    let cam: CameraInfo = serde_json::from_str(&json).expect("valid camera");
    assert_eq!(cam, CameraInfo::new([2.5, 1.0, -6.0], [0.0, 0.5, 0.0], 1.75));
}

#[test]
fn partial_camera_file_fills_defaults() {
    let json = cameras::json("zoom-only").expect("load fixture");
    let cam: CameraInfo = serde_json::from_str(&json).expect("valid camera");
    assert_eq!(cam, CameraInfo::default().with_zoom(2.5));
}

#[test]
fn out_of_range_camera_file_is_rejected() {
    let json = cameras::json("out-of-range").expect("load fixture");
    assert!(serde_json::from_str::<CameraInfo>(&json).is_err());
}
