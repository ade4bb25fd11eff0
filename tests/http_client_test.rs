mod common;

use common::{client_for, run_blocking, start_mock_camera, BASIC_AUTH_HEADER};
use netwave::{NetwaveError, Resolution, VideoMode};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn brightness_is_sent_with_basic_auth_and_scaled() {
    let server = start_mock_camera().await;
    Mock::given(method("GET"))
        .and(path("/camera_control.cgi"))
        .and(query_param("param", "1"))
        .and(query_param("value", "160"))
        .and(header("authorization", BASIC_AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok.\n"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let brightness = run_blocking(move || {
        let mut cam = client_for(&uri, TIMEOUT);
        cam.set_brightness(10).map(|_| cam.brightness())
    })
    .await
    .unwrap();
    assert_eq!(brightness, 0.625);
}

#[tokio::test]
async fn invalid_resolution_never_reaches_the_camera() {
    let server = start_mock_camera().await;
    let uri = server.uri();
    let result = run_blocking(move || client_for(&uri, TIMEOUT).set_resolution(16)).await;
    assert!(matches!(result, Err(NetwaveError::InvalidArgument(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_carries_requested_url() {
    let server = start_mock_camera().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = run_blocking(move || client_for(&uri, TIMEOUT).move_up()).await;
    match result {
        Err(NetwaveError::AuthenticationFailed { url }) => {
            assert_eq!(url, format!("{}/decoder_control.cgi?command=0", server.uri()));
        }
        other => panic!("expected AuthenticationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn other_failures_keep_status_and_cache() {
    let server = start_mock_camera().await;
    Mock::given(method("GET"))
        .and(path("/camera_control.cgi"))
        .and(query_param("value", "2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/camera_control.cgi"))
        .and(query_param("value", "5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (result, contrast) = run_blocking(move || {
        let mut cam = client_for(&uri, TIMEOUT);
        cam.set_contrast(2).unwrap();
        let result = cam.set_contrast(5);
        (result, cam.contrast())
    })
    .await;
    match result {
        Err(NetwaveError::RequestFailed { url, status }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/camera_control.cgi?param=2&value=5"));
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
    assert_eq!(contrast, 2);
}

#[tokio::test]
async fn full_update_parses_device_responses() {
    let server = start_mock_camera().await;
    Mock::given(method("GET"))
        .and(path("/get_params.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "var id='000DC5D0A1B2';\r\nvar sys_ver='0.37.2.36';\r\nvar alias='Driveway';\r\nvar now=1290764310;\r\n",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get_camera_params.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "var resolution=8;\r\nvar brightness=64;\r\nvar contrast=5;\r\nvar mode=1;\r\nvar flip=3;\r\n",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let cam = run_blocking(move || {
        let mut cam = client_for(&uri, TIMEOUT);
        cam.update_full().map(|_| cam)
    })
    .await
    .unwrap();

    assert_eq!(cam.alias().unwrap(), "Driveway");
    assert_eq!(cam.id().unwrap(), "000DC5D0A1B2");
    assert_eq!(cam.info().get("now").map(String::as_str), Some("1290764310"));
    assert_eq!(cam.brightness(), 0.25);
    assert_eq!(cam.contrast(), 5);
    assert_eq!(cam.resolution(), Some(Resolution::Qvga));
    assert_eq!(cam.video_mode(), VideoMode::Hz60);
    assert_eq!(cam.orientation(), 3);
    // Drop the blocking client off the async runtime.
    run_blocking(move || drop(cam)).await;
}

#[tokio::test]
async fn snapshot_returns_raw_bytes() {
    let server = start_mock_camera().await;
    let jpeg: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x00, 0xFF, 0xD9];
    Mock::given(method("GET"))
        .and(path("/snapshot.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jpeg.clone()))
        .mount(&server)
        .await;

    let uri = server.uri();
    let bytes = run_blocking(move || client_for(&uri, TIMEOUT).snapshot()).await.unwrap();
    assert_eq!(bytes, jpeg);
}

#[tokio::test]
async fn slow_camera_times_out() {
    let server = start_mock_camera().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = run_blocking(move || client_for(&uri, Duration::from_millis(200)).restart()).await;
    match result {
        Err(NetwaveError::Timeout { url, .. }) => assert!(url.ends_with("/reboot.cgi")),
        other => panic!("expected Timeout, got {:?}", other),
    }
}
