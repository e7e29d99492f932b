// SPDX-License-Identifier: MPL-2.0
use render_folio::config::{self, ScrollBehavior};
use render_folio::error::Error;
use render_folio::gallery::{self, ItemId, PROJECTS};
use render_folio::i18n::fluent::I18n;
use render_folio::media::{build_client, fetch::fetch_bytes, fetch_image};
use render_folio::ui::state::RootMargin;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    std::fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write config file");
    let english = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("footer-back-to-top"), "Back to top");

    std::fs::write(&config_path, "[general]\nlanguage = \"es\"\n")
        .expect("Failed to write config file");
    let spanish = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_es = I18n::new(None, &spanish);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("footer-back-to-top"), "Volver arriba");
}

#[test]
fn cli_language_overrides_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "[general]\nlanguage = \"es\"\n")
        .expect("Failed to write config file");

    let config = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn display_and_network_settings_are_applied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
[display]
reveal_margin = "10%"
scroll_behavior = "instant"
ambient_stars = false

[network]
timeout_secs = 0
cache_mb = 4096
"#,
    )
    .expect("Failed to write config file");

    let config = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config.display.root_margin(), RootMargin::Percent(10.0));
    assert_eq!(config.display.scroll_behavior, ScrollBehavior::Instant);
    assert!(!config.display.ambient_stars);
    assert!(config.display.reveal_animations);
    assert_eq!(
        config.network.timeout(),
        Duration::from_secs(u64::from(config::MIN_NETWORK_TIMEOUT_SECS))
    );
    assert_eq!(
        config.network.cache_bytes(),
        config::MAX_CACHE_MB as usize * 1024 * 1024
    );
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[display\nbroken")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn missing_config_uses_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert!(warning.is_none());
    assert_eq!(
        config.display.root_margin(),
        RootMargin::Pixels(config::DEFAULT_REVEAL_MARGIN_PX)
    );
}

#[test]
fn catalog_exposes_twenty_two_tiles() {
    let counts: Vec<usize> = PROJECTS.iter().map(|project| project.items.len()).collect();
    assert_eq!(counts, vec![10, 12]);

    let item = gallery::find(ItemId(13)).expect("item 13 exists");
    assert_eq!(item.source_url, "https://i.ibb.co/DDzSt1Fk/3-1.png");
    assert!(item.is_vertical);
}

// =============================================================================
// Fetching against a local HTTP server
// =============================================================================

/// Serves a single canned HTTP response and returns the URL to request.
fn serve_once(response: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/render.png")
}

fn http_response(status: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([75, 33, 44, 255]));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image_rs::ImageFormat::Png)
        .expect("encode png");
    bytes.into_inner()
}

fn client() -> reqwest::Client {
    build_client(Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn fetch_image_decodes_remote_png() {
    let url = serve_once(http_response("200 OK", "image/png", &png_bytes(6, 9)));

    let image = fetch_image(client(), &url, config::MAX_IMAGE_BYTES)
        .await
        .expect("image loads");
    assert_eq!((image.width, image.height), (6, 9));
    assert_eq!(image.aspect(), Some(1.5));
}

#[tokio::test]
async fn http_error_status_fails_the_load() {
    let url = serve_once(http_response("404 Not Found", "text/plain", b"missing"));

    let err = fetch_image(client(), &url, config::MAX_IMAGE_BYTES)
        .await
        .expect_err("404 must fail");
    match err {
        Error::Network(message) => assert!(message.contains("404")),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let url = serve_once(http_response("200 OK", "image/png", &[0u8; 1024]));

    let err = fetch_bytes(&client(), &url, 64)
        .await
        .expect_err("body over the cap must fail");
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn non_image_body_is_a_decode_error() {
    let url = serve_once(http_response(
        "200 OK",
        "text/html",
        b"<html><body>not an image</body></html>",
    ));

    let err = fetch_image(client(), &url, config::MAX_IMAGE_BYTES)
        .await
        .expect_err("html must not decode");
    assert!(matches!(err, Error::Decode(_)));
}
