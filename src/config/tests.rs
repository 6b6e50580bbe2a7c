use super::*;

#[test]
fn defaults_resolve() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.editor.listing_path, "/admin/posts");
    assert_eq!(settings.editor.sign_out_redirect, "/");
    assert_eq!(settings.logging.format, LogFormat::Compact);
    assert_eq!(
        settings.uploads.max_payload_bytes.get(),
        DEFAULT_UPLOAD_MAX_PAYLOAD_BYTES
    );
}

#[test]
fn logging_level_is_parsed() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("debug".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn unrecognised_log_format_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.format = Some("pretty".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid format");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.format",
            ..
        }
    ));
}

#[test]
fn listing_path_must_be_absolute() {
    let mut raw = RawSettings::default();
    raw.editor.listing_path = Some("admin/posts".to_string());

    let err = Settings::from_raw(raw).expect_err("relative path");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "editor.listing_path",
            ..
        }
    ));
}

#[test]
fn public_base_url_gains_trailing_slash() {
    let mut raw = RawSettings::default();
    raw.uploads.public_base_url = Some("https://cdn.example.com/media".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.uploads.public_base_url.as_str(),
        "https://cdn.example.com/media/"
    );

    let joined = settings
        .uploads
        .public_base_url
        .join("abc-photo.png")
        .expect("joinable");
    assert_eq!(joined.as_str(), "https://cdn.example.com/media/abc-photo.png");
}

#[test]
fn zero_payload_limit_is_rejected() {
    let mut raw = RawSettings::default();
    raw.uploads.max_payload_bytes = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero limit");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "uploads.max_payload_bytes",
            ..
        }
    ));
}
