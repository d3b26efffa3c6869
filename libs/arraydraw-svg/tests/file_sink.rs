//! File sink behavior against a scratch directory.

use arraydraw::{render, DrawOptions, Legends, Rgb};
use arraydraw_svg::{render_to_file, save_svg, SvgError};
use tempfile::tempdir;

#[test]
fn save_writes_complete_markup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.svg");
    let doc = render(
        &DrawOptions::new(&[4, 3, 2])
            .with_legends(Legends::new("Frequency", "Time", "Channel"))
            .with_title("Spectrogram")
            .with_background(Rgb::WHITE),
    )
    .unwrap();

    save_svg(&doc, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.trim_end().ends_with("</svg>"));
    assert_eq!(written.matches("<text").count(), 4);
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plane.svg");
    std::fs::write(&path, "stale").unwrap();

    render_to_file(&DrawOptions::new(&[2, 2, 0]), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("stale"));
    assert_eq!(written.matches("<rect").count(), 4);
}

#[test]
fn missing_directory_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");
    let doc = render(&DrawOptions::new(&[1, 1, 1])).unwrap();

    let err = save_svg(&doc, &path).unwrap_err();
    match err {
        SvgError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn invalid_options_write_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.svg");

    let err = render_to_file(&DrawOptions::new(&[0, 0, 5]), &path).unwrap_err();

    assert!(matches!(err, SvgError::Draw(_)));
    assert!(!path.exists());
}
