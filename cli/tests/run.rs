use std::fs;

use cli::{run, Invocation, RunSummary};
use detector::{DetectorError, ThresholdRange};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn invocation(dir: &TempDir, input: &str, output: &str) -> Invocation {
    Invocation {
        input: dir.path().join(input),
        output: dir.path().join(output),
        csv: dir.path().join("out.csv"),
        threshold: ThresholdRange::default(),
    }
}

fn scene() -> RgbImage {
    let mut img = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
    // Two 7x6 blobs (accepted) and one 2x2 speck (rejected).
    for (x0, y0, w, h) in [(8, 8, 7, 6), (40, 44, 7, 6), (30, 20, 2, 2)] {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
    }
    img
}

#[test]
fn writes_rows_and_markers() {
    let dir = tempfile::tempdir().unwrap();
    scene().save(dir.path().join("in.png")).unwrap();
    let inv = invocation(&dir, "in.png", "annotated.png");

    let summary = run(&inv).unwrap();
    assert_eq!(summary, RunSummary { accepted: 2, contours: 3 });

    assert_eq!(fs::read_to_string(&inv.csv).unwrap(), "0,43,46\n1,11,10\n");

    let annotated = image::open(&inv.output).unwrap().to_rgb8();
    assert_eq!(annotated.dimensions(), (64, 64));
    assert_eq!(annotated.get_pixel(43, 46), &Rgb([0, 255, 0]));
    assert_eq!(annotated.get_pixel(11, 10), &Rgb([0, 255, 0]));
    // The rejected speck is left unmarked.
    assert_eq!(annotated.get_pixel(30, 20), &Rgb([255, 255, 255]));
}

#[test]
fn missing_input_aborts_with_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let inv = invocation(&dir, "absent.png", "annotated.png");

    let err = run(&inv).unwrap_err();
    assert!(matches!(err, DetectorError::MissingInput(_)));
    assert_eq!(fs::read_to_string(&inv.csv).unwrap(), "");
    assert!(!inv.output.exists());
}

#[test]
fn unsupported_output_format_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    scene().save(dir.path().join("in.png")).unwrap();
    let inv = invocation(&dir, "in.png", "annotated.nope");

    assert!(matches!(run(&inv), Err(DetectorError::Encode { .. })));
}

#[test]
fn unwritable_table_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    scene().save(dir.path().join("in.png")).unwrap();
    let mut inv = invocation(&dir, "in.png", "annotated.png");
    inv.csv = dir.path().join("no_such_dir").join("out.csv");

    assert!(matches!(run(&inv), Err(DetectorError::Io(_))));
}
