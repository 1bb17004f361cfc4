use std::{fs, path::Path};

use detector::{
    annotate, load_image, save_annotated, DetectorConfig, DetectorError, PipelineBuilder,
    RecordSink, TableWriter,
};
use image::{Rgb, RgbImage};

fn write_fixture(path: &Path) {
    let mut img = RgbImage::from_pixel(48, 40, Rgb([0, 0, 0]));
    for y in 12..18 {
        for x in 10..17 {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    img.save(path).expect("fixture should be written");
}

fn run_once(input: &Path, output: &Path, table: &Path) -> usize {
    let config = DetectorConfig::default();
    let mut writer = TableWriter::create(table).unwrap();

    let image = load_image(input).unwrap();
    let detection = PipelineBuilder::from_config(&config)
        .process_image(&image)
        .unwrap();

    let annotated = annotate(&image, &detection.records, config.marker_radius, config.marker_color);
    save_annotated(&annotated, output).unwrap();

    writer.accept_all(&detection.records).unwrap();
    writer.finish().unwrap();
    detection.accepted()
}

#[test]
fn png_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");
    let table = dir.path().join("centroids.csv");
    write_fixture(&input);

    assert_eq!(run_once(&input, &output, &table), 1);
    assert_eq!(fs::read_to_string(&table).unwrap(), "0,13,14\n");

    let annotated = image::open(&output).unwrap().to_rgb8();
    assert_eq!(annotated.dimensions(), (48, 40));
    assert_eq!(annotated.get_pixel(13, 14), &Rgb([0, 255, 0]));
    assert_eq!(annotated.get_pixel(40, 35), &Rgb([0, 0, 0]));
}

#[test]
fn repeated_runs_write_identical_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_fixture(&input);

    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    run_once(&input, &dir.path().join("a.png"), &first);
    run_once(&input, &dir.path().join("b.png"), &second);

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn undecodable_input_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.png");
    fs::write(&input, b"not an image").unwrap();

    assert!(matches!(load_image(&input), Err(DetectorError::Decode(_))));
}
