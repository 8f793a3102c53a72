// End-to-end checks for the panel-extractor binary, run inside a scratch working directory.
use std::io::Cursor;
use std::path::Path;
use std::process::{Command, Output};

use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_panel-extractor"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch panel-extractor")
}

fn write_sprite(dir: &Path, width: u32, height: u32) -> RgbaImage {
    let sheet = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, ((x / 16) * 16 + y / 16) as u8, 255])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(sheet.clone())
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("encode sprite failed");
    std::fs::write(dir.join("temp_sprite.png"), cursor.into_inner()).expect("write sprite failed");
    sheet
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not utf-8")
}

#[test]
fn prints_base64_panel_and_leaves_output_file() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let sheet = write_sprite(dir.path(), 256, 256);

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.lines().count(), 1);

    let png = general_purpose::STANDARD
        .decode(stdout.trim_end())
        .expect("stdout is not base64");
    let on_disk = std::fs::read(dir.path().join("temp_panel.png")).expect("temp_panel.png missing");
    assert_eq!(png, on_disk);

    let panel = image::load_from_memory_with_format(&png, ImageFormat::Png).expect("not a PNG");
    assert_eq!(panel.dimensions(), (80, 96));
    let panel = panel.to_rgba8();
    for (x, y, pixel) in panel.enumerate_pixels() {
        assert_eq!(pixel, sheet.get_pixel(x, y));
    }
}

#[test]
fn repeated_runs_print_identical_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    write_sprite(dir.path(), 100, 100);

    let first = run_in(dir.path());
    let second = run_in(dir.path());

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stdout_of(&first), stdout_of(&second));
}

#[test]
fn missing_sprite_reports_not_found() {
    let dir = tempfile::tempdir().expect("tempdir failed");

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Error: temp_sprite.png not found\n");
    assert!(!dir.path().join("temp_panel.png").exists());
}

#[test]
fn non_image_sprite_reports_error() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    std::fs::write(dir.path().join("temp_sprite.png"), b"this is not a png").expect("write failed");

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Error: "), "unexpected stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn undersized_sprite_reports_error() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    write_sprite(dir.path(), 80, 95);

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Error: crop out of bounds"), "unexpected stdout: {stdout}");
    assert!(!dir.path().join("temp_panel.png").exists());
}

#[test]
fn ppm_content_under_png_name_is_cropped() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let mut ppm = b"P6\n100 100\n255\n".to_vec();
    ppm.resize(ppm.len() + 100 * 100 * 3, 0x80);
    std::fs::write(dir.path().join("temp_sprite.png"), ppm).expect("write failed");

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout_of(&output));
    let png = general_purpose::STANDARD
        .decode(stdout_of(&output).trim_end())
        .expect("stdout is not base64");
    let panel = image::load_from_memory_with_format(&png, ImageFormat::Png).expect("not a PNG");
    assert_eq!(panel.dimensions(), (80, 96));
}
