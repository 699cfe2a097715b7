//! The full run: check the source, prepare the output directory, decode
//! once, then cut every configured size.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::config::IconJob;
use crate::encode::write_png;
use crate::error::{IconError, Result};
use crate::transform::scale_and_crop;
use crate::utils;

/// Decode the source and normalize it to RGBA8.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?;
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// Console report for one written icon.
pub fn saved_line(path: &Path) -> String {
    format!("saved: {}", path.display())
}

/// Produce every size of `job`, returning the written paths in size order.
///
/// A missing source fails before anything is created on disk.
pub fn run(job: &IconJob) -> Result<Vec<PathBuf>> {
    let source = job.source();
    if !source.exists() {
        return Err(IconError::MissingSource {
            path: utils::absolute(source),
        });
    }

    let out_dir = utils::output_dir(source);
    utils::ensure_dir(&out_dir)?;

    let image = load_source(source)?;

    let mut written = Vec::with_capacity(job.sizes().len());
    for &size in job.sizes() {
        let icon = scale_and_crop(&image, size);
        let out_path = utils::output_path(&out_dir, size);
        write_png(&icon, &out_path)?;

        println!("{}", saved_line(&out_path));
        log::info!("wrote {}x{} icon to {}", size, size, out_path.display());
        written.push(out_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn write_source(dir: &Path, width: u32, height: u32) -> PathBuf {
        let resources = dir.join("resources");
        std::fs::create_dir_all(&resources).unwrap();
        let path = resources.join("icon.png");
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
        });
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_run_writes_every_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 300, 100);

        let written = run(&IconJob::new(&source)).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["icon_16.png", "icon_32.png", "icon_48.png", "icon_128.png"]);

        for (path, size) in written.iter().zip([16, 32, 48, 128]) {
            assert_eq!(path.parent(), source.parent());
            let icon = image::open(path).unwrap();
            assert_eq!((icon.width(), icon.height()), (size, size));
            assert_eq!(icon.color(), image::ColorType::Rgba8);
        }
    }

    #[test]
    fn test_saved_line() {
        let path = Path::new("resources").join("icon_48.png");
        assert_eq!(saved_line(&path), format!("saved: {}", path.display()));
        assert_eq!(saved_line(Path::new("resources/icon_16.png")), "saved: resources/icon_16.png");
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("resources").join("icon.png");

        let err = run(&IconJob::new(&source)).unwrap_err();
        match err {
            IconError::MissingSource { path } => assert_eq!(path, source),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("resources").exists());
    }

    #[test]
    fn test_rerun_is_stable_and_keeps_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 64, 80);
        let unrelated = dir.path().join("resources").join("README.txt");
        std::fs::write(&unrelated, "hello").unwrap();

        let first = run(&IconJob::new(&source)).unwrap();
        let dims_first: Vec<_> = first
            .iter()
            .map(|p| image::image_dimensions(p).unwrap())
            .collect();
        let second = run(&IconJob::new(&source)).unwrap();
        let dims_second: Vec<_> = second
            .iter()
            .map(|p| image::image_dimensions(p).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(dims_first, dims_second);
        assert_eq!(std::fs::read_to_string(&unrelated).unwrap(), "hello");
    }

    #[test]
    fn test_corrupt_source_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let resources = dir.path().join("resources");
        std::fs::create_dir_all(&resources).unwrap();
        let source = resources.join("icon.png");
        std::fs::write(&source, b"not a png").unwrap();

        let err = run(&IconJob::new(&source)).unwrap_err();
        assert!(matches!(err, IconError::Decode(_)));
    }

    #[test]
    fn test_load_source_normalizes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(10, 12, image::Luma([90])).save(&path).unwrap();

        let image = load_source(&path).unwrap();
        assert_eq!(image.dimensions(), (10, 12));
        assert_eq!(image.get_pixel(0, 0), &Rgba([90, 90, 90, 255]));
    }
}
