// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Gets a finished raster onto the disk.

use image::png::PNGEncoder;
use image::{ColorType, RgbaImage};
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::MandelError;

/// Encode the image as an RGBA PNG and put it at `outfile`, replacing
/// whatever was there.  The bytes go to a temporary file next to the
/// destination first and are renamed into place only once they are
/// on the disk, so a failed write leaves no half-finished image
/// behind.
pub fn write_png<P: AsRef<Path>>(outfile: P, image: &RgbaImage) -> Result<(), MandelError> {
    let path = outfile.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut output = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(&mut output);
        let (width, height) = image.dimensions();
        let raw: &[u8] = image;
        PNGEncoder::new(&mut writer)
            .encode(raw, width, height, ColorType::RGBA(8))
            .map_err(|e| MandelError::Encoding {
                reason: e.to_string(),
            })?;
        writer.flush()?;
    }
    output.as_file().sync_all()?;
    output.persist(path).map_err(|e| e.error)?;

    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Pixel, Rgba};
    use std::fs;

    fn checkerboard() -> RgbaImage {
        let mut image = RgbaImage::new(8, 8);
        for (x, y, p) in image.enumerate_pixels_mut() {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            *p = Rgba::from_channels(v, v, v, 255);
        }
        image
    }

    #[test]
    fn writes_a_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = checkerboard();
        write_png(&path, &image).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.dimensions(), (8, 8));
        assert_eq!(back.to_rgba().into_raw(), image.into_raw());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"not a png").unwrap();
        write_png(&path, &checkerboard()).unwrap();
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn leaves_nothing_behind_when_the_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        match write_png(&path, &checkerboard()) {
            Err(MandelError::Io(_)) => (),
            other => panic!("expected an io error, got {:?}", other),
        }
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn no_temporaries_survive_a_good_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_png(&path, &checkerboard()).unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.png")]);
    }
}
