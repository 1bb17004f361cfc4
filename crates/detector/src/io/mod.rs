use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;
use crate::{
    error::{DetectorError, Result},
    traits::RecordSink,
    types::CentroidRecord,
};

/// Decode an image from disk.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DetectorError::MissingInput(path.to_path_buf()));
    }
    let image = image::open(path)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "image loaded");
    Ok(image)
}

/// Copy of `source` in 8-bit RGB with a filled marker at every centroid.
pub fn annotate(
    source: &DynamicImage,
    records: &[CentroidRecord],
    radius: i32,
    color: [u8; 3],
) -> RgbImage {
    let mut canvas = source.to_rgb8();
    for record in records {
        imageproc::drawing::draw_filled_circle_mut(
            &mut canvas,
            (record.x, record.y),
            radius,
            Rgb(color),
        );
    }
    canvas
}

/// Write the annotated image; the format follows the path extension.
pub fn save_annotated<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| DetectorError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "annotated image written");
    Ok(())
}

/// Headerless `index,x,y` table.
pub struct TableWriter<W: Write> {
    writer: W,
    rows: usize,
}

impl TableWriter<BufWriter<File>> {
    /// Create (or truncate) the table file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> RecordSink for TableWriter<W> {
    fn accept(&mut self, record: &CentroidRecord) -> Result<()> {
        writeln!(self.writer, "{},{},{}", record.index, record.x, record.y)?;
        self.rows += 1;
        Ok(())
    }
}
