use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Writes frames as binary PPM. Alpha is dropped; every pixel is opaque anyway.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        write_ppm(&mut writer, buffer)?;
        writer.flush()
    }
}

pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6: binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        writer.write_all(&pixel[..3])?;
    }

    Ok(())
}
