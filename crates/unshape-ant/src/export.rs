//! PNG export of a finished grid.
//!
//! Images are 1-bit grayscale: white (1) for background, black (0) for
//! colored cells, with columns along x and rows along y.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::AntError;
use crate::grid::Scan;

/// File name used when no output path is given: `ant_{size}.png`.
pub fn default_file_name(size: usize) -> String {
    format!("ant_{size}.png")
}

/// Packs a scan into 1-bit scanlines, MSB first, white = 1.
///
/// Each row takes `size.div_ceil(8)` bytes; trailing padding bits are 0.
fn pack_rows(scan: &Scan) -> Vec<u8> {
    let stride = scan.size().div_ceil(8);
    let mut data = vec![0u8; stride * scan.size()];
    for (row, line) in scan.rows().iter().zip(data.chunks_mut(stride)) {
        for (col, _) in row.iter().enumerate().filter(|(_, white)| **white) {
            line[col / 8] |= 0x80 >> (col % 8);
        }
    }
    data
}

/// Encodes a scan as a 1-bit grayscale PNG into `writer`.
pub fn write_png<W: Write>(scan: &Scan, writer: W) -> Result<(), AntError> {
    let side = u32::try_from(scan.size()).map_err(|_| AntError::InvalidSize(scan.size()))?;

    let mut encoder = png::Encoder::new(writer, side, side);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::One);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pack_rows(scan))?;
    writer.finish()?;
    Ok(())
}

/// Writes a scan to a PNG file.
///
/// # Example
///
/// ```no_run
/// use unshape_ant::{Grid, Walker, default_file_name, export_png};
///
/// let mut grid = Grid::new(1024);
/// Walker::new(&mut grid).run();
/// export_png(&grid.scan_and_count(), default_file_name(1024)).unwrap();
/// ```
pub fn export_png<P: AsRef<Path>>(scan: &Scan, path: P) -> Result<(), AntError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_png(scan, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), size = scan.size(), "wrote image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    // IHDR follows the 8-byte signature, 4-byte length and 4-byte tag.
    const IHDR_WIDTH: usize = 16;
    const IHDR_BIT_DEPTH: usize = 24;
    const IHDR_COLOR_TYPE: usize = 25;

    fn encode(grid: &Grid) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_png(&grid.scan_and_count(), &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(1024), "ant_1024.png");
        assert_eq!(default_file_name(3), "ant_3.png");
    }

    #[test]
    fn test_pack_rows_msb_first() {
        let mut grid = Grid::new(10);
        grid.cell_at_mut(0, 0).toggle();
        grid.cell_at_mut(0, 9).toggle();
        grid.cell_at_mut(2, 3).toggle();

        let packed = pack_rows(&grid.scan_and_count());
        // Two bytes per row: 8 columns, then 2 columns plus 6 padding bits.
        assert_eq!(packed.len(), 20);
        assert_eq!(&packed[0..2], &[0b0111_1111, 0b1000_0000]);
        assert_eq!(&packed[2..4], &[0b1111_1111, 0b1100_0000]);
        assert_eq!(&packed[4..6], &[0b1110_1111, 0b1100_0000]);
    }

    #[test]
    fn test_header_is_one_bit_grayscale() {
        let bytes = encode(&Grid::new(16));
        assert_eq!(&bytes[12..16], b"IHDR");
        assert_eq!(&bytes[IHDR_WIDTH..IHDR_WIDTH + 4], &16u32.to_be_bytes());
        assert_eq!(bytes[IHDR_BIT_DEPTH], 1);
        // Color type 0 is grayscale.
        assert_eq!(bytes[IHDR_COLOR_TYPE], 0);
    }

    #[test]
    fn test_decoded_pixels_map_col_to_x() {
        let mut grid = Grid::new(12);
        // row 1, col 9
        grid.cell_at_mut(1, 9).toggle();
        grid.cell_at_mut(7, 2).toggle();

        let decoded = image::load_from_memory(&encode(&grid)).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (12, 12));
        assert_eq!(decoded.get_pixel(9, 1).0, [0]);
        assert_eq!(decoded.get_pixel(2, 7).0, [0]);
        assert_eq!(decoded.get_pixel(1, 9).0, [255]);
        assert_eq!(decoded.pixels().filter(|p| p.0 == [0]).count(), 2);
    }

    #[test]
    fn test_export_png_writes_file() {
        let mut grid = Grid::new(16);
        grid.cell_at_mut(0, 5).toggle();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name(16));
        export_png(&grid.scan_and_count(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, encode(&grid));
        assert_eq!(bytes[IHDR_BIT_DEPTH], 1);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ant.png");
        let err = export_png(&Grid::new(3).scan_and_count(), &path).unwrap_err();
        assert!(matches!(err, AntError::Io(_)));
    }
}
