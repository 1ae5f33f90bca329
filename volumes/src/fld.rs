//! AVS Field Files

use crate::grid::GridVolume;
use byteorder::{LittleEndian, ReadBytesExt};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::sync::OnceLock;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;

/// The ASCII header ends with two form feed characters.
const HEADER_END: &[u8] = b"\x0c\x0c";

/// Voxel storage types supported in field files.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum VoxelType {
    /// Unsigned 8-bit values.
    Byte,

    /// Unsigned 16-bit little endian values.
    Short,
}

impl VoxelType {
    /// Returns the size of one voxel in bytes.
    fn size(&self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Short => 2,
        }
    }
}

/// Reads a volume from an AVS field (.fld) file.
///
/// * `path` - The file path.
pub fn read_fld(path: &str) -> Result<GridVolume, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("read_fld(): Error reading volume '{path}': {e}"))?;
    let volume = parse_fld(&bytes).map_err(|e| format!("read_fld(): '{path}': {e}"))?;
    info!("Loaded volume '{path}'");
    Ok(volume)
}

/// Parses a volume from the contents of an AVS field file.
///
/// * `bytes` - File contents.
pub fn parse_fld(bytes: &[u8]) -> Result<GridVolume, String> {
    let header_len = bytes
        .windows(HEADER_END.len())
        .position(|w| w == HEADER_END)
        .ok_or_else(|| "Missing end of header".to_string())?;
    let header = std::str::from_utf8(&bytes[..header_len])
        .map_err(|e| format!("Invalid header text: {e}"))?;
    let fields: HashMap<&str, &str> = regex_header_field()
        .captures_iter(header)
        .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .collect();

    let dim = |key: &str| -> Result<Int, String> {
        let value = fields.get(key).ok_or_else(|| format!("Missing '{key}' in header"))?;
        match value.parse::<Int>() {
            Ok(n) if n > 0 => Ok(n),
            Ok(n) => Err(format!("Invalid '{key}' {n}")),
            Err(e) => Err(format!("Error parsing '{key}': {e}")),
        }
    };
    let dims = Vector3i::new(dim("dim1")?, dim("dim2")?, dim("dim3")?);

    let voxel_type = match fields.get("data").copied() {
        Some("byte") => VoxelType::Byte,
        Some("short") => VoxelType::Short,
        Some(other) => return Err(format!("Unsupported data type '{other}'")),
        None => return Err("Missing 'data' in header".to_string()),
    };

    let n_voxels = dims.x as usize * dims.y as usize * dims.z as usize;
    let data = &bytes[header_len + HEADER_END.len()..];
    let expected = n_voxels * voxel_type.size();
    if data.len() < expected {
        return Err(format!(
            "Truncated voxel data; expected {expected} bytes, found {}",
            data.len()
        ));
    }

    let mut reader = Cursor::new(data);
    let values = (0..n_voxels)
        .map(|_| match voxel_type {
            VoxelType::Byte => reader.read_u8().map(Float::from),
            VoxelType::Short => reader.read_u16::<LittleEndian>().map(Float::from),
        })
        .collect::<Result<Vec<Float>, _>>()
        .map_err(|e| format!("Error reading voxel data: {e}"))?;

    debug!("Parsed {dims} {voxel_type:?} volume");
    GridVolume::new(dims, values)
}

/// Returns the regular expression matching `key=value` header lines.
fn regex_header_field() -> &'static Regex {
    static DATA: OnceLock<Regex> = OnceLock::new();
    DATA.get_or_init(|| Regex::new(r"(?m)^[ \t]*(\w+)[ \t]*=[ \t]*(\S+)").unwrap())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use volvis_core::volume::Volume;

    fn fld(header: &str, data: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(HEADER_END);
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn parses_byte_volume() {
        let header = "# AVS field file\nndim=3\ndim1=2\ndim2=1\ndim3=2\nnspace=3\nveclen=1\ndata=byte\nfield=uniform\n";
        let volume = parse_fld(&fld(header, &[1, 2, 3, 250])).unwrap();
        assert_eq!(volume.dims(), Vector3i::new(2, 1, 2));
        assert_eq!(volume.voxel(&Point3i::new(1, 0, 0)), 2.0);
        assert_eq!(volume.voxel(&Point3i::new(1, 0, 1)), 250.0);
        assert_eq!(volume.maximum(), 250.0);
    }

    #[test]
    fn parses_little_endian_short_volume() {
        let header = "dim1 = 2\ndim2 = 1\ndim3 = 1\ndata = short\n";
        let volume = parse_fld(&fld(header, &[0x01, 0x00, 0x00, 0x01])).unwrap();
        assert_eq!(volume.voxel(&Point3i::new(0, 0, 0)), 1.0);
        assert_eq!(volume.voxel(&Point3i::new(1, 0, 0)), 256.0);
    }

    #[test]
    fn missing_terminator_is_an_error() {
        assert!(parse_fld(b"dim1=1\ndim2=1\ndim3=1\ndata=byte\n").is_err());
    }

    #[test]
    fn truncated_data_is_an_error() {
        let header = "dim1=2\ndim2=2\ndim3=2\ndata=byte\n";
        let err = parse_fld(&fld(header, &[0; 7])).unwrap_err();
        assert!(err.contains("Truncated"));
    }

    #[test]
    fn unsupported_type_is_an_error() {
        let header = "dim1=1\ndim2=1\ndim3=1\ndata=float\n";
        assert!(parse_fld(&fld(header, &[0; 4])).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_fld("/nonexistent/volume.fld").is_err());
    }
}
