//! Binary encoding of the similarity artifact
//!
//! Layout (little endian): magic `SIMM`, `u32` format version, `u64` dimension
//! N, then N×N `f32` values row-major.

use crate::similarity::SimilarityMatrix;

pub const MAGIC: &[u8; 4] = b"SIMM";
pub const MATRIX_FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 8;

pub fn encode_matrix(matrix: &SimilarityMatrix) -> Vec<u8> {
    let values = matrix.values();
    let mut bytes = Vec::with_capacity(HEADER_LEN + values.len() * 4);
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&MATRIX_FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(matrix.dim() as u64).to_le_bytes());
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Decode a matrix; the error is a human-readable reason
pub fn decode_matrix(bytes: &[u8]) -> std::result::Result<SimilarityMatrix, String> {
    if bytes.len() < HEADER_LEN {
        return Err(format!("similarity artifact truncated ({} bytes)", bytes.len()));
    }
    if &bytes[0..4] != MAGIC {
        return Err("similarity artifact has wrong magic".to_string());
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != MATRIX_FORMAT_VERSION {
        return Err(format!("unsupported similarity format version {}", version));
    }

    let mut dim_bytes = [0u8; 8];
    dim_bytes.copy_from_slice(&bytes[8..16]);
    let dim = usize::try_from(u64::from_le_bytes(dim_bytes))
        .map_err(|_| "similarity dimension does not fit in memory".to_string())?;

    let body = &bytes[HEADER_LEN..];
    let expected = dim
        .checked_mul(dim)
        .and_then(|cells| cells.checked_mul(4))
        .ok_or_else(|| format!("similarity dimension {} overflows", dim))?;
    if body.len() != expected {
        return Err(format!(
            "similarity artifact for {}x{} needs {} value bytes, found {}",
            dim,
            dim,
            expected,
            body.len()
        ));
    }

    let values = body
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    SimilarityMatrix::from_values(dim, values).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimilarityMatrix {
        SimilarityMatrix::from_values(2, vec![1.0, 0.25, 0.25, 1.0]).unwrap()
    }

    #[test]
    fn test_decode_encoded() {
        let bytes = encode_matrix(&sample());
        assert_eq!(bytes.len(), 16 + 16);
        assert_eq!(decode_matrix(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_empty_matrix() {
        let bytes = encode_matrix(&SimilarityMatrix::empty());
        assert_eq!(decode_matrix(&bytes).unwrap().dim(), 0);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = encode_matrix(&sample());
        bytes[0] = b'X';
        assert!(decode_matrix(&bytes).unwrap_err().contains("magic"));
    }

    #[test]
    fn test_rejects_truncated_body() {
        let mut bytes = encode_matrix(&sample());
        bytes.truncate(bytes.len() - 4);
        assert!(decode_matrix(&bytes).unwrap_err().contains("needs 16 value bytes"));
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(decode_matrix(b"SIMM").is_err());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut bytes = encode_matrix(&sample());
        bytes[4] = 9;
        assert!(decode_matrix(&bytes).unwrap_err().contains("version 9"));
    }
}
