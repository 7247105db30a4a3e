use memchr::memchr_iter;

/// Samples shorter than this are only rejected for NUL bytes
const MIN_RATIO_SAMPLE: usize = 32;

/// Check if content appears to be binary rather than text
pub fn is_binary(content: &[u8]) -> bool {
    let sample_size = content.len().min(8192);
    let sample = &content[..sample_size];

    // Check for null bytes
    if memchr_iter(0, sample).count() > sample_size / 10 {
        return true;
    }

    // Too short for a control-byte ratio to mean anything
    if sample_size < MIN_RATIO_SAMPLE {
        return false;
    }

    // Check for high proportion of control bytes
    let control_count = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != 0 && !matches!(b, b'\n' | b'\r' | b'\t' | b'\x0c'))
        .count();

    control_count > sample_size / 8
}

/// Decode file bytes as text, replacing invalid UTF-8 sequences
pub fn decode_text(content: Vec<u8>) -> String {
    match String::from_utf8(content) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Byte offsets at which each line of `text` starts
pub fn line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = vec![0];
    starts.extend(
        memchr_iter(b'\n', bytes)
            .map(|i| i + 1)
            .filter(|&start| start < bytes.len()),
    );
    starts
}
