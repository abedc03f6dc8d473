//! Test fixture utilities: load SSE payloads and replay them as byte chunks

use std::io;

/// Fixture path relative to the crate root.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name}: {e}"))
        .replace("\r\n", "\n")
}

/// Split an SSE payload into one chunk per event (blank-line separated).
pub fn sse_events_as_chunks(raw: &str) -> Vec<Result<Vec<u8>, io::Error>> {
    raw.split("\n\n")
        .map(|chunk| chunk.trim_end_matches('\n'))
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| Ok(format!("{chunk}\n\n").into_bytes()))
        .collect()
}

/// Split `raw` at the given byte offsets.
pub fn split_at_offsets(raw: &[u8], offsets: &[usize]) -> Vec<Result<Vec<u8>, io::Error>> {
    let mut cuts: Vec<usize> = offsets.iter().map(|o| o % (raw.len() + 1)).collect();
    cuts.sort_unstable();
    cuts.dedup();
    let mut out = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        out.push(Ok(raw[start..cut].to_vec()));
        start = cut;
    }
    out.push(Ok(raw[start..].to_vec()));
    out
}
