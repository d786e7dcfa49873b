//! Subtitle text packet decoding for the overlay.

/// Demuxed subtitle text packet handed to the OSD by the reader.
#[derive(Debug, Clone)]
pub struct TextPacket {
    pub pts_ms: i64,
    pub duration_ms: i64,
    pub data: Vec<u8>,
}

/// Decoder turning text subtitle packets into display-ready lines.
#[derive(Debug, Default)]
pub struct OverlayTextCodec;

impl OverlayTextCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decode a packet payload into display-ready text lines.
    ///
    /// The payload is read as UTF-8 (lossily), styling override blocks
    /// (`{...}`) are stripped, and blank lines are dropped.
    pub fn decode_lines(&self, packet: &TextPacket) -> Vec<String> {
        let text = String::from_utf8_lossy(&packet.data);
        text.replace('\r', "\n")
            .split('\n')
            .map(strip_override_tags)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Remove `{...}` styling override blocks, keeping surrounding text.
fn strip_override_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut depth = 0usize;
    for ch in line.chars() {
        match ch {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}
