/// Default marker written in front of every hidden file
pub const DEFAULT_MARKER: &str = "SECRET";

/// Default number of segments an encoding or decoding run is split into
pub const DEFAULT_SEGMENTS: usize = 100;

/// Options shared by encoder and decoder
///
/// Both sides must agree on the marker, otherwise the decoder refuses the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegoOptions {
    /// The string that marks an image as carrying a hidden file.
    /// Each character costs two bytes of capacity.
    pub marker: String,

    /// Determines how many progress steps a transfer is split into.
    /// It has no influence on the data layout inside the image.
    pub segments: usize,
}

impl Default for StegoOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl StegoOptions {
    pub fn with_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(1);
        self
    }

    /// number of 16-bit code units of the marker, as stored in the image
    pub fn marker_len(&self) -> usize {
        self.marker.encode_utf16().count()
    }
}
