//! Channel layout of an image.

/// Number of interleaved sample lanes per pixel.
///
/// Every algorithm treats the lanes independently; the layout only decides
/// how many lanes there are and how they are interleaved in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// One gray sample per pixel.
    Gray,
    /// Interleaved red, green, blue samples.
    Rgb,
}

impl Channels {
    /// Number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(Channels::Gray.count(), 1);
        assert_eq!(Channels::Rgb.count(), 3);
    }
}
