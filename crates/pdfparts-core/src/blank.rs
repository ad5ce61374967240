//! Blank-frame detection for rasterized pages.
//!
//! A frame is considered blank when its pixel values fall into fewer than
//! two histogram buckets, i.e. the whole frame is a single flat shade.
//! This is a deliberately cheap filter: a page that rendered to pure
//! background carries no marks worth printing. The threshold is exact and
//! fixed; there is no tolerance band.

/// Number of distinct pixel values in an 8-bit single-channel frame.
pub fn distinct_values(pixels: &[u8]) -> usize {
    let mut histogram = [0usize; 256];
    for &p in pixels {
        histogram[p as usize] += 1;
    }
    histogram.iter().filter(|&&count| count > 0).count()
}

/// Returns true if the frame contains at most one distinct pixel value.
pub fn is_blank(pixels: &[u8]) -> bool {
    distinct_values(pixels) < 2
}
