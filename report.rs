use std::io::{self, Write};

use crate::bigram::Histogram;

/// Every entry of the histogram once, in the map's own order.
pub fn report(histogram: &Histogram) -> impl Iterator<Item = (&str, usize)> {
    histogram.iter().map(|(key, &count)| (key.as_str(), count))
}

/// Write one `<bigram> -> <count>` line per entry.
pub fn render<W: Write>(histogram: &Histogram, mut out: W) -> io::Result<()> {
    for (bigram, count) in report(histogram) {
        writeln!(out, "{bigram} -> {count}")?;
    }
    out.flush()
}
