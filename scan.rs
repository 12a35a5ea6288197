use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use encoding_rs::UTF_8;

use crate::bigram::{Histogram, accumulate};
use crate::error::ScanError;

const READ_BUFFER_CAPACITY: usize = 64 * 1024;

/// Lines of a reader decoded as UTF-8, terminators stripped.
///
/// Malformed byte sequences become U+FFFD instead of ending the scan; the
/// normalizer strips them like any other symbol.
pub struct DecodedLines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> DecodedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
                let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
                let (text, malformed) = UTF_8.decode_without_bom_handling(bytes);
                if malformed {
                    log::debug!("line {} is not valid UTF-8, decoding lossily", self.line);
                }
                Some(Ok(text.into_owned()))
            }
            Err(source) => Some(Err(ScanError::SourceRead {
                line: self.line + 1,
                source,
            })),
        }
    }
}

/// Build the histogram of a sequence of lines, read as one stream of words.
pub fn scan<I>(lines: I) -> Histogram
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut histogram = Histogram::new();
    let mut carried = String::new();
    for line in lines {
        carried = accumulate(line.as_ref(), &carried, &mut histogram);
    }
    histogram
}

/// Scan every line of `reader`. A read error ends the scan early with the
/// bigrams counted up to that point.
pub fn scan_reader<R: BufRead>(reader: R) -> Histogram {
    let start = Instant::now();
    let mut lines_read = 0usize;

    let lines = DecodedLines::new(reader)
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(err) => {
                log::error!("{err}; keeping the bigrams read so far");
                None
            }
        })
        .inspect(|_| lines_read += 1);
    let histogram = scan(lines);

    log::info!(
        "Read {} lines, {} distinct bigrams in {:.2?}",
        lines_read,
        histogram.len(),
        start.elapsed()
    );
    histogram
}

/// Scan the file at `path`. A file that cannot be opened yields an empty
/// histogram.
pub fn scan_path(path: &Path) -> Histogram {
    log::debug!("Scanning {}", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            log::warn!("{}", ScanError::open(path, source));
            return Histogram::new();
        }
    };
    scan_reader(BufReader::with_capacity(READ_BUFFER_CAPACITY, file))
}
