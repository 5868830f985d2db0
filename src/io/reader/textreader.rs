/*! Reading facilities

[LineReader] implements [Iterator] over the decoded lines of a corpus file.

Lines are decoded as UTF-8, falling back to Latin-1 when a line is not valid UTF-8
(public review dumps are distributed in Latin-1).
Blank lines, which separate records in the public dumps, are skipped by default.
!*/
use std::{
    ffi::OsStr,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::{debug, info};

use crate::error::Error;

/// Decode a raw line, falling back to Latin-1 if it is not valid UTF-8.
pub fn decode_line(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Reader that yields decoded lines, without their line terminator.
#[derive(Debug)]
pub struct LineReader<T> {
    br: T,
    skip_blank_lines: bool,
    nb_latin1: usize,
}

impl<T> LineReader<T>
where
    T: BufRead,
{
    pub fn new(br: T) -> Self {
        Self {
            br,
            skip_blank_lines: true,
            nb_latin1: 0,
        }
    }

    /// Keep (`false`) or skip (`true`, default) blank lines.
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Number of lines that were decoded as Latin-1 so far.
    pub fn nb_latin1(&self) -> usize {
        self.nb_latin1
    }

    /// Get next line (read until `\n`)
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let mut buf = Vec::new();
        match self.br.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            _ => {
                // remove the trailing newline (and carriage return).
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
                if std::str::from_utf8(&buf).is_err() {
                    self.nb_latin1 += 1;
                }
                Some(Ok(decode_line(buf)))
            }
        }
    }
}

impl LineReader<Box<dyn BufRead>> {
    /// Open `src`, decompressing it if its extension is `gz`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        let br: Box<dyn BufRead> = if src.extension() == Some(OsStr::new("gz")) {
            debug!("{:?}: reading as gzip", src);
            // gzipped dumps can be multipart.
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(br))
    }
}

impl<T> Iterator for LineReader<T>
where
    T: BufRead,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_line()? {
                Ok(line) if self.skip_blank_lines && line.trim().is_empty() => continue,
                res => return Some(res),
            }
        }
    }
}

/// Read every line of `src` in memory.
pub fn read_lines(src: &Path, skip_blank_lines: bool) -> Result<Vec<String>, Error> {
    let mut reader = LineReader::from_path(src)?.skip_blank_lines(skip_blank_lines);
    let lines = reader.by_ref().collect::<Result<Vec<String>, Error>>()?;
    if reader.nb_latin1() > 0 {
        info!(
            "{:?}: {} lines were not valid UTF-8 and were decoded as Latin-1",
            src,
            reader.nb_latin1()
        );
    }
    info!("{:?}: read {} lines", src, lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use flate2::{write::GzEncoder, Compression};

    #[test]
    fn test_iter() {
        let corpus = Cursor::new(
            "product/productId: P1
review/text: hello

product/productId: P2
review/text: bye",
        );

        let expected = vec![
            "product/productId: P1",
            "review/text: hello",
            "product/productId: P2",
            "review/text: bye",
        ];

        let lines: Vec<String> = LineReader::new(corpus).map(|l| l.unwrap()).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_keep_blank() {
        let corpus = Cursor::new("a\n\nb\n");
        let lines: Vec<String> = LineReader::new(corpus)
            .skip_blank_lines(false)
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_crlf() {
        let corpus = Cursor::new("a\r\nb\r\n");
        let lines: Vec<String> = LineReader::new(corpus).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_latin1() {
        // "caf\xe9" is "café" in Latin-1, and is not valid UTF-8.
        let corpus = Cursor::new(b"review/text: caf\xe9\nreview/text: th\xc3\xa9\n".to_vec());
        let mut reader = LineReader::new(corpus);
        let lines: Vec<String> = reader.by_ref().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["review/text: café", "review/text: thé"]);
        assert_eq!(reader.nb_latin1(), 1);
    }

    #[test]
    fn test_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"a\nb\n\nc\n").unwrap();
        enc.finish().unwrap();

        let lines = read_lines(&path, true).unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = read_lines(&dir.path().join("nope.txt"), true);
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
