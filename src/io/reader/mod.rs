/*! Corpus reading utilities

Corpus files are read line by line. Each line is decoded on its own so that a single badly encoded line
does not prevent reading the rest of the file.
!*/
mod textreader;

pub use textreader::{decode_line, read_lines, LineReader};
