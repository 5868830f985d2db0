/*!
# Review writing

- [BlockWriter] re-emits reviews as corpus blocks (one canonical line per field, padded with ignored tags),
- [JsonLinesWriter] writes one JSON document per line,
- [CsvWriter] writes serializable rows (such as [crate::dataset::LabelledText]) to CSV.

All writers implement [WriterTrait].
!*/
mod blockwriter;
mod csvwriter;
mod jsonlwriter;
mod writertrait;

pub use blockwriter::{emit_block, BlockWriter};
pub use csvwriter::CsvWriter;
pub use jsonlwriter::JsonLinesWriter;
pub use writertrait::WriterTrait;
