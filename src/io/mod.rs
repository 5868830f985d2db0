/*!
# IO utilities

Corpus loading and saving.

- [reader] reads corpus files (plain or gzipped) into decoded lines,
- [writer] writes reviews back as corpus blocks, JSON lines or CSV tables.
!*/
pub mod reader;
pub mod writer;
