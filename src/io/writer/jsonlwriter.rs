//! JSON lines writer.
use std::io::Write;

use serde::Serialize;

use crate::error::Error;

use super::WriterTrait;

/// Writes one JSON document per line.
pub struct JsonLinesWriter<W: Write, T> {
    handle: W,
    _item: std::marker::PhantomData<T>,
}

impl<W: Write, T> JsonLinesWriter<W, T> {
    pub fn new(handle: W) -> Self {
        Self {
            handle,
            _item: std::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

impl<W: Write, T: Serialize> WriterTrait for JsonLinesWriter<W, T> {
    type Item = T;

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Parser, ParserConfig};

    #[test]
    fn write_reviews() {
        let lines = vec![
            "product/productId: P1",
            "review/userId: U1",
            "review/helpfulness: 1/2",
            "review/text: \"quoted\" and\ttabbed",
        ];
        let parser = Parser::new(ParserConfig {
            block_size: 4,
            ..Default::default()
        })
        .unwrap();
        let reviews = parser.parse(&lines).unwrap();

        let mut wr = JsonLinesWriter::new(Vec::new());
        wr.write(reviews.clone()).unwrap();
        wr.write_single(&reviews[0]).unwrap();
        let out = String::from_utf8(wr.into_inner()).unwrap();

        assert_eq!(out.lines().count(), 2);
        for line in out.lines() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["product_id"], "P1");
            assert_eq!(v["text"], "\"quoted\" and\ttabbed");
            assert_eq!(v["helpfulness_ratio"], 0.5);
        }
    }
}
