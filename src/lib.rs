pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipeline;
pub mod transformers;
