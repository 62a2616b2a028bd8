//! The Petri net domain

pub mod node;
pub use node::*;

pub mod net;
pub use net::*;

pub mod predicate;
pub use predicate::*;

pub mod predicate_parser;

pub mod path;
pub use path::*;

pub mod enumerator;
pub use enumerator::*;

pub mod graphviz;
pub use graphviz::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type PNResult<T> = std::result::Result<T, PNError>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum PNError {
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    #[error("node `{0}` is already part of the net")]
    DuplicateNode(String),
    #[error("arc {from} -> {to} connects two nodes of the same kind")]
    NotBipartite { from: String, to: String },
    #[error("a path holds at least one node")]
    EmptyPath,
    #[error("path enumeration stopped after {0} paths")]
    PathLimit(usize),
    #[error("could not parse `{input}`: {message}")]
    Parse { input: String, message: String },
    #[error("json: {0}")]
    Json(String),
}

impl std::convert::From<serde_json::Error> for PNError {
    fn from(e: serde_json::Error) -> Self {
        PNError::Json(e.to_string())
    }
}

impl PNError {
    pub fn parse<T: fmt::Display>(input: &str, message: T) -> PNError {
        PNError::Parse {
            input: input.to_string(),
            message: message.to_string(),
        }
    }
}
