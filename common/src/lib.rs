//! Plant Report Common Library
//!
//! 検索結果JSONの型定義・パース・突き合わせロジック（ファイルI/Oなし）

pub mod types;
pub mod error;
pub mod parser;
pub mod annotate;

pub use types::{AppRecord, Dataset, FieldValue, Identifier, RankedMatch};
pub use error::{Error, Result};
pub use parser::{parse_dataset, ALL_APPS_KEY, TOP_RESULTS_KEY};
pub use annotate::{AnnotatedRow, Report, TopResultIndex, PREVIEW_CHARS};
