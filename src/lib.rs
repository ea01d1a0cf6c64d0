//! # zerocsv
//!
//! A zero-copy CSV reader.
//!
//! The input is held in a single immutable [`Buffer`], either a read-only
//! memory mapping of a file or caller-supplied bytes. Rows and cells are
//! lazily computed slices of that buffer; nothing is allocated until a cell's
//! value is requested with [`Cell::value`].
//!
//! ```
//! use zerocsv::{Dialect, Reader};
//!
//! let reader = Reader::from_text("a,\"b,c\",d", Dialect::default().header(false));
//! let row = reader.rows().next().unwrap();
//! let cells: Vec<String> = row.cells().map(|c| c.value()).collect();
//! assert_eq!(cells, ["a", "\"b,c\"", "d"]);
//! ```

pub mod cells;
pub mod dialect;
pub mod error;
pub mod header;
pub mod io;
pub mod reader;
pub mod rows;
pub mod span;
pub mod trim;
pub mod value;
pub mod writer;


pub use cells::{Cell, Cells};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use header::{Header, NamedRow, NamedRows};
pub use io::Buffer;
pub use reader::Reader;
pub use rows::{count_rows, Row, Rows};
pub use span::Span;
pub use trim::{Trim, TrimPolicy};
pub use writer::Writer;
