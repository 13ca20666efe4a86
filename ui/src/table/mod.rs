pub mod column;
pub mod engine;
mod view;

pub use column::{CellValue, Column, FilterKind};
pub use engine::{RowWindow, Sort, TableState};
pub use view::DataTable;
