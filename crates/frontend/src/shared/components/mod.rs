pub mod data_table;
pub mod export_button;
pub mod filter_fields;
pub mod filter_toolbar;
pub mod pagination_controls;
pub mod table;

pub use data_table::{CellFragment, ColumnDef, DataTable, Tone};
pub use export_button::ExportButton;
pub use filter_fields::{DateFilter, SelectFilter};
pub use filter_toolbar::FilterToolbar;
pub use pagination_controls::PaginationControls;
