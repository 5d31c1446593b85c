pub mod indicator_table;
pub mod price_series;
pub mod value;

pub use indicator_table::*;
pub use price_series::*;
pub use value::*;
