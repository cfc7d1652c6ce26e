pub mod data_set;
pub mod geometry;
pub mod primitives;
pub mod types;

pub use data_set::{Bar, DataElement, DataSet, ElementRef, Limit};
pub use geometry::{
    DEFAULT_BAR_WIDTH_PX, MIN_NORMALIZATION_VALUE, bar_height, default_selection, limit_offset,
    max_value,
};
pub use types::Viewport;
