pub mod formatter;

pub use formatter::{
    format_banner, format_catalog, format_crop_detail, format_disclaimer, format_json,
    format_table, format_tsv, should_use_colors,
};
