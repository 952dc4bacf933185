pub mod formatter;

pub use formatter::{
    format_count, format_json, format_months, format_report_detail, format_report_table,
    format_score, format_tsv, should_use_colors,
};
