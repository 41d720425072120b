pub mod load;
pub mod render;

pub use load::{load_dataset, load_dataset_from_reader};
pub use render::{register_chart_font, BarChartRenderer, ChartRenderer};
