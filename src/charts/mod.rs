//! Chart renderers.
//!
//! Each renderer is a pure function of a table (or filtered view) and the
//! relevant selection fields, returning one plot. None of them reads
//! another's output.

pub mod distribution;
pub mod metrics;
pub mod panels;
pub mod proportion;
pub mod relationship;
pub mod trend;

pub use distribution::{box_chart, distribution_chart};
pub use metrics::metrics;
pub use panels::{raw_data, statistics};
pub use proportion::{donut_chart, percent_label};
pub use relationship::age_category_chart;
pub use trend::line_chart;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::data::RecordTable;

    pub const SAMPLE: &str = "\
Age,Gender,Height,Weight,BMI,PhysicalActivityLevel,ObesityCategory
18,Male,170.0,60.0,20.8,2,Normal weight
25,Female,160.0,80.0,31.2,1,Obese
40,Male,180.0,90.0,27.8,3,Overweight
70,Female,150.0,50.0,22.2,4,Normal weight
40,Female,170.0,70.0,24.2,2,Normal weight
";

    pub fn table() -> RecordTable {
        RecordTable::from_csv_str(SAMPLE).unwrap()
    }
}
