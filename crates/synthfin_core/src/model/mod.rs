mod platform;
mod record;
mod table;
mod years;

pub use platform::{PlatformConfig, RateSchedule};
pub use record::{Column, YEAR_HEADER, YearRecord};
pub use table::{FinancialTable, csv_file_name};
pub use years::YearRange;
