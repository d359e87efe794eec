mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::round_to;
pub use time_utils::{
    TimeUtils, first_day_of_month, format_date, last_day_of_month, local_today, parse_date, whole_days_between,
};

pub(crate) use maths_utils::get_max;
