pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{parse_date, parse_day_month_year, parse_month, parse_week};
pub(crate) use timezone::Timezone;
