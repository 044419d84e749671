pub(crate) mod date;
pub(crate) mod scratch;
pub(crate) mod timezone;

pub(crate) use date::{date_key, parse_date, with_year_or_rollover};
pub(crate) use scratch::ScratchDir;
pub(crate) use timezone::Timezone;
