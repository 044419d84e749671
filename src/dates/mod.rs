//! Historical date selection and the used-date log

pub(crate) mod selector;
pub(crate) mod store;
pub(crate) mod window;

pub(crate) use selector::DateSelector;
pub(crate) use store::DateStore;
pub(crate) use window::TimeWindow;
