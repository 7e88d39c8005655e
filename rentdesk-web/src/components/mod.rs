pub(crate) mod data_table;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod payment_statistics;
pub(crate) mod route_guard;
pub(crate) mod user_dropdown;

pub use data_table::DataTable;
pub use payment_statistics::PaymentStatisticsCard;
