mod gauge;
mod loading;
mod nav;
mod network_list;
mod readout_cards;
mod series_chart;
mod status_badge;
mod unit_select;

pub use gauge::Gauge;
pub use loading::Loading;
pub use nav::Nav;
pub use network_list::NetworkList;
pub use readout_cards::ReadoutCards;
pub use series_chart::SeriesChart;
pub use status_badge::StatusBadge;
pub use unit_select::UnitSelect;
