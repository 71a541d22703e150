pub mod info_card;
pub mod ring_gauge;
pub mod sparkline_panel;
