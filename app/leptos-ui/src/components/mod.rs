pub mod charts;
pub mod drawer;
pub mod flow_canvas;
pub mod focus_trap;
pub mod icons;
pub mod kpi_card;
pub mod modal;
pub mod nav_bar;
pub mod spinner;
pub mod status_chip;
pub mod tabs;
pub mod top_bar;
