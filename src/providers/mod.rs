pub mod efficientip;
