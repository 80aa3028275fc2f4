pub mod controller;
pub mod resample;
pub mod view;
pub mod window;
