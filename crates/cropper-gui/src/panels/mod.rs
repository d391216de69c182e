pub mod controls;
pub mod preview;
pub mod status;
