pub mod check;
pub mod dispatch;
pub mod index;
pub mod show;
