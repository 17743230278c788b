mod operation;
mod toll_app;

pub use operation::TollOperation;
pub use toll_app::TollApp;
