mod dashboard;
pub use dashboard::Dashboard;

mod procurement;
pub use procurement::ProcurementDashboard;

mod module;
pub use module::ModuleDetail;

mod not_found;
pub use not_found::NotFound;
