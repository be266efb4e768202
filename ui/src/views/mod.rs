mod alerts;
pub use alerts::Alerts;

mod consumption;
pub use consumption::Consumption;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;
