pub mod force_graph;
mod investigation_alert;
mod profile_form;
mod relative_form;
mod relatives_list;

pub use investigation_alert::InvestigationAlert;
pub use profile_form::ProfileForm;
pub use relative_form::RelativeForm;
pub use relatives_list::RelativesList;
