mod contacts;
mod dashboard;
mod layout;
mod my_list;
mod not_found;
mod settings;
mod users;

pub use contacts::{ContactDetail, ContactListing};
pub use dashboard::Dashboard;
pub use layout::AppLayout;
pub use my_list::MyList;
pub use not_found::NotFound;
pub use settings::Settings;
pub use users::Users;
