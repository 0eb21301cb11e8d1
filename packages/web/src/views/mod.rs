mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod post_detail;
pub use post_detail::PostDetail;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;
