pub mod auth;

pub mod users;

pub mod classrooms;

pub mod members;

pub mod invitations;

pub mod sections;

pub mod posts;

pub mod comments;

pub mod submissions;

pub mod grades;

pub mod files;

pub use auth::configure_auth_routes;
pub use classrooms::configure_classrooms_routes;
pub use invitations::configure_invitations_routes;
pub use users::configure_user_routes;
