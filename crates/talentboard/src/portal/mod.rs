//! Job-portal workflows. The application scoring pipeline is the only
//! workflow owned by this crate; listings, profiles, and admin chrome live
//! in the surrounding web application.

pub mod applications;
