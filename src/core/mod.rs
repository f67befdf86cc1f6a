//! Business logic for the workshop: notification composition and the
//! validated service layer over the domain models.

pub mod notifications;
pub mod services;
