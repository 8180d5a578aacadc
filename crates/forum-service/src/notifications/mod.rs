//! Notification fan-out
//!
//! Services push domain events onto an in-process queue; a background worker
//! turns them into per-recipient notifications. Delivery is best effort: no
//! retries, no ordering guarantee, and a failure never reaches the request
//! that caused it.

mod audience;
mod dispatcher;
mod worker;

pub use audience::{plan_for, Audience, NotificationPlan};
pub use dispatcher::{NotificationDispatcher, NotificationQueue};
pub use worker::NotificationWorker;
