//! Publishing targets and dispatcher for the Penna content agent.
//!
//! Each publisher isolates its own failures: the outer contract is a
//! boolean success status, and no publish call ever raises past its own
//! boundary. Failed publishes are logged with the platform's response body
//! for diagnosis; the content itself is already backed up locally before
//! any publish attempt.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod linkedin;
mod medium;
mod target;

pub use dispatcher::PublishDispatcher;
pub use linkedin::LinkedInPublisher;
pub use medium::MediumPublisher;
pub use target::PublishTarget;
