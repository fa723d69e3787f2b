//! The "mark as interesting" control: a pure state machine plus the async
//! driver that talks to the server on its behalf.

pub mod driver;
pub mod machine;
