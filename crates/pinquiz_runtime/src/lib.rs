pub mod poller;
pub mod rig;
pub mod runner;
pub mod signaler;
