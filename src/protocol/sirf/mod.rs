//! SiRF binary protocol: packet framer/decoder for receiver output and the
//! builder for the three supported input messages.
pub mod command;
pub mod framer;
pub mod messages;
