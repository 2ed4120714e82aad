/// Command line arguments
pub mod args;
/// Commands and how they run
pub mod commands;
/// CLI errors
pub mod error;
/// Ways of naming a pool on the command line
pub mod specifiers;
