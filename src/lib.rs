pub mod console;
pub mod currency;
pub mod engine;
pub mod error;
pub mod validator;
