//! `Hype` - Declarative command registration and dispatch for CLI applications
//!
//! Functions are registered as commands on an [`App`]; each command's
//! parameters and types are resolved into a [`CommandDescriptor`]. Running
//! the app declares one long option per command, parses the input once and
//! calls every registered function with its value.
//!
//! ```
//! use hype::App;
//! use hype::Function;
//! use hype::parser::MockParser;
//! use serde_json::json;
//!
//! let mut app = App::new();
//! let greet = Function::unary("greet", "name", |name: String| {
//!     println!("Hello {name}!");
//!     Ok(())
//! });
//! app.command(&greet).register().unwrap();
//!
//! let mut parser = MockParser::new().with_value("greet", json!("World"));
//! app.run_with(&mut parser).unwrap();
//! ```

pub mod app;
pub mod command;
pub mod error;
pub mod parser;

pub use app::{App, AppConfig, CommandBuilder, CommandRegistry, DuplicatePolicy};
pub use command::{ArgType, ArgValue, CommandDescriptor, Function, Parameter};
pub use error::HypeError;
