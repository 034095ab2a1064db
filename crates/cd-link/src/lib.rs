pub mod config;
pub mod error;
pub mod mock;
pub mod reader;
pub mod safety;
pub mod types;

pub use config::LinkConfig;
pub use error::{LinkError, LinkResult};
pub use mock::{MockScanner, MockSession};
pub use reader::DtcReader;
pub use types::{AdapterScanner, AdapterSession, RawResponse};
