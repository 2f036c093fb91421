use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Store dropped, action for {context} discarded")]
    StoreDropped { context: &'static str },
    #[error("No async runtime available to spawn task {context}")]
    NoRuntime { context: &'static str },
}

impl Error {
    pub fn store_dropped(context: &'static str) -> Self {
        Self::StoreDropped { context }
    }

    pub fn no_runtime(context: &'static str) -> Self {
        Self::NoRuntime { context }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
