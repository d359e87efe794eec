mod provider;

pub use provider::{DatasetProvider, JsonDirProvider};
