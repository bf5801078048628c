mod http_weight_fetcher;
mod local_filesystem;
mod process_env;

pub use http_weight_fetcher::{HttpFetcherConfig, HttpWeightFetcher};
pub use local_filesystem::LocalFilesystem;
pub use process_env::ProcessEnv;
