mod env_source;
mod weight_fetcher;
mod weights_filesystem;

pub use env_source::EnvSource;
pub use weight_fetcher::WeightFetcher;
pub use weights_filesystem::WeightsFilesystem;
