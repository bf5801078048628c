use std::io::Write;

use url::Url;

use crate::domain::AppError;

/// Port for retrieving a weight file from a remote location.
pub trait WeightFetcher {
    /// Stream the body at `url` into `sink`, returning the number of bytes written.
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError>;
}
