mod path_resolver;
mod validator;

pub use path_resolver::PathResolver;
pub use validator::Validator;
