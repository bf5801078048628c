/// Port for reading configuration variables.
///
/// Settings are built from a single lookup source so that tests never touch
/// the process environment.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}
