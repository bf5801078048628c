use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Compute device requested for inference.
///
/// `cuda` may carry an ordinal (`cuda:1`), which is passed to the service as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Cuda(Option<u32>),
    Cpu,
}

impl Default for Device {
    fn default() -> Self {
        Device::Cuda(None)
    }
}

impl FromStr for Device {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.split_once(':') {
            None if normalized == "cuda" => Ok(Device::Cuda(None)),
            None if normalized == "cpu" => Ok(Device::Cpu),
            Some(("cuda", ordinal)) => ordinal
                .parse()
                .map(|index| Device::Cuda(Some(index)))
                .map_err(|_| AppError::InvalidDevice(s.to_string())),
            _ => Err(AppError::InvalidDevice(s.to_string())),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cuda(None) => f.write_str("cuda"),
            Device::Cuda(Some(index)) => write!(f, "cuda:{}", index),
            Device::Cpu => f.write_str("cpu"),
        }
    }
}
