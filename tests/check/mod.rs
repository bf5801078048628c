mod legacy_fallback_contract;
mod override_directory_contract;
mod reports_missing_contract;
