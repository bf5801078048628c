mod fetches_configured_sources_contract;
