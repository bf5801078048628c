mod resolution_scenarios_contract;
