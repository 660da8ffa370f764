#[cfg(test)]
mod common;

#[cfg(test)]
mod router_totality_tests;

#[cfg(test)]
mod public_whitelist_tests;

#[cfg(test)]
mod role_ownership_tests;

#[cfg(test)]
mod session_lifecycle_tests;

#[cfg(test)]
mod responsive_latch_tests;

#[cfg(test)]
mod dashboard_dispatch_tests;

#[cfg(test)]
mod menu_consistency_tests;

#[cfg(test)]
mod catalog_filter_tests;

#[cfg(test)]
mod scenario_tests;
