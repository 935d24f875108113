pub mod chart_service_impl;
